//! Developer Tooling: read-only cube inspection.
//!
//! # Invariants
//! - Tools never mutate the cube.

mod inspector;

pub use inspector::{CubeInspector, CubeSummary, FaceInfo};

pub fn crate_info() -> &'static str {
    concat!("twisty-tools v", env!("CARGO_PKG_VERSION"))
}
