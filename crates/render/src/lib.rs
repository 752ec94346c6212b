//! Rendering Adapter: renderer-agnostic interface over cube state.
//!
//! # Invariants
//! - Renderer cannot mutate the cube.
//! - Output derives only from the six face grids and the chosen palette.

mod renderer;

pub use renderer::{NetTextRenderer, Palette, Renderer};

pub fn crate_info() -> &'static str {
    concat!("twisty-render v", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
