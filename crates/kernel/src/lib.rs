//! Cube kernel: authoritative cube state, face turns, turn log and replay.
//!
//! # Invariants
//! - Six faces, each 3x3, at all times.
//! - Every turn is a permutation of the 54 stickers.
//! - A turn followed by its inverse restores the prior faces exactly.
//! - All state mutations flow through the six face operations.

pub mod cube;
pub mod rotate;

pub use cube::{Cube, CubeEvent, FaceGrid, Layout, SIDE};
pub use rotate::rotate;
