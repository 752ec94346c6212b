//! Shared vocabulary for the cube engine.
//!
//! # Invariants
//! - Exactly six faces, addressed by `Face`, never by string keys.
//! - A `Turn` is always one face plus one direction; there is no "no-op" turn.

mod types;

pub use types::{Color, Direction, Face, Sticker, Turn};
