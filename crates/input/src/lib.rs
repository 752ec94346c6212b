//! Command input: turn notation parsed into `Turn`s and applied to a cube.
//!
//! # Invariants
//! - Tokens are applied strictly left to right, one `Cube::apply` each.
//! - A syntax error stops execution at the failing token; turns already
//!   applied stay applied.

pub mod command;

pub use command::{
    CommandError, execute, execute_with, format_sequence, inverse_sequence, parse, parse_turn,
};
