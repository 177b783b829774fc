//! Move engine: tokens, face-turn transforms, scrambles.
//!
//! Moves are total, deterministic transitions on a `CubeState` with no
//! memory between calls. Only clockwise quarter turns have their own
//! permutation rule; counter-clockwise and half turns repeat it.

pub mod engine;
pub mod scramble;
pub mod token;

pub use engine::{
    apply_move, apply_sequence, execute_move, execute_sequence, turn_clockwise, turn_repeated,
};
pub use scramble::scramble;
pub use token::{format_sequence, invert_sequence, parse_sequence, Move, Turn};
