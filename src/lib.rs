//! # rust-cube
//!
//! State and move engine for a 3x3x3 twisty puzzle.
//!
//! ## Design Principles
//!
//! 1. **One rule per face**: Each face has a single clockwise permutation
//!    table. Counter-clockwise and half turns repeat it, so there is one
//!    place to get the cube's adjacency right.
//!
//! 2. **Plain values**: `CubeState` is an ordinary value type. Cloning is a
//!    deep copy; there is no shared or global state.
//!
//! 3. **Solving is injected**: The crate encodes the cube for an external
//!    solver and replays its answer, but never searches for solutions
//!    itself. Callers pick a `Solver` once and pass it in.
//!
//! ## Modules
//!
//! - `core`: Colors, faces, cube state, encodings, RNG, errors
//! - `moves`: Move tokens, face turns, scrambles
//! - `input`: Validated manual facelet input
//! - `solver`: Solver capability, fallback, text-solver adapter
//! - `session`: Session handle and solution playback
//!
//! ## Example
//!
//! ```
//! use rust_cube::{CubeState, Move, Face};
//!
//! let mut cube = CubeState::solved();
//! cube.execute_move("R").unwrap();
//! assert!(!cube.is_solved());
//! cube.apply_move(Move::counter_clockwise(Face::Right));
//! assert!(cube.is_solved());
//! ```

pub mod core;
pub mod input;
pub mod moves;
pub mod session;
pub mod solver;

// Re-export commonly used types
pub use crate::core::{
    Color, CubeError, CubeResult, CubeRng, CubeRngState, CubeState, Face, FaceGrid, FaceMap,
};

pub use crate::moves::{format_sequence, parse_sequence, scramble, Move, Turn};

pub use crate::input::ManualInput;

pub use crate::solver::{select_solver, solve, FallbackSolver, FnSolver, Solver};

pub use crate::session::{CubeSession, Playback, PlaybackStep, SessionConfig};
