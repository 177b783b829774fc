//! Core cube types: colors, faces, state, RNG, errors.
//!
//! Everything here is a plain value. The move engine in `moves` is the only
//! code that changes a `CubeState` while keeping it a legal cube.

pub mod color;
pub mod error;
pub mod face;
pub mod rng;
pub mod state;

pub use color::Color;
pub use error::{CubeError, CubeResult};
pub use face::{rotate_grid_clockwise, Face, FaceGrid, FaceMap};
pub use rng::{CubeRng, CubeRngState};
pub use state::{CubeState, CANONICAL_LEN, FACELETS_PER_FACE};
