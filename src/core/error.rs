//! Error type shared by every fallible cube operation.
//!
//! All conditions here are local and recoverable. Nothing in the crate
//! retries on its own; the caller decides what to do with a rejected solve
//! or a malformed input string.

use thiserror::Error;

use super::face::Face;

/// Result alias used throughout the crate.
pub type CubeResult<T> = Result<T, CubeError>;

/// Everything that can go wrong when talking to the cube.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    /// A manually entered face string does not have exactly 9 symbols.
    #[error("face {face} must have exactly 9 characters, got {len}")]
    WrongLength { face: Face, len: usize },

    /// A manually entered face string contains a symbol outside W, Y, R, O, B, G.
    #[error("face {face} contains invalid color symbol {symbol:?}")]
    InvalidColorSymbol { face: Face, symbol: char },

    /// `decode_face` was handed a string that is not 9 symbols long.
    #[error("face {face} encoding must be 9 symbols, got {len}")]
    InvalidFaceEncoding { face: Face, len: usize },

    /// A canonical state string is not 54 symbols long.
    #[error("canonical encoding must be 54 symbols, got {len}")]
    InvalidCanonicalLength { len: usize },

    /// A canonical state string contains a symbol outside U, R, F, D, L, B.
    #[error("canonical encoding has unknown symbol {symbol:?} at index {index}")]
    InvalidCanonicalSymbol { index: usize, symbol: char },

    /// A move token outside the 18-token alphabet.
    #[error("unrecognized move token {0:?}")]
    UnrecognizedMove(String),

    /// The solver collaborator could not be reached or failed internally.
    #[error("solver unavailable: {0}")]
    SolverUnavailable(String),

    /// The solver collaborator reported the encoded state as unsolvable.
    #[error("solver rejected state: {0}")]
    SolverRejected(String),
}
