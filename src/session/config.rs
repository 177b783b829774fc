//! Session configuration parameters.

use serde::{Deserialize, Serialize};

/// Session configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Number of random moves drawn by `CubeSession::scramble`.
    pub scramble_length: usize,

    /// Seed for the scramble RNG.
    /// Same seed produces the same series of scrambles.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            scramble_length: 25,
            seed: 42,
        }
    }
}

impl SessionConfig {
    /// Set the scramble length.
    #[must_use]
    pub fn with_scramble_length(mut self, moves: usize) -> Self {
        self.scramble_length = moves;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
