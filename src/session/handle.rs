//! Explicit session handle.
//!
//! Holds the current cube plus the last scramble and solution shown to a
//! user. Front ends own a `CubeSession` and pass it around; nothing in the
//! crate keeps process-wide state.

use tracing::{debug, info};

use super::config::SessionConfig;
use super::playback::Playback;
use crate::core::{CubeResult, CubeRng, CubeState};
use crate::input::ManualInput;
use crate::moves::{scramble, Move};
use crate::solver::{solve, Solver};

/// A cube together with its scramble/solution history.
#[derive(Clone, Debug)]
pub struct CubeSession {
    config: SessionConfig,
    cube: CubeState,
    rng: CubeRng,
    scramble: Vec<Move>,
    solution: Vec<Move>,
}

impl Default for CubeSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl CubeSession {
    /// Start a session on a solved cube.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let rng = CubeRng::new(config.seed);
        Self {
            config,
            cube: CubeState::solved(),
            rng,
            scramble: Vec::new(),
            solution: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The live cube.
    #[must_use]
    pub fn cube(&self) -> &CubeState {
        &self.cube
    }

    /// Moves of the most recent scramble.
    #[must_use]
    pub fn scramble_moves(&self) -> &[Move] {
        &self.scramble
    }

    /// Moves of the most recent solution, empty if none is pending.
    #[must_use]
    pub fn solution_moves(&self) -> &[Move] {
        &self.solution
    }

    /// Back to a solved cube with no scramble or solution.
    pub fn reset(&mut self) {
        self.cube = CubeState::solved();
        self.scramble.clear();
        self.solution.clear();
        debug!("session reset");
    }

    /// Start from a solved cube and apply a fresh random scramble of
    /// `config.scramble_length` moves.
    pub fn scramble(&mut self) -> &[Move] {
        self.cube = CubeState::solved();
        self.solution.clear();
        self.scramble = scramble(&mut self.cube, self.config.scramble_length, &mut self.rng);
        &self.scramble
    }

    /// Ask `solver` for a solution and keep it for playback.
    ///
    /// The cube is not changed. On failure no solution is kept.
    pub fn solve(&mut self, solver: &dyn Solver) -> CubeResult<&[Move]> {
        self.solution.clear();
        self.solution = solve(&self.cube, solver)?;
        Ok(&self.solution)
    }

    /// Apply one move token to the live cube.
    ///
    /// Any pending solution no longer matches the cube and is dropped.
    pub fn execute_move(&mut self, token: &str) -> CubeResult<Move> {
        let mv = self.cube.execute_move(token)?;
        self.solution.clear();
        Ok(mv)
    }

    /// Overwrite the cube from manual input. All-or-nothing.
    ///
    /// Any pending solution no longer matches the cube and is dropped.
    pub fn apply_manual_input(&mut self, input: &ManualInput) -> CubeResult<()> {
        input.apply(&mut self.cube)?;
        self.solution.clear();
        Ok(())
    }

    /// Replay the pending solution on an independent copy of the cube.
    #[must_use]
    pub fn playback(&self) -> Playback {
        info!(moves = self.solution.len(), "starting solution playback");
        Playback::new(&self.cube, self.solution.clone())
    }
}
