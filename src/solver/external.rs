//! Adapter for a solver that speaks plain text.
//!
//! Two-phase solvers usually take the 54-letter facelet string and reply
//! with a space-separated move list, an empty string when the cube is
//! already solved, or a message starting with `Error` when the facelets do
//! not describe a solvable cube.

use crate::core::{CubeError, CubeResult};
use crate::moves::{parse_sequence, Move};

use super::traits::Solver;

/// Interpret a text solver's reply.
pub fn parse_solver_reply(reply: &str) -> CubeResult<Vec<Move>> {
    let reply = reply.trim();
    if reply.starts_with("Error") {
        return Err(CubeError::SolverRejected(reply.to_string()));
    }
    parse_sequence(reply)
}

/// A text solver supplied as a function.
///
/// The function returns `Ok(reply)` when it produced an answer and
/// `Err(reason)` when the solver itself could not run (missing binary,
/// library not loaded, timeout). The latter becomes `SolverUnavailable`.
pub struct FnSolver<F> {
    name: String,
    solve_fn: F,
}

impl<F> FnSolver<F>
where
    F: Fn(&str) -> Result<String, String> + Send + Sync,
{
    pub fn new(name: impl Into<String>, solve_fn: F) -> Self {
        Self {
            name: name.into(),
            solve_fn,
        }
    }
}

impl<F> Solver for FnSolver<F>
where
    F: Fn(&str) -> Result<String, String> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn solve(&self, canonical: &str) -> CubeResult<Vec<Move>> {
        let reply = (self.solve_fn)(canonical).map_err(CubeError::SolverUnavailable)?;
        parse_solver_reply(&reply)
    }
}
