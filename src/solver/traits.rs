//! The solver capability and its baseline implementation.
//!
//! The cube never solves itself. A `Solver` is handed the canonical
//! 54-letter encoding and answers with a move list or an explicit failure.
//! Which solver to use is decided once by the caller and injected.

use tracing::{debug, warn};

use crate::core::{CubeResult, CubeState};
use crate::moves::{format_sequence, parse_sequence, Move};

/// Anything that can turn a canonical state encoding into a move list.
pub trait Solver: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Solve the state described by `canonical` (see
    /// [`CubeState::encode_canonical`]).
    ///
    /// On success the moves, replayed from that state, should reach the
    /// solved state. Failures are `SolverUnavailable` or `SolverRejected`.
    fn solve(&self, canonical: &str) -> CubeResult<Vec<Move>>;
}

impl<S: Solver + ?Sized> Solver for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn solve(&self, canonical: &str) -> CubeResult<Vec<Move>> {
        (**self).solve(canonical)
    }
}

/// Ask `solver` for a solution to `cube`. Does not change the cube.
pub fn solve(cube: &CubeState, solver: &dyn Solver) -> CubeResult<Vec<Move>> {
    let canonical = cube.encode_canonical();
    debug!(solver = solver.name(), %canonical, "solve requested");

    match solver.solve(&canonical) {
        Ok(moves) => {
            debug!(solver = solver.name(), length = moves.len(), solution = %format_sequence(&moves), "solve finished");
            Ok(moves)
        }
        Err(err) => {
            warn!(solver = solver.name(), error = %err, "solve failed");
            Err(err)
        }
    }
}

/// Placeholder used when no real solver is available.
///
/// Always answers with the same fixed, non-optimal sequence regardless of
/// the state. It does not solve anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct FallbackSolver;

impl FallbackSolver {
    /// The fixed answer.
    pub const SEQUENCE: &'static str = "R U R' U' R U R' U' F R U' R' F'";

    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Solver for FallbackSolver {
    fn name(&self) -> &str {
        "fallback"
    }

    fn solve(&self, _canonical: &str) -> CubeResult<Vec<Move>> {
        parse_sequence(Self::SEQUENCE)
    }
}

/// Pick the solver for this run: the real one if present, else the fallback.
#[must_use]
pub fn select_solver(real: Option<Box<dyn Solver>>) -> Box<dyn Solver> {
    match real {
        Some(solver) => {
            debug!(solver = solver.name(), "solver selected");
            solver
        }
        None => {
            warn!("no solver available, using fallback sequence");
            Box::new(FallbackSolver::new())
        }
    }
}
