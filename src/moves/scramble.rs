//! Random scrambles.

use tracing::debug;

use super::engine::apply_move;
use super::token::{format_sequence, Move};
use crate::core::{CubeRng, CubeState};

/// Draw `move_count` tokens uniformly from all 18, applying each as drawn.
///
/// No cancellation filtering: immediate repeats and redundant pairs such as
/// `R R'` are allowed. Returns the drawn sequence for display or replay.
pub fn scramble(cube: &mut CubeState, move_count: usize, rng: &mut CubeRng) -> Vec<Move> {
    let mut moves = Vec::with_capacity(move_count);
    for _ in 0..move_count {
        let mv = Move::ALL[rng.gen_range_usize(0..Move::ALL.len())];
        apply_move(cube, mv);
        moves.push(mv);
    }

    debug!(move_count, scramble = %format_sequence(&moves), "scrambled cube");
    moves
}
