//! Step-by-step replay of a move list on a private copy of the cube.
//!
//! A `Playback` owns its own `CubeState`, so a caller pacing through the
//! steps (one frame per move, say) is unaffected by anything done to the
//! live cube meanwhile.

use crate::core::CubeState;
use crate::moves::{apply_move, Move};

/// One replayed move and the state right after it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaybackStep {
    /// 1-based position of this move in the sequence.
    pub step: usize,
    /// Length of the whole sequence.
    pub total: usize,
    /// The move just applied.
    pub mv: Move,
    /// Cube state after the move.
    pub state: CubeState,
}

impl PlaybackStep {
    /// Fraction of the sequence done, in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.step as f64 / self.total as f64
    }
}

/// Iterator over the steps of a move list.
#[derive(Clone, Debug)]
pub struct Playback {
    cube: CubeState,
    moves: Vec<Move>,
    next: usize,
}

impl Playback {
    /// Replay `moves` starting from a copy of `start`.
    #[must_use]
    pub fn new(start: &CubeState, moves: Vec<Move>) -> Self {
        Self {
            cube: start.clone(),
            moves,
            next: 0,
        }
    }

    /// State after the steps taken so far.
    #[must_use]
    pub fn current(&self) -> &CubeState {
        &self.cube
    }

    /// True once every move has been replayed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.next >= self.moves.len()
    }

    /// Run the remaining steps and return the final state.
    #[must_use]
    pub fn finish(mut self) -> CubeState {
        while self.next < self.moves.len() {
            apply_move(&mut self.cube, self.moves[self.next]);
            self.next += 1;
        }
        self.cube
    }
}

impl Iterator for Playback {
    type Item = PlaybackStep;

    fn next(&mut self) -> Option<Self::Item> {
        let mv = *self.moves.get(self.next)?;
        apply_move(&mut self.cube, mv);
        self.next += 1;

        Some(PlaybackStep {
            step: self.next,
            total: self.moves.len(),
            mv,
            state: self.cube.clone(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.moves.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Playback {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::parse_sequence;

    #[test]
    fn test_steps_and_progress() {
        let moves = parse_sequence("R U R' U'").unwrap();
        let playback = Playback::new(&CubeState::solved(), moves.clone());
        assert_eq!(playback.len(), 4);

        let steps: Vec<_> = playback.collect();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0].step, 1);
        assert_eq!(steps[0].mv, moves[0]);
        assert_eq!(steps[3].total, 4);
        assert!((steps[1].progress() - 0.5).abs() < 1e-9);

        let mut expected = CubeState::solved();
        expected.apply_sequence(&moves[..2]);
        assert_eq!(steps[1].state, expected);
    }

    #[test]
    fn test_start_state_is_copied() {
        let mut live = CubeState::solved();
        let mut playback = Playback::new(&live, parse_sequence("R R R R").unwrap());

        live.execute_move("F").unwrap();
        let first = playback.next().unwrap();

        let mut expected = CubeState::solved();
        expected.execute_move("R").unwrap();
        assert_eq!(first.state, expected);
        assert!(playback.finish().is_solved());
    }

    #[test]
    fn test_empty_playback() {
        let mut playback = Playback::new(&CubeState::solved(), Vec::new());
        assert!(playback.is_finished());
        assert!(playback.next().is_none());
        assert!(playback.current().is_solved());
    }
}
