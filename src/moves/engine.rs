//! Face-turn transforms.
//!
//! Each face has exactly one permutation rule: a clockwise quarter turn.
//! It rotates the face's own grid and cycles the four 3-sticker strips on
//! the neighbouring faces. Every other turn is that rule repeated
//! (`X'` = three times, `X2` = twice), so the ring tables below are the only
//! place the cube's adjacency is written down.
//!
//! ## Ring tables
//!
//! `ring(face)` lists the four strips around `face`. A clockwise turn moves
//! stickers `ring[k + 1] -> ring[k]` and `ring[0] -> ring[3]`, cell by cell
//! in the listed order. Coordinates follow the grid orientation documented
//! in `core::face`.

use tracing::trace;

use super::token::Move;
use crate::core::{rotate_grid_clockwise, Color, CubeResult, CubeState, Face};
use crate::core::Face::{Back as B, Down as D, Front as F, Left as L, Right as R, Up as U};

/// One facelet position: face, row, column.
type Cell = (Face, usize, usize);

/// Three facelets along the edge of a neighbouring face.
type Strip = [Cell; 3];

/// The four strips bordering `face`, in clockwise travel order.
const fn ring(face: Face) -> [Strip; 4] {
    match face {
        Face::Right => [
            [(U, 0, 2), (U, 1, 2), (U, 2, 2)],
            [(F, 0, 2), (F, 1, 2), (F, 2, 2)],
            [(D, 0, 2), (D, 1, 2), (D, 2, 2)],
            [(B, 2, 0), (B, 1, 0), (B, 0, 0)],
        ],
        Face::Up => [
            [(F, 0, 0), (F, 0, 1), (F, 0, 2)],
            [(R, 0, 0), (R, 0, 1), (R, 0, 2)],
            [(B, 0, 0), (B, 0, 1), (B, 0, 2)],
            [(L, 0, 0), (L, 0, 1), (L, 0, 2)],
        ],
        Face::Front => [
            [(U, 2, 0), (U, 2, 1), (U, 2, 2)],
            [(L, 2, 2), (L, 1, 2), (L, 0, 2)],
            [(D, 0, 2), (D, 0, 1), (D, 0, 0)],
            [(R, 0, 0), (R, 1, 0), (R, 2, 0)],
        ],
        Face::Left => [
            [(U, 0, 0), (U, 1, 0), (U, 2, 0)],
            [(B, 2, 2), (B, 1, 2), (B, 0, 2)],
            [(D, 0, 0), (D, 1, 0), (D, 2, 0)],
            [(F, 0, 0), (F, 1, 0), (F, 2, 0)],
        ],
        Face::Down => [
            [(F, 2, 0), (F, 2, 1), (F, 2, 2)],
            [(L, 2, 0), (L, 2, 1), (L, 2, 2)],
            [(B, 2, 0), (B, 2, 1), (B, 2, 2)],
            [(R, 2, 0), (R, 2, 1), (R, 2, 2)],
        ],
        Face::Back => [
            [(U, 0, 0), (U, 0, 1), (U, 0, 2)],
            [(R, 0, 2), (R, 1, 2), (R, 2, 2)],
            [(D, 2, 2), (D, 2, 1), (D, 2, 0)],
            [(L, 2, 0), (L, 1, 0), (L, 0, 0)],
        ],
    }
}

fn read_strip(cube: &CubeState, strip: &Strip) -> [Color; 3] {
    (*strip).map(|(face, row, col)| cube.facelet(face, row, col))
}

fn write_strip(cube: &mut CubeState, strip: &Strip, colors: [Color; 3]) {
    for (&(face, row, col), color) in strip.iter().zip(colors) {
        cube.face_grid_mut(face)[row][col] = color;
    }
}

/// The primitive: one clockwise quarter turn of `face`.
pub fn turn_clockwise(cube: &mut CubeState, face: Face) {
    let rotated = rotate_grid_clockwise(cube.face_grid(face));
    cube.set_face_grid(face, rotated);

    let ring = ring(face);
    let saved = read_strip(cube, &ring[0]);
    for k in 0..3 {
        let incoming = read_strip(cube, &ring[k + 1]);
        write_strip(cube, &ring[k], incoming);
    }
    write_strip(cube, &ring[3], saved);
}

/// Apply `times` clockwise quarter turns of `face`.
pub fn turn_repeated(cube: &mut CubeState, face: Face, times: usize) {
    for _ in 0..times {
        turn_clockwise(cube, face);
    }
}

/// Apply a single move.
pub fn apply_move(cube: &mut CubeState, mv: Move) {
    trace!(%mv, "apply move");
    turn_repeated(cube, mv.face, mv.turn.quarter_turns());
}

/// Apply moves in order.
pub fn apply_sequence(cube: &mut CubeState, moves: &[Move]) {
    for &mv in moves {
        apply_move(cube, mv);
    }
}

/// Parse and apply one token, returning the parsed move.
///
/// An unrecognized token fails with `UnrecognizedMove` and leaves the cube
/// untouched.
pub fn execute_move(cube: &mut CubeState, token: &str) -> CubeResult<Move> {
    let mv: Move = token.parse()?;
    apply_move(cube, mv);
    Ok(mv)
}

/// Parse a whitespace-separated sequence and apply it.
///
/// The whole sequence is parsed before any move is applied, so a bad token
/// anywhere leaves the cube untouched.
pub fn execute_sequence(cube: &mut CubeState, text: &str) -> CubeResult<Vec<Move>> {
    let moves = super::token::parse_sequence(text)?;
    apply_sequence(cube, &moves);
    Ok(moves)
}

impl CubeState {
    /// Apply a single move. See [`apply_move`].
    pub fn apply_move(&mut self, mv: Move) {
        apply_move(self, mv);
    }

    /// Apply moves in order. See [`apply_sequence`].
    pub fn apply_sequence(&mut self, moves: &[Move]) {
        apply_sequence(self, moves);
    }

    /// Parse and apply one token. See [`execute_move`].
    pub fn execute_move(&mut self, token: &str) -> CubeResult<Move> {
        execute_move(self, token)
    }
}
