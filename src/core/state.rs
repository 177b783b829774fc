//! Cube state: six 3x3 facelet grids.
//!
//! `CubeState` is a plain value. `Clone` copies all 54 facelets, so a clone
//! taken before replaying a solution can never observe later edits to the
//! original.
//!
//! ## Encodings
//!
//! - Per face: 9 color symbols, row-major (`"WWWWWWWWW"`).
//! - Canonical: 54 solver letters, faces in U R F D L B order, each face
//!   row-major, colors translated by [`Color::solver_letter`]. This is what
//!   gets handed to an external solver.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::error::{CubeError, CubeResult};
use super::face::{Face, FaceGrid, FaceMap};

/// Number of facelets on one face.
pub const FACELETS_PER_FACE: usize = 9;

/// Length of the canonical solver encoding.
pub const CANONICAL_LEN: usize = FACELETS_PER_FACE * 6;

/// The full sticker state of a 3x3x3 cube.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CubeState {
    faces: FaceMap<FaceGrid>,
}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}

impl CubeState {
    /// A solved cube: Up White, Down Yellow, Front Red, Back Orange,
    /// Left Blue, Right Green.
    #[must_use]
    pub fn solved() -> Self {
        Self {
            faces: FaceMap::new(|face| [[face.solved_color(); 3]; 3]),
        }
    }

    /// Alias for [`CubeState::solved`].
    #[must_use]
    pub fn new() -> Self {
        Self::solved()
    }

    // === Face Access ===

    /// Read a face grid.
    #[must_use]
    pub fn face_grid(&self, face: Face) -> &FaceGrid {
        &self.faces[face]
    }

    /// Write access to a face grid.
    ///
    /// Direct edits bypass every invariant the move engine keeps.
    pub fn face_grid_mut(&mut self, face: Face) -> &mut FaceGrid {
        &mut self.faces[face]
    }

    /// Replace a whole face grid.
    pub fn set_face_grid(&mut self, face: Face, grid: FaceGrid) {
        self.faces[face] = grid;
    }

    /// Read one facelet.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..3`.
    #[must_use]
    pub fn facelet(&self, face: Face, row: usize, col: usize) -> Color {
        self.faces[face][row][col]
    }

    // === Per-face Encoding ===

    /// Encode a face as 9 color symbols, row-major.
    #[must_use]
    pub fn encode_face(&self, face: Face) -> String {
        self.faces[face]
            .iter()
            .flat_map(|row| row.iter().map(|c| c.symbol()))
            .collect()
    }

    /// Overwrite a face from 9 color symbols, row-major.
    ///
    /// Symbols are read case-insensitively. The face is left untouched on
    /// any error.
    pub fn decode_face(&mut self, face: Face, encoded: &str) -> CubeResult<()> {
        let len = encoded.chars().count();
        if len != FACELETS_PER_FACE {
            return Err(CubeError::InvalidFaceEncoding { face, len });
        }

        let mut grid = self.faces[face];
        for (i, symbol) in encoded.chars().enumerate() {
            let color = Color::from_symbol(symbol)
                .ok_or(CubeError::InvalidColorSymbol { face, symbol })?;
            grid[i / 3][i % 3] = color;
        }

        self.faces[face] = grid;
        Ok(())
    }

    // === Canonical Encoding ===

    /// Encode the whole cube in solver notation (54 letters, U R F D L B).
    #[must_use]
    pub fn encode_canonical(&self) -> String {
        let mut out = String::with_capacity(CANONICAL_LEN);
        for face in Face::CANONICAL_ORDER {
            for row in &self.faces[face] {
                out.extend(row.iter().map(|c| c.solver_letter()));
            }
        }
        out
    }

    /// Rebuild a cube from its canonical solver encoding.
    pub fn from_canonical(encoded: &str) -> CubeResult<Self> {
        let letters: Vec<char> = encoded.chars().collect();
        if letters.len() != CANONICAL_LEN {
            return Err(CubeError::InvalidCanonicalLength { len: letters.len() });
        }

        let mut state = Self::solved();
        for (index, &symbol) in letters.iter().enumerate() {
            let color = Color::from_solver_letter(symbol)
                .ok_or(CubeError::InvalidCanonicalSymbol { index, symbol })?;
            let face = Face::CANONICAL_ORDER[index / FACELETS_PER_FACE];
            let cell = index % FACELETS_PER_FACE;
            state.faces[face][cell / 3][cell % 3] = color;
        }
        Ok(state)
    }

    // === Queries ===

    /// True iff every face is uniformly its solved color.
    ///
    /// A cube that is solved up to a whole-cube rotation does not count.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(|(face, grid)| {
            let expected = face.solved_color();
            grid.iter().flatten().all(|&c| c == expected)
        })
    }

    /// How many of the 54 facelets show `color`.
    #[must_use]
    pub fn color_count(&self, color: Color) -> usize {
        self.faces
            .iter()
            .map(|(_, grid)| grid.iter().flatten().filter(|&&c| c == color).count())
            .sum()
    }

    /// Facelet count per color, in [`Color::ALL`] order.
    #[must_use]
    pub fn color_counts(&self) -> [(Color, usize); 6] {
        Color::ALL.map(|color| (color, self.color_count(color)))
    }
}
