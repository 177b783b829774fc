//! Manual facelet input.
//!
//! Six 9-character strings, one per face, over `W Y R O B G` (any case).
//! Input is applied all-or-nothing: if any face is malformed, no face of the
//! cube changes.
//!
//! ```
//! use rust_cube::core::{CubeState, Face};
//! use rust_cube::input::ManualInput;
//!
//! let mut cube = CubeState::solved();
//! let input = ManualInput::from_cube(&cube).with_face(Face::Up, "yyyyyyyyy");
//! input.apply(&mut cube).unwrap();
//! assert_eq!(cube.encode_face(Face::Up), "YYYYYYYYY");
//! ```

use tracing::info;

use crate::core::{Color, CubeError, CubeResult, CubeState, Face, FaceMap, FACELETS_PER_FACE};

/// Pending manual input for all six faces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManualInput {
    faces: FaceMap<String>,
}

impl ManualInput {
    /// Input prefilled with the cube's current face encodings.
    #[must_use]
    pub fn from_cube(cube: &CubeState) -> Self {
        Self {
            faces: FaceMap::new(|face| cube.encode_face(face)),
        }
    }

    /// Replace the text entered for one face.
    #[must_use]
    pub fn with_face(mut self, face: Face, text: impl Into<String>) -> Self {
        self.set_face(face, text);
        self
    }

    /// Replace the text entered for one face.
    pub fn set_face(&mut self, face: Face, text: impl Into<String>) {
        self.faces[face] = text.into();
    }

    /// The text currently entered for `face`.
    #[must_use]
    pub fn face(&self, face: Face) -> &str {
        &self.faces[face]
    }

    /// Check one face: length first, then every symbol.
    fn check_face(face: Face, text: &str) -> CubeResult<()> {
        let len = text.chars().count();
        if len != FACELETS_PER_FACE {
            return Err(CubeError::WrongLength { face, len });
        }
        match text.chars().find(|&c| Color::from_symbol(c).is_none()) {
            Some(symbol) => Err(CubeError::InvalidColorSymbol { face, symbol }),
            None => Ok(()),
        }
    }

    /// Every problem with the input, one per offending face.
    #[must_use]
    pub fn errors(&self) -> Vec<CubeError> {
        self.faces
            .iter()
            .filter_map(|(face, text)| Self::check_face(face, text).err())
            .collect()
    }

    /// Validate all six faces, reporting the first problem found.
    pub fn validate(&self) -> CubeResult<()> {
        self.faces
            .iter()
            .try_for_each(|(face, text)| Self::check_face(face, text))
    }

    /// Validate, then overwrite all six faces of `cube` (normalized to
    /// uppercase). On error the cube is unchanged.
    pub fn apply(&self, cube: &mut CubeState) -> CubeResult<()> {
        if let Err(err) = self.validate() {
            info!(error = %err, "manual input rejected");
            return Err(err);
        }

        let mut next = cube.clone();
        for (face, text) in self.faces.iter() {
            next.decode_face(face, &text.to_ascii_uppercase())?;
        }
        *cube = next;

        info!(solved = cube.is_solved(), "manual input applied");
        Ok(())
    }
}
