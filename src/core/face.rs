//! Face identification, per-face storage and the 3x3 facelet grid.
//!
//! ## Grid orientation
//!
//! Every face is stored as `grid[row][col]`, read as if looking straight at
//! that face from outside the cube with Up on top (Up itself is viewed with
//! Back on top, Down with Front on top). Row 0 is the top row and column 0
//! the left column. The move tables in `moves::engine` depend on this
//! convention and nothing else does.
//!
//! ## FaceMap
//!
//! Fixed six-slot storage indexed by `Face`, the per-face analogue of a
//! per-player map.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::color::Color;

/// A 3x3 facelet grid addressed `[row][col]`.
pub type FaceGrid = [[Color; 3]; 3];

/// One of the six faces of the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    Up,
    Down,
    Front,
    Back,
    Left,
    Right,
}

impl Face {
    /// All faces in storage order.
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Down,
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
    ];

    /// Face order of the canonical solver encoding: U R F D L B.
    pub const CANONICAL_ORDER: [Face; 6] = [
        Face::Up,
        Face::Right,
        Face::Front,
        Face::Down,
        Face::Left,
        Face::Back,
    ];

    /// Storage index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Face for a storage index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 6`. A face index out of range is a programming
    /// error, not an input error.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        assert!(index < 6, "Face index out of range: {}", index);
        Self::ALL[index]
    }

    /// Standard face letter (`U D F B L R`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Left => 'L',
            Face::Right => 'R',
        }
    }

    /// Parse a face letter. Case-sensitive.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'U' => Some(Face::Up),
            'D' => Some(Face::Down),
            'F' => Some(Face::Front),
            'B' => Some(Face::Back),
            'L' => Some(Face::Left),
            'R' => Some(Face::Right),
            _ => None,
        }
    }

    /// Color of this face's center (and every sticker) when solved.
    #[must_use]
    pub const fn solved_color(self) -> Color {
        match self {
            Face::Up => Color::White,
            Face::Down => Color::Yellow,
            Face::Front => Color::Red,
            Face::Back => Color::Orange,
            Face::Left => Color::Blue,
            Face::Right => Color::Green,
        }
    }

    /// Readable name, e.g. `"Up (White)"`.
    #[must_use]
    pub fn label(self) -> String {
        let name = match self {
            Face::Up => "Up",
            Face::Down => "Down",
            Face::Front => "Front",
            Face::Back => "Back",
            Face::Left => "Left",
            Face::Right => "Right",
        };
        format!("{} ({})", name, self.solved_color().name())
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Rotate a grid a quarter turn clockwise: the top row becomes the right column.
#[must_use]
pub fn rotate_grid_clockwise(grid: &FaceGrid) -> FaceGrid {
    let mut out = *grid;
    for (row, cells) in out.iter_mut().enumerate() {
        for (col, cell) in cells.iter_mut().enumerate() {
            *cell = grid[2 - col][row];
        }
    }
    out
}

/// Per-face data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_cube::core::{Face, FaceMap};
///
/// let mut turns: FaceMap<u32> = FaceMap::with_value(0);
/// turns[Face::Right] += 1;
/// assert_eq!(turns[Face::Right], 1);
/// assert_eq!(turns[Face::Up], 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceMap<T> {
    data: [T; 6],
}

impl<T> FaceMap<T> {
    /// Create a new FaceMap with values from a factory function.
    pub fn new(factory: impl Fn(Face) -> T) -> Self {
        Self {
            data: Face::ALL.map(factory),
        }
    }

    /// Create a new FaceMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a face's data.
    #[must_use]
    pub fn get(&self, face: Face) -> &T {
        &self.data[face.index()]
    }

    /// Get a mutable reference to a face's data.
    pub fn get_mut(&mut self, face: Face) -> &mut T {
        &mut self.data[face.index()]
    }

    /// Iterate over (Face, &T) pairs in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (Face, &T)> {
        Face::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Face, &mut T) pairs in storage order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Face, &mut T)> {
        Face::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<Face> for FaceMap<T> {
    type Output = T;

    fn index(&self, face: Face) -> &Self::Output {
        self.get(face)
    }
}

impl<T> IndexMut<Face> for FaceMap<T> {
    fn index_mut(&mut self, face: Face) -> &mut Self::Output {
        self.get_mut(face)
    }
}
