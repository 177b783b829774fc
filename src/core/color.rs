//! Facelet colors and their two text alphabets.
//!
//! ## Color symbols
//!
//! Manual input and per-face encodings use one letter per color:
//! `W`hite, `Y`ellow, `R`ed, `O`range, `B`lue, `G`reen.
//!
//! ## Solver notation
//!
//! The external solver speaks in face letters instead of colors, so the
//! canonical encoding translates every color through a fixed bijection:
//!
//! | Color  | Symbol | Solver letter |
//! |--------|--------|---------------|
//! | White  | `W`    | `U`           |
//! | Red    | `R`    | `R`           |
//! | Green  | `G`    | `F`           |
//! | Yellow | `Y`    | `D`           |
//! | Orange | `O`    | `L`           |
//! | Blue   | `B`    | `B`           |

use serde::{Deserialize, Serialize};

/// One of the six sticker colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    White,
    Yellow,
    Red,
    Orange,
    Blue,
    Green,
}

impl Color {
    /// All six colors in symbol order `W Y R O B G`.
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Red,
        Color::Orange,
        Color::Blue,
        Color::Green,
    ];

    /// The single-letter color symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Blue => 'B',
            Color::Green => 'G',
        }
    }

    /// Parse a color symbol, ignoring case.
    ///
    /// ```
    /// use rust_cube::core::Color;
    ///
    /// assert_eq!(Color::from_symbol('w'), Some(Color::White));
    /// assert_eq!(Color::from_symbol('G'), Some(Color::Green));
    /// assert_eq!(Color::from_symbol('X'), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'W' => Some(Color::White),
            'Y' => Some(Color::Yellow),
            'R' => Some(Color::Red),
            'O' => Some(Color::Orange),
            'B' => Some(Color::Blue),
            'G' => Some(Color::Green),
            _ => None,
        }
    }

    /// Human-readable color name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Yellow => "Yellow",
            Color::Red => "Red",
            Color::Orange => "Orange",
            Color::Blue => "Blue",
            Color::Green => "Green",
        }
    }

    /// The letter this color is written as in the canonical solver encoding.
    #[must_use]
    pub const fn solver_letter(self) -> char {
        match self {
            Color::White => 'U',
            Color::Red => 'R',
            Color::Green => 'F',
            Color::Yellow => 'D',
            Color::Orange => 'L',
            Color::Blue => 'B',
        }
    }

    /// Inverse of [`Color::solver_letter`]. Case-sensitive, like the solver.
    #[must_use]
    pub fn from_solver_letter(letter: char) -> Option<Self> {
        match letter {
            'U' => Some(Color::White),
            'R' => Some(Color::Red),
            'F' => Some(Color::Green),
            'D' => Some(Color::Yellow),
            'L' => Some(Color::Orange),
            'B' => Some(Color::Blue),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
