//! Move tokens: the 18-token face-turn alphabet.
//!
//! A token is a face letter (`R U F L D B`) optionally followed by `'`
//! (counter-clockwise) or `2` (half turn). Sequences are written
//! whitespace-separated, e.g. `"R U2 F' L"`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::{CubeError, CubeResult, Face};

/// Turn amount, as seen looking at the turned face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// 90 degrees clockwise (`R`).
    Clockwise,
    /// 90 degrees counter-clockwise (`R'`).
    CounterClockwise,
    /// 180 degrees (`R2`). Has no direction.
    Double,
}

impl Turn {
    /// Number of clockwise quarter turns this amounts to.
    #[must_use]
    pub const fn quarter_turns(self) -> usize {
        match self {
            Turn::Clockwise => 1,
            Turn::Double => 2,
            Turn::CounterClockwise => 3,
        }
    }

    /// Token suffix: `""`, `"'"` or `"2"`.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::CounterClockwise => "'",
            Turn::Double => "2",
        }
    }

    /// The turn that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
            Turn::Double => Turn::Double,
        }
    }
}

/// One face turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub face: Face,
    pub turn: Turn,
}

/// Shorthand for the table below.
const fn mv(face: Face, turn: Turn) -> Move {
    Move { face, turn }
}

impl Move {
    /// All 18 tokens, in the order `R R' R2 U U' U2 F F' F2 L L' L2 D D' D2 B B' B2`.
    pub const ALL: [Move; 18] = [
        mv(Face::Right, Turn::Clockwise),
        mv(Face::Right, Turn::CounterClockwise),
        mv(Face::Right, Turn::Double),
        mv(Face::Up, Turn::Clockwise),
        mv(Face::Up, Turn::CounterClockwise),
        mv(Face::Up, Turn::Double),
        mv(Face::Front, Turn::Clockwise),
        mv(Face::Front, Turn::CounterClockwise),
        mv(Face::Front, Turn::Double),
        mv(Face::Left, Turn::Clockwise),
        mv(Face::Left, Turn::CounterClockwise),
        mv(Face::Left, Turn::Double),
        mv(Face::Down, Turn::Clockwise),
        mv(Face::Down, Turn::CounterClockwise),
        mv(Face::Down, Turn::Double),
        mv(Face::Back, Turn::Clockwise),
        mv(Face::Back, Turn::CounterClockwise),
        mv(Face::Back, Turn::Double),
    ];

    /// Create a move.
    #[must_use]
    pub const fn new(face: Face, turn: Turn) -> Self {
        Self { face, turn }
    }

    /// Clockwise quarter turn of `face`.
    #[must_use]
    pub const fn clockwise(face: Face) -> Self {
        Self::new(face, Turn::Clockwise)
    }

    /// Counter-clockwise quarter turn of `face`.
    #[must_use]
    pub const fn counter_clockwise(face: Face) -> Self {
        Self::new(face, Turn::CounterClockwise)
    }

    /// Half turn of `face`.
    #[must_use]
    pub const fn double(face: Face) -> Self {
        Self::new(face, Turn::Double)
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::new(self.face, self.turn.inverse())
    }

    /// Is this a single 90 degree turn?
    #[must_use]
    pub const fn is_primitive(self) -> bool {
        !matches!(self.turn, Turn::Double)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.face.letter(), self.turn.suffix())
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let unrecognized = || CubeError::UnrecognizedMove(token.to_string());

        let mut chars = token.chars();
        let face = chars.next().and_then(Face::from_letter).ok_or_else(unrecognized)?;
        let turn = match (chars.next(), chars.next()) {
            (None, _) => Turn::Clockwise,
            (Some('\''), None) => Turn::CounterClockwise,
            (Some('2'), None) => Turn::Double,
            _ => return Err(unrecognized()),
        };

        Ok(Self::new(face, turn))
    }
}

/// Parse a whitespace-separated token list.
///
/// Fails on the first unrecognized token; an empty or blank string is an
/// empty sequence.
///
/// ```
/// use rust_cube::moves::{parse_sequence, Move};
/// use rust_cube::core::Face;
///
/// let moves = parse_sequence("R U2  F'").unwrap();
/// assert_eq!(moves, vec![
///     Move::clockwise(Face::Right),
///     Move::double(Face::Up),
///     Move::counter_clockwise(Face::Front),
/// ]);
/// ```
pub fn parse_sequence(text: &str) -> CubeResult<Vec<Move>> {
    text.split_whitespace().map(str::parse).collect()
}

/// Join moves with single spaces.
#[must_use]
pub fn format_sequence(moves: &[Move]) -> String {
    moves
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The sequence that undoes `moves`: reversed, each move inverted.
#[must_use]
pub fn invert_sequence(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|m| m.inverse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tokens_display() {
        let tokens: Vec<String> = Move::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            tokens.join(" "),
            "R R' R2 U U' U2 F F' F2 L L' L2 D D' D2 B B' B2"
        );
    }

    #[test]
    fn test_all_tokens_parse_back() {
        for m in Move::ALL {
            assert_eq!(m.to_string().parse::<Move>(), Ok(m));
        }
    }

    #[test]
    fn test_unrecognized_tokens() {
        for bad in ["", "X", "r", "R3", "R''", "R2'", "M", "Rw", " R"] {
            assert_eq!(
                bad.parse::<Move>(),
                Err(CubeError::UnrecognizedMove(bad.to_string())),
                "token {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_inverse() {
        assert_eq!(Move::clockwise(Face::Up).inverse(), Move::counter_clockwise(Face::Up));
        assert_eq!(Move::counter_clockwise(Face::Up).inverse(), Move::clockwise(Face::Up));
        assert_eq!(Move::double(Face::Up).inverse(), Move::double(Face::Up));
    }

    #[test]
    fn test_quarter_turns() {
        assert_eq!(Turn::Clockwise.quarter_turns(), 1);
        assert_eq!(Turn::Double.quarter_turns(), 2);
        assert_eq!(Turn::CounterClockwise.quarter_turns(), 3);
        assert!(Move::clockwise(Face::Back).is_primitive());
        assert!(!Move::double(Face::Back).is_primitive());
    }

    #[test]
    fn test_parse_sequence() {
        let moves = parse_sequence("  R U2\tF' L\n").unwrap();
        assert_eq!(format_sequence(&moves), "R U2 F' L");

        assert!(parse_sequence("").unwrap().is_empty());
        assert!(parse_sequence(" \n ").unwrap().is_empty());
        assert_eq!(
            parse_sequence("R Q U"),
            Err(CubeError::UnrecognizedMove("Q".to_string()))
        );
    }

    #[test]
    fn test_invert_sequence() {
        let moves = parse_sequence("R U F2 D'").unwrap();
        assert_eq!(format_sequence(&invert_sequence(&moves)), "D F2 U' R'");
    }

    #[test]
    fn test_serialization() {
        let m = Move::counter_clockwise(Face::Left);
        let json = serde_json::to_string(&m).unwrap();
        let deserialized: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
