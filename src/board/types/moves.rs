//! Move type.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::board::error::MoveParseError;

/// A move as an ordered `(from, to)` pair of squares.
///
/// Captures, castling, en passant and promotion are implied by the position
/// the move is applied to; the move itself carries no flags.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{})", self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse coordinate notation such as `e2e4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(MoveParseError::Malformed(s.to_string()));
        }
        let invalid = |_| MoveParseError::Malformed(s.to_string());
        let from = s[..2].parse::<Square>().map_err(invalid)?;
        let to = s[2..].parse::<Square>().map_err(invalid)?;
        Ok(Move { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays_coordinate_notation() {
        let mv: Move = "e2e4".parse().expect("valid move");
        assert_eq!(mv.from(), Square(1, 4));
        assert_eq!(mv.to(), Square(3, 4));
        assert_eq!(mv.to_string(), "e2e4");
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            "e2e".parse::<Move>(),
            Err(MoveParseError::Malformed("e2e".to_string()))
        );
        assert!(matches!(
            "e7e8q".parse::<Move>(),
            Err(MoveParseError::Malformed(_))
        ));
    }

    #[test]
    fn rejects_bad_squares() {
        assert!(matches!(
            "z2e4".parse::<Move>(),
            Err(MoveParseError::Malformed(_))
        ));
    }
}
