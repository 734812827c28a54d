//! Parse errors for FEN strings, squares and coordinate moves.

use std::fmt;

use super::types::Move;

/// The FEN field a [`FenError::BadField`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenField {
    Placement,
    SideToMove,
    Castling,
    EnPassant,
}

impl FenField {
    fn name(self) -> &'static str {
        match self {
            FenField::Placement => "piece placement",
            FenField::SideToMove => "side to move",
            FenField::Castling => "castling",
            FenField::EnPassant => "en passant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Fewer than the four mandatory fields; holds the count found.
    MissingFields(usize),
    /// `token` is not valid in `field`.
    BadField { field: FenField, token: String },
}

impl FenError {
    pub(crate) fn bad(field: FenField, token: impl Into<String>) -> Self {
        FenError::BadField {
            field,
            token: token.into(),
        }
    }
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::MissingFields(found) => {
                write!(f, "FEN needs at least 4 fields, got {found}")
            }
            FenError::BadField { field, token } => {
                write!(f, "bad {} in FEN: '{token}'", field.name())
            }
        }
    }
}

impl std::error::Error for FenError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Coordinates outside `0..8`.
    OffBoard { rank: usize, file: usize },
    /// Not of the form `a1`..`h8`.
    BadNotation(String),
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OffBoard { rank, file } => {
                write!(f, "square ({rank}, {file}) is off the board")
            }
            SquareError::BadNotation(text) => write!(f, "'{text}' is not a square"),
        }
    }
}

impl std::error::Error for SquareError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Not four characters naming two squares.
    Malformed(String),
    /// Well formed, but not legal for the side to move.
    Illegal(Move),
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::Malformed(text) => write!(f, "'{text}' is not a coordinate move"),
            MoveParseError::Illegal(mv) => write!(f, "{mv} is not legal here"),
        }
    }
}

impl std::error::Error for MoveParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    #[test]
    fn test_fen_messages_name_the_field() {
        assert!(FenError::MissingFields(2).to_string().contains('2'));
        let err = FenError::bad(FenField::Castling, "X");
        assert_eq!(err.to_string(), "bad castling in FEN: 'X'");
    }

    #[test]
    fn test_move_messages() {
        let mv = Move::new(Square(1, 4), Square(4, 4));
        assert_eq!(MoveParseError::Illegal(mv).to_string(), "e2e5 is not legal here");
        assert!(MoveParseError::Malformed("e2".into()).to_string().contains("'e2'"));
    }

    #[test]
    fn test_square_messages() {
        assert!(SquareError::OffBoard { rank: 9, file: 0 }.to_string().contains('9'));
        assert!(SquareError::BadNotation("xyz".into()).to_string().contains("xyz"));
    }
}
