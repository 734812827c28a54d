//! Core chess types.
//!
//! - `Piece` and `Color` - piece types and colors
//! - `Square` - (rank, file) board coordinate
//! - `Move` - `(from, to)` square pair
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::Square;
