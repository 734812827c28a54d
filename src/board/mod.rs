//! Reference chess board.
//!
//! A mailbox position that implements the [`Position`](crate::Position)
//! contract the search engine consumes: legal destinations per square,
//! make/unmake, check and attack queries, castled flags and game-over
//! detection. Castling, en passant and promotion (always to a queen) are
//! supported.
//!
//! # Example
//! ```
//! use chess_search::board::Board;
//!
//! let board = Board::new();
//! let moves = board.legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attack_tables;
mod error;
mod fen;
mod make_unmake;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, FenField, MoveParseError, SquareError};
pub use make_unmake::UnmakeInfo;
pub use state::Board;
pub use types::{CastlingRights, Color, Move, Piece, Square};

pub(crate) use attack_tables::{squares_in, KING_ATTACKS};
