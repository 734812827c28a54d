//! Move search: enumeration, static evaluation and alpha-beta minimax.
//!
//! Every search runs on a clone of the caller's position per root move;
//! inside the tree moves are applied and taken back in place. Scores are
//! always from White's point of view.

mod enumerate;
mod eval;
mod minimax;
mod select;
mod tables;

#[cfg(test)]
mod tests;

pub use enumerate::valid_moves;
pub use eval::{evaluate_position, is_endgame, king_safety, mobility};
pub use minimax::{INFINITY, MATE_SCORE};
pub use select::MoveEvaluation;
pub use tables::{material_value, piece_square_table, piece_square_value, PieceSquareTable};
