//! The board contract consumed by the search engine.
//!
//! The engine never inspects board internals; anything that can answer these
//! queries can be searched. [`Board`] is the bundled implementation.

use crate::board::{Board, Color, Move, Piece, Square, UnmakeInfo};

/// A chess position the engine can search.
///
/// `Clone` is used once per root move so the caller's position is never
/// touched; inside the tree the engine applies and takes back moves with
/// [`make_move`](Position::make_move) / [`unmake_move`](Position::unmake_move).
pub trait Position: Clone {
    /// Whatever the implementation needs to take a move back.
    type Undo;

    /// The piece on `square`, if any.
    fn piece_at(&self, square: Square) -> Option<(Color, Piece)>;

    /// Legal destinations for the piece on `square` (empty for an empty square).
    ///
    /// Must work for either color regardless of whose turn it is, and must
    /// already exclude moves that leave the mover's king in check.
    fn legal_destinations(&self, square: Square) -> Vec<Square>;

    /// Apply `mv` in place.
    fn make_move(&mut self, mv: Move) -> Self::Undo;

    /// Revert a move applied with [`make_move`](Position::make_move).
    fn unmake_move(&mut self, mv: Move, undo: Self::Undo);

    /// Whether the game has ended by a rule the board tracks (draws included).
    fn is_game_over(&self) -> bool;

    fn is_in_check(&self, color: Color) -> bool;

    /// Whether any piece of `by` attacks `square`.
    fn is_square_attacked(&self, square: Square, by: Color) -> bool;

    fn has_castled(&self, color: Color) -> bool;
}

impl Position for Board {
    type Undo = UnmakeInfo;

    fn piece_at(&self, square: Square) -> Option<(Color, Piece)> {
        Board::piece_at(self, square)
    }

    fn legal_destinations(&self, square: Square) -> Vec<Square> {
        Board::legal_destinations(self, square)
    }

    fn make_move(&mut self, mv: Move) -> UnmakeInfo {
        Board::make_move(self, mv)
    }

    fn unmake_move(&mut self, mv: Move, undo: UnmakeInfo) {
        Board::unmake_move(self, mv, undo);
    }

    fn is_game_over(&self) -> bool {
        Board::is_game_over(self)
    }

    fn is_in_check(&self, color: Color) -> bool {
        Board::is_in_check(self, color)
    }

    fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        Board::is_square_attacked(self, square, by)
    }

    fn has_castled(&self, color: Color) -> bool {
        Board::has_castled(self, color)
    }
}
