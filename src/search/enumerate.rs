use crate::board::{Color, Move, Square};
use crate::position::Position;

/// Every legal move of `color`, origin squares scanned rank-major (a1..h1,
/// a2..h8), destinations in the order the position reports them.
#[must_use]
pub fn valid_moves<P: Position>(board: &P, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for from in Square::all() {
        if !matches!(board.piece_at(from), Some((c, _)) if c == color) {
            continue;
        }
        moves.extend(
            board
                .legal_destinations(from)
                .into_iter()
                .map(|to| Move::new(from, to)),
        );
    }
    moves
}

/// Legal move count for `color`.
pub(crate) fn mobility_of<P: Position>(board: &P, color: Color) -> i32 {
    let mut count = 0;
    for from in Square::all() {
        if matches!(board.piece_at(from), Some((c, _)) if c == color) {
            count += board.legal_destinations(from).len();
        }
    }
    i32::try_from(count).unwrap_or(i32::MAX)
}
