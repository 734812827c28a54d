//! Static evaluation, always from White's point of view.
//!
//! `material + piece-square + mobility + king safety`, no clamping.

use crate::board::{squares_in, Color, Piece, Square, KING_ATTACKS};
use crate::position::Position;

use super::enumerate::mobility_of;
use super::tables::{material_value, piece_square_value};

/// Legal-move difference is divided by this (integer division).
const MOBILITY_DIVISOR: i32 = 10;

const ATTACKED_KING_ZONE_PENALTY: i32 = 10;
const MISSING_SHIELD_PAWN_PENALTY: i32 = 5;
const CASTLED_BONUS: i32 = 50;

/// Evaluate `board` with phase-aware king tables.
///
/// Positive favours White.
///
/// ```
/// use chess_search::{evaluate_position, Board};
///
/// assert_eq!(evaluate_position(&Board::new()), 0);
/// ```
#[must_use]
pub fn evaluate_position<P: Position>(board: &P) -> i32 {
    Evaluator::new(true).evaluate(board)
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Evaluator {
    use_endgame: bool,
}

impl Evaluator {
    pub(crate) const fn new(use_endgame: bool) -> Self {
        Evaluator { use_endgame }
    }

    pub(crate) fn evaluate<P: Position>(self, board: &P) -> i32 {
        let endgame = self.use_endgame && is_endgame(board);
        let mut score = 0;
        for square in Square::all() {
            if let Some((color, piece)) = board.piece_at(square) {
                let value =
                    material_value(piece) + piece_square_value(piece, color, square, endgame);
                score += match color {
                    Color::White => value,
                    Color::Black => -value,
                };
            }
        }
        score + mobility(board) + king_safety(board, Color::White) - king_safety(board, Color::Black)
    }
}

/// Endgame when no queens remain, or when a side without a queen is down
/// to fewer than two minor pieces.
#[must_use]
pub fn is_endgame<P: Position>(board: &P) -> bool {
    let mut queens = [0u32; 2];
    let mut minors = [0u32; 2];
    for square in Square::all() {
        match board.piece_at(square) {
            Some((color, Piece::Queen)) => queens[color.index()] += 1,
            Some((color, piece)) if piece.is_minor() => minors[color.index()] += 1,
            _ => {}
        }
    }
    if queens == [0, 0] {
        return true;
    }
    Color::BOTH
        .iter()
        .any(|c| queens[c.index()] == 0 && minors[c.index()] < 2)
}

/// `(white moves - black moves) / 10`, truncating toward zero.
#[must_use]
pub fn mobility<P: Position>(board: &P) -> i32 {
    (mobility_of(board, Color::White) - mobility_of(board, Color::Black)) / MOBILITY_DIVISOR
}

/// King safety of one side; larger is safer. Zero when the king is missing.
#[must_use]
pub fn king_safety<P: Position>(board: &P, color: Color) -> i32 {
    let Some(king) = Square::all().find(|&sq| board.piece_at(sq) == Some((color, Piece::King)))
    else {
        return 0;
    };
    let enemy = color.opponent();
    let mut safety = 0;

    // 3x3 block around the king, the king's own square included.
    let zone = std::iter::once(king).chain(squares_in(KING_ATTACKS[king.as_index()]));
    for square in zone {
        if board.is_square_attacked(square, enemy) {
            safety -= ATTACKED_KING_ZONE_PENALTY;
        }
    }

    let forward = color.pawn_direction();
    for file_delta in -1..=1 {
        if let Some(shield) = king.offset(forward, file_delta) {
            if board.piece_at(shield) != Some((color, Piece::Pawn)) {
                safety -= MISSING_SHIELD_PAWN_PENALTY;
            }
        }
    }

    if board.has_castled(color) {
        safety += CASTLED_BONUS;
    }
    safety
}
