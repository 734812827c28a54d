//! Legal move generation for the mailbox board.
//!
//! Destinations are generated pseudo-legally per piece type, then filtered
//! by making the move on a scratch copy and rejecting those that leave the
//! mover's king attacked.

use super::attack_tables::{
    squares_in, DIAGONAL_DIRS, KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS, STRAIGHT_DIRS,
};
use super::{Board, Color, Move, Piece, Square};

impl Board {
    fn slide(&self, from: Square, color: Color, dirs: &[(isize, isize)], out: &mut Vec<Square>) {
        for &(dr, df) in dirs {
            let mut cur = from;
            while let Some(next) = cur.offset(dr, df) {
                match self.piece_at(next) {
                    None => out.push(next),
                    Some((c, _)) => {
                        if c != color {
                            out.push(next);
                        }
                        break;
                    }
                }
                cur = next;
            }
        }
    }

    fn leap(&self, mask: u64, color: Color, out: &mut Vec<Square>) {
        out.extend(squares_in(mask).filter(|&sq| match self.piece_at(sq) {
            Some((c, _)) => c != color,
            None => true,
        }));
    }

    fn pawn_destinations(&self, from: Square, color: Color, out: &mut Vec<Square>) {
        let dir = color.pawn_direction();
        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                out.push(one);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(two) = one.offset(dir, 0) {
                        if self.is_empty(two) {
                            out.push(two);
                        }
                    }
                }
            }
        }

        for target in squares_in(PAWN_ATTACKS[color.index()][from.as_index()]) {
            match self.piece_at(target) {
                Some((c, _)) if c != color => out.push(target),
                // En passant only belongs to the side to move.
                None if color == self.side_to_move && Some(target) == self.en_passant_target => {
                    out.push(target);
                }
                _ => {}
            }
        }
    }

    fn castling_destinations(&self, from: Square, color: Color, out: &mut Vec<Square>) {
        let rank = color.back_rank();
        if from != Square(rank, 4) || self.is_in_check(color) {
            return;
        }
        let enemy = color.opponent();
        let rook = Some((color, Piece::Rook));

        if self.castling_rights.has(color, true)
            && self.piece_at(Square(rank, 7)) == rook
            && self.is_empty(Square(rank, 5))
            && self.is_empty(Square(rank, 6))
            && !self.is_square_attacked(Square(rank, 5), enemy)
            && !self.is_square_attacked(Square(rank, 6), enemy)
        {
            out.push(Square(rank, 6));
        }

        if self.castling_rights.has(color, false)
            && self.piece_at(Square(rank, 0)) == rook
            && self.is_empty(Square(rank, 1))
            && self.is_empty(Square(rank, 2))
            && self.is_empty(Square(rank, 3))
            && !self.is_square_attacked(Square(rank, 3), enemy)
            && !self.is_square_attacked(Square(rank, 2), enemy)
        {
            out.push(Square(rank, 2));
        }
    }

    /// Destinations ignoring whether the mover's king ends up attacked.
    fn pseudo_destinations(&self, from: Square) -> Vec<Square> {
        let mut out = Vec::new();
        let Some((color, piece)) = self.piece_at(from) else {
            return out;
        };
        match piece {
            Piece::Pawn => self.pawn_destinations(from, color, &mut out),
            Piece::Knight => self.leap(KNIGHT_ATTACKS[from.as_index()], color, &mut out),
            Piece::Bishop => self.slide(from, color, &DIAGONAL_DIRS, &mut out),
            Piece::Rook => self.slide(from, color, &STRAIGHT_DIRS, &mut out),
            Piece::Queen => {
                self.slide(from, color, &DIAGONAL_DIRS, &mut out);
                self.slide(from, color, &STRAIGHT_DIRS, &mut out);
            }
            Piece::King => {
                self.leap(KING_ATTACKS[from.as_index()], color, &mut out);
                self.castling_destinations(from, color, &mut out);
            }
        }
        out
    }

    /// Legal destination squares for the piece on `from`, whichever color it is.
    ///
    /// Returns an empty list for an empty square.
    #[must_use]
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        let Some((color, _)) = self.piece_at(from) else {
            return Vec::new();
        };
        let mut scratch = self.clone();
        self.pseudo_destinations(from)
            .into_iter()
            .filter(|&to| {
                let mv = Move::new(from, to);
                let info = scratch.make_move(mv);
                let legal = !scratch.is_in_check(color);
                scratch.unmake_move(mv, info);
                legal
            })
            .collect()
    }

    /// All legal moves for `color` in rank-major square order.
    #[must_use]
    pub fn legal_moves_for(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for (from, _) in self.pieces(color) {
            moves.extend(
                self.legal_destinations(from)
                    .into_iter()
                    .map(|to| Move::new(from, to)),
            );
        }
        moves
    }

    /// All legal moves for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.legal_moves_for(self.side_to_move)
    }

    fn has_legal_move(&self, color: Color) -> bool {
        self.pieces(color)
            .any(|(from, _)| !self.legal_destinations(from).is_empty())
    }

    /// Side to move is in check and has no legal move.
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        let color = self.side_to_move;
        self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Side to move is not in check and has no legal move.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        let color = self.side_to_move;
        !self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Checkmate, stalemate, or a draw by rule.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.is_draw() || !self.has_legal_move(self.side_to_move)
    }

    /// Number of leaf nodes reachable in `depth` plies.
    #[must_use]
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut nodes = 0;
        for mv in moves {
            let info = self.make_move(mv);
            nodes += self.perft(depth - 1);
            self.unmake_move(mv, info);
        }
        nodes
    }
}
