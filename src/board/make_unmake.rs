use super::{Board, CastlingRights, Color, Move, Piece, Square};

/// State needed to take back a move made with [`Board::make_move`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnmakeInfo {
    pub(crate) moved: Option<(Color, Piece)>,
    /// Captured piece and the square it stood on (differs from `to` for en passant)
    pub(crate) captured: Option<(Color, Piece, Square)>,
    pub(crate) rook_shift: Option<(Square, Square)>,
    pub(crate) previous_side_to_move: Color,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_castled: [bool; 2],
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
}

fn corner_right(sq: Square) -> Option<(Color, bool)> {
    match (sq.rank(), sq.file()) {
        (0, 0) => Some((Color::White, false)),
        (0, 7) => Some((Color::White, true)),
        (7, 0) => Some((Color::Black, false)),
        (7, 7) => Some((Color::Black, true)),
        _ => None,
    }
}

impl Board {
    /// Apply `mv` in place and return what is needed to undo it.
    ///
    /// The moving piece's color decides whose move it is, so the board can
    /// speculatively apply moves for either side. Castling, en passant and
    /// promotion (always to a queen) are inferred from the position. Moving
    /// from an empty square changes nothing.
    pub fn make_move(&mut self, mv: Move) -> UnmakeInfo {
        let mut info = UnmakeInfo {
            moved: self.piece_at(mv.from),
            captured: None,
            rook_shift: None,
            previous_side_to_move: self.side_to_move,
            previous_castling_rights: self.castling_rights,
            previous_castled: self.castled,
            previous_en_passant_target: self.en_passant_target,
            previous_halfmove_clock: self.halfmove_clock,
            previous_fullmove_number: self.fullmove_number,
        };
        let Some((color, piece)) = info.moved else {
            return info;
        };

        let is_en_passant = piece == Piece::Pawn
            && Some(mv.to) == self.en_passant_target
            && mv.from.file() != mv.to.file()
            && self.is_empty(mv.to);
        let capture_sq = if is_en_passant {
            Square(mv.from.rank(), mv.to.file())
        } else {
            mv.to
        };
        info.captured = self
            .remove_piece(capture_sq)
            .map(|(c, p)| (c, p, capture_sq));

        self.remove_piece(mv.from);
        let placed = if piece == Piece::Pawn && mv.to.rank() == color.pawn_promotion_rank() {
            Piece::Queen
        } else {
            piece
        };
        self.set_piece(mv.to, color, placed);

        if piece == Piece::King && mv.from.file().abs_diff(mv.to.file()) == 2 {
            let rank = mv.from.rank();
            let (rook_from, rook_to) = if mv.to.file() > mv.from.file() {
                (Square(rank, 7), Square(rank, 5))
            } else {
                (Square(rank, 0), Square(rank, 3))
            };
            if let Some(rook) = self.remove_piece(rook_from) {
                self.squares[rook_to.as_index()] = Some(rook);
                info.rook_shift = Some((rook_from, rook_to));
            }
            self.castled[color.index()] = true;
        }

        if piece == Piece::King {
            self.castling_rights.remove_color(color);
        }
        for sq in [mv.from, capture_sq] {
            if let Some((side_color, kingside)) = corner_right(sq) {
                self.castling_rights.remove(side_color, kingside);
            }
        }

        self.en_passant_target = if piece == Piece::Pawn && mv.from.rank().abs_diff(mv.to.rank()) == 2
        {
            Some(Square((mv.from.rank() + mv.to.rank()) / 2, mv.from.file()))
        } else {
            None
        };

        if piece == Piece::Pawn || info.captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if color == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = color.opponent();

        info
    }

    /// Take back a move previously applied with [`Board::make_move`].
    pub fn unmake_move(&mut self, mv: Move, info: UnmakeInfo) {
        if let Some((color, piece)) = info.moved {
            self.remove_piece(mv.to);
            self.set_piece(mv.from, color, piece);
            if let Some((rook_from, rook_to)) = info.rook_shift {
                if let Some(rook) = self.remove_piece(rook_to) {
                    self.squares[rook_from.as_index()] = Some(rook);
                }
            }
            if let Some((c, p, sq)) = info.captured {
                self.set_piece(sq, c, p);
            }
        }

        self.side_to_move = info.previous_side_to_move;
        self.castling_rights = info.previous_castling_rights;
        self.castled = info.previous_castled;
        self.en_passant_target = info.previous_en_passant_target;
        self.halfmove_clock = info.previous_halfmove_clock;
        self.fullmove_number = info.previous_fullmove_number;
    }

    /// Move whatever stands on `from` to `to`, applying the implied special rules.
    pub fn move_piece(&mut self, from: Square, to: Square) {
        self.make_move(Move::new(from, to));
    }
}
