use super::{CastlingRights, Color, Piece, Square};

/// A mailbox chess position.
///
/// Squares are indexed `rank * 8 + file` (a1 = 0, h8 = 63).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [Option<(Color, Piece)>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    /// Whether each side has castled during play, indexed by `Color::index`
    pub(crate) castled: [bool; 2],
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square(0, file), Color::White, *piece);
            board.set_piece(Square(7, file), Color::Black, *piece);
            board.set_piece(Square(1, file), Color::White, Piece::Pawn);
            board.set_piece(Square(6, file), Color::Black, Piece::Pawn);
        }
        board.castling_rights = CastlingRights::all();
        board
    }

    /// A board with no pieces, White to move and no castling rights.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            castled: [false; 2],
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.as_index()]
    }

    /// Piece at `(row, col)` where row 0 is rank 8 and col 0 is the a-file.
    #[must_use]
    pub fn piece_at_row_col(&self, row: usize, col: usize) -> Option<(Color, Piece)> {
        if row >= 8 || col >= 8 {
            return None;
        }
        self.piece_at(Square(7 - row, col))
    }

    pub fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.as_index()] = Some((color, piece));
    }

    pub fn remove_piece(&mut self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.as_index()].take()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.as_index()].is_none()
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Whether `color` has castled since the board was created.
    #[must_use]
    pub fn has_castled(&self, color: Color) -> bool {
        self.castled[color.index()]
    }

    /// Mark a side as having castled (positions set up from FEN lose this history).
    pub fn set_castled(&mut self, color: Color, castled: bool) {
        self.castled[color.index()] = castled;
    }

    /// Location of `color`'s king, or `None` if the board has no such king.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.piece_at(sq) == Some((color, Piece::King)))
    }

    /// Occupied squares of `color` with their pieces, in rank-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some((c, piece)) if c == color => Some((sq, piece)),
            _ => None,
        })
    }

    #[must_use]
    pub fn count(&self, color: Color, piece: Piece) -> usize {
        self.pieces(color).filter(|&(_, p)| p == piece).count()
    }

    /// Draw by the fifty-move rule or by insufficient material.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.halfmove_clock >= 100 || self.is_insufficient_material()
    }

    fn is_insufficient_material(&self) -> bool {
        let mut minors = 0;
        for sq in Square::all() {
            match self.piece_at(sq) {
                Some((_, Piece::Pawn | Piece::Rook | Piece::Queen)) => return false,
                Some((_, Piece::Knight | Piece::Bishop)) => minors += 1,
                _ => {}
            }
        }
        minors <= 1
    }
}
