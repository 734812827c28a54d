use std::str::FromStr;

use super::error::{FenError, FenField, MoveParseError};
use super::{Board, Color, Move, Piece, Square};

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// Returns an error if the FEN string is invalid.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::MissingFields(parts.len()));
        }

        // Piece placement, rank 8 first
        for (rank_idx, rank_str) in parts[0].split('/').enumerate() {
            let bad_rank = || FenError::bad(FenField::Placement, rank_str);
            if rank_idx >= 8 {
                return Err(bad_rank());
            }
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let color = if c.is_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let piece = Piece::from_char(c)
                    .ok_or_else(|| FenError::bad(FenField::Placement, c.to_string()))?;
                if file >= 8 {
                    return Err(bad_rank());
                }
                board.set_piece(Square(7 - rank_idx, file), color, piece);
                file += 1;
            }
            if file > 8 {
                return Err(bad_rank());
            }
        }

        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::bad(FenField::SideToMove, other)),
        };

        for c in parts[2].chars() {
            match c {
                'K' => board.castling_rights.set(Color::White, true),
                'Q' => board.castling_rights.set(Color::White, false),
                'k' => board.castling_rights.set(Color::Black, true),
                'q' => board.castling_rights.set(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::bad(FenField::Castling, parts[2])),
            }
        }

        board.en_passant_target = if parts[3] == "-" {
            None
        } else {
            Some(
                parts[3]
                    .parse::<Square>()
                    .map_err(|_| FenError::bad(FenField::EnPassant, parts[3]))?,
            )
        };

        if let Some(clock) = parts.get(4) {
            board.halfmove_clock = clock.parse().unwrap_or(0);
        }
        if let Some(number) = parts.get(5) {
            board.fullmove_number = number.parse().unwrap_or(1);
        }

        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let mut castling = String::new();
        for (color, kingside, c) in [
            (Color::White, true, 'K'),
            (Color::White, false, 'Q'),
            (Color::Black, true, 'k'),
            (Color::Black, false, 'q'),
        ] {
            if self.castling_rights.has(color, kingside) {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in coordinate notation (e.g. "e2e4") and check it is legal
    /// for the side to move.
    pub fn parse_move(&self, notation: &str) -> Result<Move, MoveParseError> {
        let mv: Move = notation.parse()?;
        if self.legal_moves().contains(&mv) {
            Ok(mv)
        } else {
            Err(MoveParseError::Illegal(mv))
        }
    }

    /// Parse a coordinate move and make it on the board in one call.
    ///
    /// # Example
    /// ```
    /// use chess_search::board::Board;
    ///
    /// let mut board = Board::new();
    /// board.make_move_uci("e2e4").unwrap();
    /// board.make_move_uci("e7e5").unwrap();
    /// ```
    pub fn make_move_uci(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(notation)?;
        self.make_move(mv);
        Ok(mv)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
