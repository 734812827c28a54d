use once_cell::sync::Lazy;

use super::{Board, Color, Piece, Square};

pub(crate) const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub(crate) const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const DIAGONAL_DIRS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const STRAIGHT_DIRS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

fn leaper_table(deltas: &[(isize, isize)]) -> [u64; 64] {
    let mut attacks = [0u64; 64];
    for (idx, mask) in attacks.iter_mut().enumerate() {
        let sq = Square::from_index(idx);
        for &(dr, df) in deltas {
            if let Some(target) = sq.offset(dr, df) {
                *mask |= 1u64 << target.as_index();
            }
        }
    }
    attacks
}

pub(crate) static KNIGHT_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| leaper_table(&KNIGHT_DELTAS));

/// King attack masks; doubles as the 3x3 neighbourhood (without the centre).
pub(crate) static KING_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| leaper_table(&KING_DELTAS));

/// Squares attacked by a pawn of each color standing on a square.
pub(crate) static PAWN_ATTACKS: Lazy<[[u64; 64]; 2]> = Lazy::new(|| {
    let mut attacks = [[0u64; 64]; 2];
    for color in Color::BOTH {
        let dir = color.pawn_direction();
        attacks[color.index()] = leaper_table(&[(dir, -1), (dir, 1)]);
    }
    attacks
});

/// Iterate the squares of a mask in ascending index order.
pub(crate) fn squares_in(mut mask: u64) -> impl Iterator<Item = Square> {
    std::iter::from_fn(move || {
        if mask == 0 {
            return None;
        }
        let idx = mask.trailing_zeros() as usize;
        mask &= mask - 1;
        Some(Square::from_index(idx))
    })
}

impl Board {
    /// Whether any piece of `by` attacks `sq`.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        let idx = sq.as_index();

        // A pawn of `by` attacks sq if sq's reverse pawn attack hits it.
        let pawn_sources = PAWN_ATTACKS[by.opponent().index()][idx];
        if squares_in(pawn_sources).any(|s| self.piece_at(s) == Some((by, Piece::Pawn))) {
            return true;
        }
        if squares_in(KNIGHT_ATTACKS[idx]).any(|s| self.piece_at(s) == Some((by, Piece::Knight))) {
            return true;
        }
        if squares_in(KING_ATTACKS[idx]).any(|s| self.piece_at(s) == Some((by, Piece::King))) {
            return true;
        }

        let slider_hits = |dirs: &[(isize, isize)], kinds: [Piece; 2]| {
            dirs.iter().any(|&(dr, df)| {
                let mut cur = sq;
                while let Some(next) = cur.offset(dr, df) {
                    if let Some((color, piece)) = self.piece_at(next) {
                        return color == by && kinds.contains(&piece);
                    }
                    cur = next;
                }
                false
            })
        };

        slider_hits(&DIAGONAL_DIRS[..], [Piece::Bishop, Piece::Queen])
            || slider_hits(&STRAIGHT_DIRS[..], [Piece::Rook, Piece::Queen])
    }

    /// Whether `color`'s king is attacked. A board without that king is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }
}
