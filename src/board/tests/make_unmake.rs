//! Make/unmake move tests.

use crate::board::{Board, Color, Move, Piece, Square, UnmakeInfo};
use rand::prelude::*;

fn mv(notation: &str) -> Move {
    notation.parse().expect("valid move notation")
}

#[test]
fn test_en_passant_make_unmake() {
    let mut board =
        Board::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
    let original = board.clone();
    let m = mv("e5f6");
    assert!(board.legal_moves().contains(&m));

    let info = board.make_move(m);
    assert_eq!(board.piece_at(Square(4, 5)), None, "captured pawn removed");
    assert_eq!(board.piece_at(Square(5, 5)), Some((Color::White, Piece::Pawn)));

    board.unmake_move(m, info);
    assert_eq!(board, original);
}

#[test]
fn test_promotion_make_unmake() {
    let mut board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let original = board.clone();
    let m = mv("a7a8");
    let info = board.make_move(m);
    assert_eq!(board.piece_at(Square(7, 0)), Some((Color::White, Piece::Queen)));

    board.unmake_move(m, info);
    assert_eq!(board, original);
    assert_eq!(board.piece_at(Square(6, 0)), Some((Color::White, Piece::Pawn)));
}

#[test]
fn test_castling_make_unmake() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let original = board.clone();
    let m = mv("e1g1");
    let info = board.make_move(m);
    assert_eq!(board.piece_at(Square(0, 6)), Some((Color::White, Piece::King)));
    assert_eq!(board.piece_at(Square(0, 5)), Some((Color::White, Piece::Rook)));
    assert_eq!(board.piece_at(Square(0, 7)), None);
    assert!(board.has_castled(Color::White));
    assert!(!board.castling_rights().has(Color::White, false));

    board.unmake_move(m, info);
    assert_eq!(board, original);
    assert!(!board.has_castled(Color::White));
}

#[test]
fn test_capture_restores_victim() {
    let mut board = Board::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 5 10");
    let original = board.clone();
    let m = mv("e4d5");
    let info = board.make_move(m);
    assert_eq!(board.halfmove_clock(), 0);
    assert_eq!(board.count(Color::Black, Piece::Pawn), 0);
    board.unmake_move(m, info);
    assert_eq!(board, original);
}

#[test]
fn test_move_from_empty_square_is_noop() {
    let mut board = Board::new();
    let original = board.clone();
    let m = mv("e4e5");
    let info = board.make_move(m);
    assert_eq!(board, original);
    board.unmake_move(m, info);
    assert_eq!(board, original);
}

#[test]
fn test_move_piece_flips_side_by_mover() {
    let mut board = Board::new();
    board.move_piece(Square(6, 4), Square(4, 4));
    // Black moved, so White is to move regardless of who was on move before.
    assert_eq!(board.side_to_move(), Color::White);
    assert_eq!(board.fullmove_number(), 2);
}

#[test]
fn test_legal_moves_stable_after_make_unmake() {
    let mut board = Board::new();
    let initial_moves = board.legal_moves();

    for m in &initial_moves {
        let info = board.make_move(*m);
        board.unmake_move(*m, info);
    }

    assert_eq!(board.legal_moves(), initial_moves);
}

#[test]
fn test_random_playout_round_trip_state() {
    let mut board = Board::new();
    let initial = board.clone();

    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut history: Vec<(Move, UnmakeInfo)> = Vec::new();

    for _ in 0..120 {
        let moves = board.legal_moves();
        let Some(&m) = moves.choose(&mut rng) else {
            break;
        };
        let info = board.make_move(m);
        history.push((m, info));
    }

    while let Some((m, info)) = history.pop() {
        board.unmake_move(m, info);
    }

    assert_eq!(board, initial);
}
