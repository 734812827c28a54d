//! Engine-level search tests.
//!
//! - `selection.rs` - `best_move`: determinism, mates, skill weakening
//! - `batch.rs` - `evaluate_moves` ordering and principal lines
//! - `cancellation.rs` - stopping a search from another thread
//! - `proptest.rs` - evaluator symmetry and pruning over random playouts

mod cancellation;

use crate::board::{Board, Move};
use crate::engine::{Engine, EngineOptionsUpdate};

fn mv(notation: &str) -> Move {
    notation.parse().expect("valid move notation")
}

/// Deterministic engine at `depth`.
fn full_strength(depth: u32) -> Engine {
    let engine = Engine::with_seed(0);
    engine.set_options(EngineOptionsUpdate::default().depth(depth).skill_level(20));
    engine
}

fn board(fen: &str) -> Board {
    Board::from_fen(fen)
}
