//! The long-lived search engine.
//!
//! An [`Engine`] owns nothing but its options, a random source for skill
//! weakening, the node counter of the last search and the thinking flag.
//! It is `Send + Sync`; every method takes `&self`, so one engine can be
//! shared behind an `Arc` and stopped from another thread while it searches.

mod controller;
mod error;
mod options;

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::board::Move;
use crate::sync::ThinkingFlag;

pub use controller::SearchJob;
pub use error::{EngineError, OptionError};
pub use options::{EngineOptions, EngineOptionsUpdate, DEFAULT_BATCH_DEPTH, MAX_SKILL_LEVEL};

/// Minimax engine with alpha-beta pruning and adjustable strength.
///
/// # Example
/// ```
/// use chess_search::{Board, Color, Engine, EngineOptionsUpdate};
///
/// let engine = Engine::with_seed(7);
/// engine.set_options(EngineOptionsUpdate::default().depth(2).skill_level(20));
/// let mv = engine.best_move(&Board::new(), Color::White).unwrap();
/// println!("engine plays {mv}");
/// ```
#[derive(Debug)]
pub struct Engine {
    options: Mutex<EngineOptions>,
    rng: Mutex<StdRng>,
    nodes: AtomicU64,
    thinking: ThinkingFlag,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Engine with default options, seeded from the OS.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(EngineOptions::default(), StdRng::from_entropy())
    }

    /// Engine whose skill weakening is reproducible.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_parts(EngineOptions::default(), StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn with_options(options: EngineOptions) -> Self {
        Self::from_parts(options, StdRng::from_entropy())
    }

    fn from_parts(options: EngineOptions, rng: StdRng) -> Self {
        Engine {
            options: Mutex::new(options),
            rng: Mutex::new(rng),
            nodes: AtomicU64::new(0),
            thinking: ThinkingFlag::new(),
        }
    }

    /// Snapshot of the current options.
    #[must_use]
    pub fn options(&self) -> EngineOptions {
        self.options.lock().clone()
    }

    /// Merge `update` into the options. A search already running keeps the
    /// snapshot it started with.
    pub fn set_options(&self, update: EngineOptionsUpdate) {
        self.options.lock().merge(&update);
    }

    /// Set one option by name, see [`EngineOptions::set_named`].
    ///
    /// # Errors
    /// Unknown names and unparsable values leave the options unchanged.
    pub fn set_option(&self, name: &str, value: &str) -> Result<(), OptionError> {
        self.options.lock().set_named(name, value)
    }

    /// Ask the running search to unwind. Has no effect when idle.
    pub fn stop_thinking(&self) {
        self.thinking.stop();
    }

    #[must_use]
    pub fn is_thinking(&self) -> bool {
        self.thinking.is_thinking()
    }

    /// A handle that can stop this engine's searches from another thread.
    #[must_use]
    pub fn stop_handle(&self) -> ThinkingFlag {
        self.thinking.clone()
    }

    /// Nodes visited by the most recent search.
    #[must_use]
    pub fn nodes_searched(&self) -> u64 {
        self.nodes.load(Ordering::Relaxed)
    }

    pub(crate) fn thinking_flag(&self) -> &ThinkingFlag {
        &self.thinking
    }

    pub(crate) fn node_counter(&self) -> &AtomicU64 {
        &self.nodes
    }

    pub(crate) fn reset_nodes(&self) {
        self.nodes.store(0, Ordering::Relaxed);
    }

    /// With probability `(20 - skill_level) / 20`, swap `best` for a
    /// uniformly random move from `moves`.
    pub(crate) fn weaken(&self, best: Move, moves: &[Move], skill_level: u8) -> Move {
        if skill_level >= MAX_SKILL_LEVEL {
            return best;
        }
        let random_factor = f64::from(MAX_SKILL_LEVEL - skill_level) / f64::from(MAX_SKILL_LEVEL);
        let mut rng = self.rng.lock();
        if rng.gen_bool(random_factor) {
            let pick = moves.choose(&mut *rng).copied().unwrap_or(best);
            search_debug!("skill level {skill_level}: replacing {best} with {pick}");
            pick
        } else {
            best
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    fn sample_moves() -> Vec<Move> {
        (0..8)
            .map(|file| Move::new(Square(1, file), Square(2, file)))
            .collect()
    }

    #[test]
    fn test_engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
    }

    #[test]
    fn test_full_strength_never_weakens() {
        let engine = Engine::with_seed(1);
        let moves = sample_moves();
        for _ in 0..200 {
            assert_eq!(engine.weaken(moves[3], &moves, MAX_SKILL_LEVEL), moves[3]);
        }
    }

    #[test]
    fn test_skill_zero_always_randomises() {
        // gen_bool(1.0) always fires, so the pick is a uniform draw; over many
        // draws it must leave the best move at least once.
        let engine = Engine::with_seed(2);
        let moves = sample_moves();
        let picks: Vec<Move> = (0..200).map(|_| engine.weaken(moves[0], &moves, 0)).collect();
        assert!(picks.iter().all(|m| moves.contains(m)));
        assert!(picks.iter().any(|&m| m != moves[0]));
    }

    #[test]
    fn test_same_seed_same_choices() {
        let moves = sample_moves();
        let a = Engine::with_seed(42);
        let b = Engine::with_seed(42);
        for _ in 0..50 {
            assert_eq!(a.weaken(moves[0], &moves, 5), b.weaken(moves[0], &moves, 5));
        }
    }

    #[test]
    fn test_idle_engine() {
        let engine = Engine::new();
        assert!(!engine.is_thinking());
        assert_eq!(engine.nodes_searched(), 0);
        engine.stop_thinking();
        assert!(!engine.is_thinking());
    }

    #[test]
    fn test_set_options_merges() {
        let engine = Engine::new();
        engine.set_options(EngineOptionsUpdate::default().skill_level(20));
        engine.set_options(EngineOptionsUpdate::default().depth(4));
        let options = engine.options();
        assert_eq!(options.skill_level, 20);
        assert_eq!(options.depth, 4);
        assert!(options.use_opening);
    }
}
