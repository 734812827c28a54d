//! Background searches.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::board::{Color, Move};
use crate::position::Position;
use crate::sync::ThinkingFlag;

use super::{Engine, EngineError};

/// Search thread stack size (32 MB)
const SEARCH_STACK_SIZE: usize = 32 * 1024 * 1024;

/// A `best_move` running on its own thread.
pub struct SearchJob {
    stop: ThinkingFlag,
    handle: JoinHandle<Result<Move, EngineError>>,
}

impl SearchJob {
    /// Signal stop without waiting
    pub fn stop(&self) {
        self.stop.stop();
    }

    /// Whether the worker has returned.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the search finishes on its own.
    pub fn wait(self) -> Result<Move, EngineError> {
        self.handle
            .join()
            .unwrap_or(Err(EngineError::SearchAborted))
    }

    /// Stop the search and wait for the thread to finish
    pub fn stop_and_wait(self) -> Result<Move, EngineError> {
        self.stop();
        self.wait()
    }
}

impl Engine {
    /// Run [`best_move`](Engine::best_move) for `color` on a worker thread.
    ///
    /// The thinking flag is raised before this returns, so a stop issued
    /// straight away is never lost to a worker that has not started yet.
    pub fn spawn_best_move<P>(self: &Arc<Self>, board: P, color: Color) -> std::io::Result<SearchJob>
    where
        P: Position + Send + 'static,
    {
        let guard = self.thinking_flag().start();
        let engine = Arc::clone(self);
        let handle = thread::Builder::new()
            .name("chess-search".to_string())
            .stack_size(SEARCH_STACK_SIZE)
            .spawn(move || {
                let _guard = guard;
                engine.search_best_move(&board, color)
            })?;
        Ok(SearchJob {
            stop: self.stop_handle(),
            handle,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::board::Board;
    use crate::engine::EngineOptionsUpdate;

    #[test]
    fn test_background_search_completes() {
        let engine = Arc::new(Engine::with_seed(3));
        engine.set_options(EngineOptionsUpdate::default().depth(2).skill_level(20));
        let board = Board::new();
        let expected = engine.best_move(&board, Color::White).unwrap();

        let job = engine.spawn_best_move(board, Color::White).unwrap();
        assert_eq!(job.wait(), Ok(expected));
        assert!(!engine.is_thinking());
    }

    #[test]
    fn test_background_search_stops_promptly() {
        let engine = Arc::new(Engine::with_seed(3));
        engine.set_options(
            EngineOptionsUpdate::default()
                .depth(5)
                .skill_level(20)
                .thinking_delay(Some(Duration::from_millis(2))),
        );
        let board = Board::new();
        let job = engine.spawn_best_move(board.clone(), Color::White).unwrap();
        assert!(engine.is_thinking());

        thread::sleep(Duration::from_millis(30));
        let started = Instant::now();
        let mv = job.stop_and_wait().unwrap();
        assert!(started.elapsed() < Duration::from_secs(5));
        assert!(board.legal_moves().contains(&mv));
        assert!(!engine.is_thinking());
    }

    #[test]
    fn test_stop_before_worker_runs() {
        let engine = Arc::new(Engine::with_seed(3));
        engine.set_options(EngineOptionsUpdate::default().depth(6).skill_level(20));
        let job = engine.spawn_best_move(Board::new(), Color::White).unwrap();
        job.stop();
        assert!(job.wait().is_ok());
    }

    #[test]
    fn test_background_no_moves() {
        let engine = Arc::new(Engine::new());
        let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        let job = engine.spawn_best_move(board, Color::Black).unwrap();
        assert_eq!(job.wait(), Err(EngineError::NoValidMoves));
    }
}
