//! Root move selection.

use std::time::Instant;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, Move};
use crate::engine::{Engine, EngineError, EngineOptions, DEFAULT_BATCH_DEPTH};
use crate::position::Position;

use super::enumerate::valid_moves;
use super::eval::Evaluator;
use super::minimax::SearchContext;

/// One root move scored by [`Engine::evaluate_moves`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveEvaluation {
    pub mv: Move,
    /// White's point of view, whichever side is moving.
    pub evaluation: i32,
    /// Plies searched, root move included.
    pub depth: u32,
    /// Principal line, starting with `mv`.
    pub best_line: Vec<Move>,
}

impl Engine {
    fn context(&self, options: &EngineOptions) -> SearchContext<'_> {
        SearchContext {
            thinking: self.thinking_flag(),
            nodes: self.node_counter(),
            evaluator: Evaluator::new(options.use_endgame),
            thinking_delay: options.thinking_delay,
        }
    }

    /// Best move for `color`, after skill weakening.
    ///
    /// A position with a single legal move returns it without searching.
    /// If the search is stopped the best move found so far is returned
    /// (the first legal move when nothing has been scored yet).
    ///
    /// # Errors
    /// [`EngineError::NoValidMoves`] when `color` has no legal move.
    pub fn best_move<P: Position>(&self, board: &P, color: Color) -> Result<Move, EngineError> {
        let _thinking = self.thinking_flag().start();
        self.search_best_move(board, color)
    }

    /// `best_move` body. The caller holds the thinking guard.
    pub(crate) fn search_best_move<P: Position>(
        &self,
        board: &P,
        color: Color,
    ) -> Result<Move, EngineError> {
        let options = self.options();
        let started = Instant::now();
        self.reset_nodes();

        let moves = valid_moves(board, color);
        let Some(&first) = moves.first() else {
            return Err(EngineError::NoValidMoves);
        };
        if moves.len() == 1 {
            search_debug!("only move {first}, skipping search");
            return Ok(first);
        }

        let ctx = self.context(&options);
        let depth = options.depth.max(1) - 1;
        let mut best = first;
        let mut best_score: Option<i32> = None;
        let mut line = Vec::new();
        for &mv in &moves {
            if !self.is_thinking() {
                search_debug!("search stopped after {} nodes", self.nodes_searched());
                break;
            }
            let score = ctx.score_root_move(board, mv, depth, color, &mut line);
            let better = match (best_score, color) {
                (None, _) => true,
                (Some(b), Color::White) => score > b,
                (Some(b), Color::Black) => score < b,
            };
            if better {
                best = mv;
                best_score = Some(score);
            }
        }

        let elapsed = started.elapsed();
        search_debug!(
            "best {best} score {:?} depth {} nodes {} time {elapsed:?}",
            best_score,
            options.depth,
            self.nodes_searched()
        );
        if elapsed > options.time_limit {
            search_warn!(
                "search took {elapsed:?}, over the {:?} time limit",
                options.time_limit
            );
        }

        Ok(self.weaken(best, &moves, options.skill_level))
    }

    /// Score every legal move of `color` to `depth` plies (default
    /// [`DEFAULT_BATCH_DEPTH`]), best first for that side.
    ///
    /// No skill weakening and no single-move shortcut. Moves not reached
    /// before a stop are left out.
    pub fn evaluate_moves<P: Position>(
        &self,
        board: &P,
        color: Color,
        depth: Option<u32>,
    ) -> Vec<MoveEvaluation> {
        let _thinking = self.thinking_flag().start();
        let options = self.options();
        let depth = depth.unwrap_or(DEFAULT_BATCH_DEPTH).max(1);
        self.reset_nodes();

        let ctx = self.context(&options);
        let mut results = Vec::new();
        for mv in valid_moves(board, color) {
            if !self.is_thinking() {
                break;
            }
            let mut best_line = Vec::new();
            let evaluation = ctx.score_root_move(board, mv, depth - 1, color, &mut best_line);
            results.push(MoveEvaluation {
                mv,
                evaluation,
                depth,
                best_line,
            });
        }

        match color {
            Color::White => results.sort_by(|a, b| b.evaluation.cmp(&a.evaluation)),
            Color::Black => results.sort_by(|a, b| a.evaluation.cmp(&b.evaluation)),
        }
        results
    }

    /// Static evaluation of `board` under the current options.
    #[must_use]
    pub fn evaluate_position<P: Position>(&self, board: &P) -> i32 {
        Evaluator::new(self.options().use_endgame).evaluate(board)
    }

    /// Alpha-beta minimax from `board`, outside of any root loop.
    ///
    /// Holds the thinking flag for its duration like the other searches.
    pub fn minimax<P: Position>(
        &self,
        board: &P,
        depth: u32,
        alpha: i32,
        beta: i32,
        maximizing: bool,
    ) -> i32 {
        let _thinking = self.thinking_flag().start();
        let options = self.options();
        self.reset_nodes();
        let mut board = board.clone();
        self.context(&options)
            .minimax(&mut board, depth, alpha, beta, maximizing, &mut Vec::new())
    }

    /// Plain minimax without cutoffs. Returns the same score as
    /// [`minimax`](Engine::minimax) with a full window, visiting more nodes.
    pub fn minimax_unpruned<P: Position>(&self, board: &P, depth: u32, maximizing: bool) -> i32 {
        let _thinking = self.thinking_flag().start();
        let options = self.options();
        self.reset_nodes();
        let mut board = board.clone();
        self.context(&options)
            .minimax_unpruned(&mut board, depth, maximizing, &mut Vec::new())
    }
}
