//! Depth-limited minimax with alpha-beta pruning.

use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::Duration;

use crate::board::{Color, Move};
use crate::position::Position;
use crate::sync::ThinkingFlag;

use super::enumerate::valid_moves;
use super::eval::Evaluator;

/// Score of a checkmate, from White's point of view when positive.
pub const MATE_SCORE: i32 = 9999;

/// Window bound; beyond any reachable evaluation.
pub const INFINITY: i32 = 1_000_000;

/// Everything one search needs besides the position itself.
pub(crate) struct SearchContext<'a> {
    pub(crate) thinking: &'a ThinkingFlag,
    pub(crate) nodes: &'a AtomicU64,
    pub(crate) evaluator: Evaluator,
    pub(crate) thinking_delay: Option<Duration>,
}

impl SearchContext<'_> {
    /// Alpha-beta minimax. White maximises.
    ///
    /// `line` receives the principal variation below this node. Returns 0
    /// as soon as the thinking flag is cleared.
    pub(crate) fn minimax<P: Position>(
        &self,
        board: &mut P,
        depth: u32,
        alpha: i32,
        beta: i32,
        maximizing: bool,
        line: &mut Vec<Move>,
    ) -> i32 {
        self.node(board, depth, alpha, beta, maximizing, line, true)
    }

    /// Same tree walk without cutoffs.
    pub(crate) fn minimax_unpruned<P: Position>(
        &self,
        board: &mut P,
        depth: u32,
        maximizing: bool,
        line: &mut Vec<Move>,
    ) -> i32 {
        self.node(board, depth, -INFINITY, INFINITY, maximizing, line, false)
    }

    /// Search the root move `mv` on a private copy of `board`.
    pub(crate) fn score_root_move<P: Position>(
        &self,
        board: &P,
        mv: Move,
        depth: u32,
        color: Color,
        line: &mut Vec<Move>,
    ) -> i32 {
        let mut child = board.clone();
        child.make_move(mv);
        let mut tail = Vec::new();
        let score = self.minimax(
            &mut child,
            depth,
            -INFINITY,
            INFINITY,
            color == Color::Black,
            &mut tail,
        );
        line.clear();
        line.push(mv);
        line.append(&mut tail);
        score
    }

    #[allow(clippy::too_many_arguments)]
    fn node<P: Position>(
        &self,
        board: &mut P,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        line: &mut Vec<Move>,
        prune: bool,
    ) -> i32 {
        self.nodes.fetch_add(1, Ordering::Relaxed);
        line.clear();

        if !self.thinking.is_thinking() {
            return 0;
        }
        if depth == 0 {
            return self.evaluator.evaluate(board);
        }

        let color = if maximizing { Color::White } else { Color::Black };
        let moves = valid_moves(board, color);
        if moves.is_empty() {
            return if !board.is_in_check(color) {
                0
            } else if maximizing {
                -MATE_SCORE
            } else {
                MATE_SCORE
            };
        }
        if board.is_game_over() {
            return self.evaluator.evaluate(board);
        }

        if let Some(delay) = self.thinking_delay {
            thread::sleep(delay);
            if !self.thinking.is_thinking() {
                return 0;
            }
        }

        let mut best = if maximizing { -INFINITY } else { INFINITY };
        let mut child_line = Vec::new();
        for mv in moves {
            let undo = board.make_move(mv);
            let score = self.node(board, depth - 1, alpha, beta, !maximizing, &mut child_line, prune);
            board.unmake_move(mv, undo);

            let improved = if maximizing { score > best } else { score < best };
            if improved {
                best = score;
                line.clear();
                line.push(mv);
                line.extend_from_slice(&child_line);
            }
            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
            if prune && beta <= alpha {
                break;
            }
            if !self.thinking.is_thinking() {
                break;
            }
        }
        best
    }
}
