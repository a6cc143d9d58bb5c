//! Fixed-depth minimax search.
//!
//! Every legal move is searched to the same depth with no pruning. White
//! maximizes the evaluator's score and Black minimizes it.

use std::fmt;
use std::time::Instant;

use log::{debug, info};

use super::{MoveStrategy, SearchResult};
use crate::board::eval::{BoardEvaluator, StandardEvaluator};
use crate::board::{Alliance, Board, Move, NULL_MOVE};
use crate::sync::StopFlag;

/// Fixed-depth minimax over every legal move.
///
/// White maximizes and Black minimizes the evaluator's score. Among moves of
/// equal value the one searched last is kept. Search stops at the depth
/// horizon or when the side to move has no playable move (checkmate or
/// stalemate), where the board is scored statically.
#[derive(Clone, Debug)]
pub struct MiniMax<E = StandardEvaluator> {
    evaluator: E,
    depth: u32,
}

impl MiniMax {
    /// Minimax with the standard evaluator. A depth of 0 searches 1 ply.
    #[must_use]
    pub fn new(depth: u32) -> Self {
        Self::with_evaluator(depth, StandardEvaluator::new())
    }
}

impl<E: BoardEvaluator> MiniMax<E> {
    #[must_use]
    pub fn with_evaluator(depth: u32, evaluator: E) -> Self {
        MiniMax {
            evaluator,
            depth: depth.max(1),
        }
    }

    #[inline]
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Search `board` to the full depth.
    #[must_use]
    pub fn search(&self, board: &Board) -> SearchResult {
        self.run(board, None)
    }

    /// Search `board`, giving up as soon as `stop` is set.
    ///
    /// A stopped search returns the best root move completed so far, or the
    /// null move if none was.
    #[must_use]
    pub fn search_with_stop(&self, board: &Board, stop: &StopFlag) -> SearchResult {
        self.run(board, Some(stop))
    }

    fn run(&self, board: &Board, stop: Option<&StopFlag>) -> SearchResult {
        let start = Instant::now();
        let player = board.current_player();
        let maximizing = player.alliance() == Alliance::White;
        info!("{player} is thinking at a depth of {}", self.depth);

        let mut ctx = SearchContext {
            evaluator: &self.evaluator,
            stop,
            nodes: 1,
        };
        let mut best_move = NULL_MOVE;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

        for mv in player.legal_moves() {
            if ctx.stopped() {
                break;
            }
            let transition = player.make_move(*mv);
            if !transition.status().is_done() {
                continue;
            }
            let score = ctx.value(transition.board(), self.depth - 1);
            if ctx.stopped() {
                // The subtree of this move was cut short
                break;
            }
            debug!("{mv}: {score}");
            if (maximizing && score >= best_score) || (!maximizing && score <= best_score) {
                best_score = score;
                best_move = *mv;
            }
        }

        if best_move.is_null() {
            best_score = self.evaluator.evaluate(board, self.depth);
        }

        let result = SearchResult {
            best_move,
            score: best_score,
            nodes: ctx.nodes,
            elapsed: start.elapsed(),
        };
        info!(
            "{player} chose {} (score {}, {} nodes, {:?})",
            result.best_move, result.score, result.nodes, result.elapsed
        );
        result
    }
}

impl<E: BoardEvaluator> MoveStrategy for MiniMax<E> {
    fn execute(&self, board: &Board) -> Move {
        self.search(board).best_move
    }
}

impl<E> fmt::Display for MiniMax<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Minimax")
    }
}

/// Per-search state shared by every node.
struct SearchContext<'a, E> {
    evaluator: &'a E,
    stop: Option<&'a StopFlag>,
    nodes: u64,
}

impl<E: BoardEvaluator> SearchContext<'_, E> {
    #[inline]
    fn stopped(&self) -> bool {
        self.stop.is_some_and(StopFlag::is_stopped)
    }

    /// Minimax value of `board`: White to move maximizes, Black minimizes.
    fn value(&mut self, board: &Board, depth: u32) -> i32 {
        self.nodes += 1;
        if depth == 0 || self.stopped() {
            return self.evaluator.evaluate(board, depth);
        }

        let player = board.current_player();
        let maximizing = player.alliance() == Alliance::White;
        let mut best: Option<i32> = None;

        for mv in player.legal_moves() {
            if self.stopped() {
                break;
            }
            let transition = player.make_move(*mv);
            if !transition.status().is_done() {
                continue;
            }
            let score = self.value(transition.board(), depth - 1);
            best = Some(match best {
                None => score,
                Some(current) if maximizing => current.max(score),
                Some(current) => current.min(score),
            });
        }

        // No playable move: checkmate or stalemate (or the search was stopped)
        best.unwrap_or_else(|| self.evaluator.evaluate(board, depth))
    }
}
