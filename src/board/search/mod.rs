//! Move selection.
//!
//! A [`MoveStrategy`] picks one move for the side to move. [`MiniMax`] is the
//! plain exhaustive fixed-depth minimax: no pruning, no move ordering, no
//! caching. [`BackgroundSearch`] runs a search on its own thread so callers
//! can stay responsive and stop it early.

mod background;
mod minimax;

use std::time::Duration;

use super::{Board, Move};

pub use background::BackgroundSearch;
pub use minimax::MiniMax;

/// Chooses a move for the current player of a board.
pub trait MoveStrategy {
    /// The chosen move, or the null move if the current player has none.
    fn execute(&self, board: &Board) -> Move;
}

/// Outcome of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen move (the null move when no move could be played)
    pub best_move: Move,
    /// Minimax value of the chosen move, from White's point of view
    pub score: i32,
    /// Boards visited, root included
    pub nodes: u64,
    pub elapsed: Duration,
}
