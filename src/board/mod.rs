//! Chess board representation and game logic.
//!
//! Boards are immutable snapshots of a square-centric (8x8 mailbox) position.
//! Every board knows both players' moves; playing a move through a
//! [`Player`] yields a [`MoveTransition`] carrying the next board. Supports
//! castling, en passant and promotion to queen.
//!
//! # Example
//! ```
//! use mailbox_chess::board::{Board, Position};
//!
//! let board = Board::initial();
//! println!("Starting position has {} moves", board.current_player().legal_moves().len());
//!
//! let e2: Position = "e2".parse().unwrap();
//! let e4: Position = "e4".parse().unwrap();
//! let mv = board.find_move(e2, e4);
//! let transition = board.current_player().make_move(mv);
//! assert!(transition.status().is_done());
//! ```

mod builder;
mod error;
mod eval;
mod make_move;
mod movegen;
pub mod notation;
mod player;
pub mod prelude;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::Builder;
pub use error::{BoardError, MoveError, PositionError};
pub use eval::{BoardEvaluator, EvalWeights, StandardEvaluator};
pub use player::{calculate_attacks_on, MoveStatus, MoveTransition, Player};
pub use search::{BackgroundSearch, MiniMax, MoveStrategy, SearchResult};
pub use state::{find_move, Board};
pub use types::{
    is_valid_position, Alliance, Move, MoveKind, Piece, PieceKind, Position, Square, BOARD_SIZE,
    NULL_MOVE, NUM_SQUARES,
};
