//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use mailbox_chess::board::prelude::*;
//! ```

pub use super::{
    Alliance, Board, BoardEvaluator, Builder, MiniMax, Move, MoveStatus, MoveStrategy, Piece,
    PieceKind, Player, Position, StandardEvaluator,
};
