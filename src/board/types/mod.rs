//! Core chess types.
//!
//! This module contains the fundamental value types used throughout the engine:
//! - `Alliance`, `PieceKind` and `Piece` - sides, piece kinds and immutable pieces
//! - `Position` - (rank, file) coordinates and the 0..63 index
//! - `Square` - empty or occupied square of a board snapshot
//! - `Move` and `MoveKind` - the flattened move variants

mod moves;
mod piece;
mod position;
mod square;

pub use moves::{Move, MoveKind, NULL_MOVE};
pub use piece::{Alliance, Piece, PieceKind};
pub use position::{is_valid_position, Position, BOARD_SIZE, NUM_SQUARES};
pub use square::Square;
