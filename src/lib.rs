pub mod board;
pub mod sync;

pub use board::{Alliance, Board, Builder, MiniMax, Move, MoveStatus, Piece, PieceKind, Position};
pub use sync::StopFlag;
