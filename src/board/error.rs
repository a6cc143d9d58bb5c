//! Error types for board construction, square addressing and move execution.
//!
//! Rule violations (illegal moves, moves that leave the king in check) are not
//! errors: they are reported through [`MoveStatus`](super::MoveStatus).

use std::fmt;

use super::Alliance;

/// Error type for out-of-range coordinates and unknown square names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Linear index out of bounds (must be 0-63)
    IndexOutOfBounds { index: usize },
    /// Not one of "a1".."h8"
    InvalidNotation { notation: String },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            PositionError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            PositionError::IndexOutOfBounds { index } => {
                write!(f, "Square index {index} out of bounds (must be 0-63)")
            }
            PositionError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Error type for board construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// An alliance has no king
    MissingKing { alliance: Alliance },
    /// More than one king of the same alliance
    WrongKingCount { alliance: Alliance, count: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::MissingKing { alliance } => {
                write!(f, "Chess cannot be played without a king: {alliance} has none")
            }
            BoardError::WrongKingCount { alliance, count } => {
                write!(f, "{alliance} has {count} kings, expected exactly one")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for move execution failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The null move sentinel was executed
    NullMove,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NullMove => write!(f, "A null move cannot be performed"),
        }
    }
}

impl std::error::Error for MoveError {}
