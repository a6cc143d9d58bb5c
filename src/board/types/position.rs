//! Board coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::PositionError;
use crate::board::notation;

/// Number of squares along a rank or a file
pub const BOARD_SIZE: usize = 8;
/// Number of squares on the board
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// A (rank, file) coordinate on the board.
///
/// Rank index 0 is the 8th rank (Black's back rank) and file index 0 is the
/// a-file, so the linear index `rank * 8 + file` runs from a8 (0) to h1 (63).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPosition"))]
pub struct Position {
    rank: u8,
    file: u8,
}

const fn all_positions() -> [Position; NUM_SQUARES] {
    let mut positions = [Position { rank: 0, file: 0 }; NUM_SQUARES];
    let mut i = 0;
    while i < NUM_SQUARES {
        positions[i] = Position {
            rank: (i / BOARD_SIZE) as u8,
            file: (i % BOARD_SIZE) as u8,
        };
        i += 1;
    }
    positions
}

impl Position {
    /// Every position in index order (a8, b8, ..., h1)
    pub const ALL: [Position; NUM_SQUARES] = all_positions();

    /// Create a position with bounds checking
    pub fn new(rank: usize, file: usize) -> Result<Self, PositionError> {
        if rank >= BOARD_SIZE {
            return Err(PositionError::RankOutOfBounds { rank });
        }
        if file >= BOARD_SIZE {
            return Err(PositionError::FileOutOfBounds { file });
        }
        Ok(Position {
            rank: rank as u8,
            file: file as u8,
        })
    }

    /// Create a position from coordinates known to be on the board.
    ///
    /// # Panics
    /// Panics if `rank` or `file` is 8 or more.
    #[must_use]
    pub const fn at(rank: u8, file: u8) -> Self {
        assert!(
            (rank as usize) < BOARD_SIZE && (file as usize) < BOARD_SIZE,
            "position out of bounds"
        );
        Position { rank, file }
    }

    /// Create a position from a linear index (0-63)
    pub fn from_index(index: usize) -> Result<Self, PositionError> {
        Position::ALL
            .get(index)
            .copied()
            .ok_or(PositionError::IndexOutOfBounds { index })
    }

    /// Look a position up by its algebraic name ("a8".."h1")
    pub fn from_notation(name: &str) -> Result<Self, PositionError> {
        notation::index_at(name).map(|index| Position::ALL[index])
    }

    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Linear index: rank * 8 + file
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.rank as usize * BOARD_SIZE + self.file as usize
    }

    /// The position shifted by the given offsets, if still on the board
    #[inline]
    #[must_use]
    pub fn offset(self, rank_offset: i8, file_offset: i8) -> Option<Position> {
        let rank = self.rank as i8 + rank_offset;
        let file = self.file as i8 + file_offset;
        if is_valid_position(rank, file) {
            Some(Position {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    /// Algebraic name of this position, e.g. "e4"
    #[must_use]
    pub fn notation(self) -> &'static str {
        notation::position_at(self.index())
    }
}

/// Whether signed coordinates fall on the board
#[inline]
#[must_use]
pub fn is_valid_position(rank: i8, file: i8) -> bool {
    (0..BOARD_SIZE as i8).contains(&rank) && (0..BOARD_SIZE as i8).contains(&file)
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notation())
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_notation(s)
    }
}

/// Unchecked (rank, file) pair, validated on its way into a [`Position`]
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawPosition {
    rank: usize,
    file: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPosition> for Position {
    type Error = PositionError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.rank, raw.file)
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = PositionError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        Position::new(rank, file)
    }
}
