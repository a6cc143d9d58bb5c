//! Squares of a board snapshot.

use std::fmt;

use super::piece::Piece;
use super::position::Position;

/// A square at a fixed position, either empty or holding one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Square {
    Empty(Position),
    Occupied(Piece),
}

impl Square {
    /// An occupied square if `piece` is present, an empty one otherwise.
    #[inline]
    #[must_use]
    pub fn new(position: Position, piece: Option<Piece>) -> Self {
        match piece {
            Some(piece) => Square::Occupied(piece),
            None => Square::Empty(position),
        }
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            Square::Empty(position) => *position,
            Square::Occupied(piece) => piece.position(),
        }
    }

    #[inline]
    #[must_use]
    pub fn piece(&self) -> Option<Piece> {
        match self {
            Square::Empty(_) => None,
            Square::Occupied(piece) => Some(*piece),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        matches!(self, Square::Occupied(_))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Square::Empty(_) => write!(f, "-"),
            Square::Occupied(piece) => write!(f, "{}", piece.diagram_char()),
        }
    }
}
