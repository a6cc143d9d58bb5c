//! Alliance, piece kind and the immutable piece value.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::position::Position;

/// One of the two sides.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Alliance {
    White,
    Black,
}

impl Alliance {
    /// Both alliances in index order (White=0, Black=1)
    pub const BOTH: [Alliance; 2] = [Alliance::White, Alliance::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Alliance::White => 0,
            Alliance::Black => 1,
        }
    }

    /// Returns the opposite alliance
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Alliance {
        match self {
            Alliance::White => Alliance::Black,
            Alliance::Black => Alliance::White,
        }
    }

    /// Returns true for White
    #[inline]
    #[must_use]
    pub const fn is_white(self) -> bool {
        matches!(self, Alliance::White)
    }

    /// Returns true for Black
    #[inline]
    #[must_use]
    pub const fn is_black(self) -> bool {
        matches!(self, Alliance::Black)
    }

    /// Multiplier applied to offset tables written from White's point of view
    /// (+1 for White, -1 for Black). White advances toward rank index 0.
    #[inline]
    #[must_use]
    pub const fn direction(self) -> i8 {
        match self {
            Alliance::White => 1,
            Alliance::Black => -1,
        }
    }

    /// Rank index the alliance's pawns start on (6 for White, 1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Alliance::White => 6,
            Alliance::Black => 1,
        }
    }

    /// Rank index a pawn of this alliance promotes on
    #[inline]
    #[must_use]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Alliance::White => 0,
            Alliance::Black => 7,
        }
    }

    /// Back rank index: where the king and rooks start and castle
    #[inline]
    #[must_use]
    pub const fn back_rank(self) -> u8 {
        match self {
            Alliance::White => 7,
            Alliance::Black => 0,
        }
    }
}

impl fmt::Display for Alliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alliance::White => write!(f, "White"),
            Alliance::Black => write!(f, "Black"),
        }
    }
}

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Material value in centipawns
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 300,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 10000,
        }
    }

    /// Upper-case letter used in notation and board diagrams
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Parse a piece kind from its letter (either case)
    #[must_use]
    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Returns true for the king
    #[inline]
    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self, PieceKind::King)
    }

    /// Returns true for rooks
    #[inline]
    #[must_use]
    pub const fn is_rook(self) -> bool {
        matches!(self, PieceKind::Rook)
    }

    /// Returns true for pawns
    #[inline]
    #[must_use]
    pub const fn is_pawn(self) -> bool {
        matches!(self, PieceKind::Pawn)
    }

    /// Returns true if this piece slides along rays (Bishop, Rook, Queen)
    #[inline]
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// An immutable piece standing on a square.
///
/// Moving never mutates a piece; [`Piece::moved_to`] produces the value that
/// stands on the destination, with `first_move` cleared. Equality is
/// structural over all four fields.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    kind: PieceKind,
    alliance: Alliance,
    position: Position,
    first_move: bool,
}

impl Piece {
    /// A piece that has not moved yet.
    #[must_use]
    pub const fn new(kind: PieceKind, alliance: Alliance, position: Position) -> Self {
        Piece {
            kind,
            alliance,
            position,
            first_move: true,
        }
    }

    /// A piece with an explicit first-move flag.
    #[must_use]
    pub const fn with_first_move(
        kind: PieceKind,
        alliance: Alliance,
        position: Position,
        first_move: bool,
    ) -> Self {
        Piece {
            kind,
            alliance,
            position,
            first_move,
        }
    }

    /// The kind of piece
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// The side the piece belongs to
    #[inline]
    #[must_use]
    pub const fn alliance(&self) -> Alliance {
        self.alliance
    }

    /// The square the piece stands on
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// True until the piece has made a move
    #[inline]
    #[must_use]
    pub const fn is_first_move(&self) -> bool {
        self.first_move
    }

    /// The same piece standing on `destination` after having moved.
    #[inline]
    #[must_use]
    pub const fn moved_to(&self, destination: Position) -> Piece {
        Piece {
            kind: self.kind,
            alliance: self.alliance,
            position: destination,
            first_move: false,
        }
    }

    /// The same piece standing on the move's destination
    #[inline]
    #[must_use]
    pub fn moved_copy(&self, mv: &super::Move) -> Piece {
        self.moved_to(mv.destination())
    }

    /// Letter as shown on a board diagram: upper-case for White, lower-case for Black
    #[must_use]
    pub fn diagram_char(&self) -> char {
        let c = self.kind.letter();
        if self.alliance.is_black() {
            c.to_ascii_lowercase()
        } else {
            c
        }
    }

    /// Material value of this piece
    #[inline]
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.kind.value()
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}
