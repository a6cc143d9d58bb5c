//! Move representation.
//!
//! Every variant is one [`Move`] record: the moved piece, its destination and a
//! [`MoveKind`] tag carrying whatever extra pieces that variant needs.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::piece::{Alliance, Piece, PieceKind};
use super::position::Position;

/// What kind of move this is, with the variant-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Quiet move to an empty square (including a one-square pawn advance)
    Major,
    /// Capture of the piece on the destination square
    Attack { attacked: Piece },
    /// Two-square pawn advance; marks the pawn en-passant-eligible
    PawnJump,
    /// Pawn capture of an en-passant-eligible pawn beside it
    EnPassant { attacked: Piece },
    /// Pawn reaching the last rank, by advance (`attacked == None`) or capture
    Promotion { attacked: Option<Piece> },
    KingsideCastle { rook: Piece, rook_destination: Position },
    QueensideCastle { rook: Piece, rook_destination: Position },
    /// "No move" sentinel; never playable
    Null,
}

/// A move of one piece (two for castling) on a particular board.
///
/// Equality and hashing only look at the moved piece and the destination, so
/// a move found by coordinates compares equal to the generated one.
#[derive(Clone, Copy, Debug)]
pub struct Move {
    kind: MoveKind,
    moved_piece: Piece,
    destination: Position,
}

/// The null move: returned when no move matches and never executed.
pub const NULL_MOVE: Move = Move {
    kind: MoveKind::Null,
    moved_piece: Piece::with_first_move(
        PieceKind::Pawn,
        Alliance::White,
        Position::ALL[0],
        false,
    ),
    destination: Position::ALL[0],
};

impl Move {
    #[inline]
    #[must_use]
    pub const fn null() -> Self {
        NULL_MOVE
    }

    #[inline]
    #[must_use]
    pub const fn major(moved_piece: Piece, destination: Position) -> Self {
        Move {
            kind: MoveKind::Major,
            moved_piece,
            destination,
        }
    }

    #[inline]
    #[must_use]
    pub const fn attack(moved_piece: Piece, destination: Position, attacked: Piece) -> Self {
        Move {
            kind: MoveKind::Attack { attacked },
            moved_piece,
            destination,
        }
    }

    #[inline]
    #[must_use]
    pub const fn pawn_jump(pawn: Piece, destination: Position) -> Self {
        Move {
            kind: MoveKind::PawnJump,
            moved_piece: pawn,
            destination,
        }
    }

    #[inline]
    #[must_use]
    pub const fn en_passant(pawn: Piece, destination: Position, attacked: Piece) -> Self {
        Move {
            kind: MoveKind::EnPassant { attacked },
            moved_piece: pawn,
            destination,
        }
    }

    /// Wrap a pawn advance or pawn capture as a promotion to queen.
    #[inline]
    #[must_use]
    pub const fn promotion(pawn_move: Move) -> Self {
        let attacked = match pawn_move.kind {
            MoveKind::Attack { attacked } => Some(attacked),
            _ => None,
        };
        Move {
            kind: MoveKind::Promotion { attacked },
            moved_piece: pawn_move.moved_piece,
            destination: pawn_move.destination,
        }
    }

    #[inline]
    #[must_use]
    pub const fn kingside_castle(
        king: Piece,
        king_destination: Position,
        rook: Piece,
        rook_destination: Position,
    ) -> Self {
        Move {
            kind: MoveKind::KingsideCastle {
                rook,
                rook_destination,
            },
            moved_piece: king,
            destination: king_destination,
        }
    }

    #[inline]
    #[must_use]
    pub const fn queenside_castle(
        king: Piece,
        king_destination: Position,
        rook: Piece,
        rook_destination: Position,
    ) -> Self {
        Move {
            kind: MoveKind::QueensideCastle {
                rook,
                rook_destination,
            },
            moved_piece: king,
            destination: king_destination,
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> MoveKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn moved_piece(&self) -> Piece {
        self.moved_piece
    }

    /// Where the moved piece stands before the move
    #[inline]
    #[must_use]
    pub const fn current_position(&self) -> Position {
        self.moved_piece.position()
    }

    #[inline]
    #[must_use]
    pub const fn destination(&self) -> Position {
        self.destination
    }

    #[inline]
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_position().index()
    }

    #[inline]
    #[must_use]
    pub const fn destination_index(&self) -> usize {
        self.destination.index()
    }

    /// The captured piece, if any (for en passant it is not on the destination)
    #[inline]
    #[must_use]
    pub const fn attacked_piece(&self) -> Option<Piece> {
        match self.kind {
            MoveKind::Attack { attacked } | MoveKind::EnPassant { attacked } => Some(attacked),
            MoveKind::Promotion { attacked } => attacked,
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_attack(&self) -> bool {
        self.attacked_piece().is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_castle(&self) -> bool {
        matches!(
            self.kind,
            MoveKind::KingsideCastle { .. } | MoveKind::QueensideCastle { .. }
        )
    }

    /// The castling rook and where it lands
    #[inline]
    #[must_use]
    pub const fn castle_rook(&self) -> Option<(Piece, Position)> {
        match self.kind {
            MoveKind::KingsideCastle {
                rook,
                rook_destination,
            }
            | MoveKind::QueensideCastle {
                rook,
                rook_destination,
            } => Some((rook, rook_destination)),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(&self) -> bool {
        matches!(self.kind, MoveKind::Promotion { .. })
    }

    /// Pawn advances only move onto empty squares and never attack
    #[inline]
    #[must_use]
    pub const fn is_pawn_advance(&self) -> bool {
        match self.kind {
            MoveKind::PawnJump => true,
            MoveKind::Major => self.moved_piece.kind().is_pawn(),
            MoveKind::Promotion { attacked } => attacked.is_none(),
            _ => false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self.kind, MoveKind::Null)
    }

    /// The move a promotion wraps: the plain advance or the capture.
    #[must_use]
    pub(crate) const fn promotion_base(&self) -> Move {
        let kind = match self.kind {
            MoveKind::Promotion {
                attacked: Some(attacked),
            } => MoveKind::Attack { attacked },
            MoveKind::Promotion { attacked: None } => MoveKind::Major,
            other => other,
        };
        Move {
            kind,
            moved_piece: self.moved_piece,
            destination: self.destination,
        }
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.is_null() == other.is_null()
            && self.destination == other.destination
            && self.moved_piece == other.moved_piece
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_null().hash(state);
        self.destination.hash(state);
        self.moved_piece.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let piece = self.moved_piece.kind();
        let from = self.current_position().notation();
        match self.kind {
            MoveKind::Null => write!(f, "--"),
            MoveKind::KingsideCastle { .. } => write!(f, "O-O"),
            MoveKind::QueensideCastle { .. } => write!(f, "O-O-O"),
            MoveKind::Major | MoveKind::PawnJump if piece.is_pawn() => {
                write!(f, "{}", self.destination)
            }
            MoveKind::Major | MoveKind::PawnJump => write!(f, "{piece}{}", self.destination),
            MoveKind::Attack { .. } if piece.is_pawn() => {
                write!(f, "{}x{}", &from[..1], self.destination)
            }
            MoveKind::Attack { .. } => write!(f, "{piece}x{}", self.destination),
            MoveKind::EnPassant { .. } => write!(f, "{}x{} e.p.", &from[..1], self.destination),
            MoveKind::Promotion { attacked: None } => write!(f, "{}=Q", self.destination),
            MoveKind::Promotion { attacked: Some(_) } => {
                write!(f, "{}x{}=Q", &from[..1], self.destination)
            }
        }
    }
}
