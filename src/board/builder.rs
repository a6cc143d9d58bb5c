//! Fluent builder for constructing board snapshots.
//!
//! A board is assembled from individual pieces, the alliance to move, the
//! optional en-passant pawn and the castled flags. Building validates the
//! position (exactly one king per side) and computes every player's legal moves.
//!
//! # Example
//! ```
//! use mailbox_chess::board::{Alliance, Builder, Piece, PieceKind, Position};
//!
//! let board = Builder::new()
//!     .set_piece(Piece::new(PieceKind::King, Alliance::Black, Position::at(0, 4)))
//!     .set_piece(Piece::new(PieceKind::King, Alliance::White, Position::at(7, 4)))
//!     .set_piece(Piece::new(PieceKind::Pawn, Alliance::White, Position::at(6, 0)))
//!     .set_move_maker(Alliance::White)
//!     .build();
//! assert_eq!(board.current_player().alliance(), Alliance::White);
//! ```

use super::{Alliance, Board, BoardError, Piece, PieceKind, Position, NUM_SQUARES};

/// A fluent builder for constructing [`Board`] snapshots.
#[derive(Clone, Debug)]
pub struct Builder {
    config: [Option<Piece>; NUM_SQUARES],
    move_maker: Alliance,
    en_passant_pawn: Option<Piece>,
    castled: [bool; 2],
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    /// Create an empty builder with White to move.
    #[must_use]
    pub fn new() -> Self {
        Builder {
            config: [None; NUM_SQUARES],
            move_maker: Alliance::White,
            en_passant_pawn: None,
            castled: [false; 2],
        }
    }

    /// Create a builder holding the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut builder = Self::new();
        for alliance in Alliance::BOTH {
            for (file, &kind) in BACK_RANK.iter().enumerate() {
                let position = Position::at(alliance.back_rank(), file as u8);
                builder = builder.set_piece(Piece::new(kind, alliance, position));
            }
            for file in 0..8 {
                let position = Position::at(alliance.pawn_start_rank(), file);
                builder = builder.set_piece(Piece::new(PieceKind::Pawn, alliance, position));
            }
        }
        builder.set_move_maker(Alliance::White)
    }

    /// Place a piece on its own position, replacing whatever stood there.
    #[must_use]
    pub fn set_piece(mut self, piece: Piece) -> Self {
        self.config[piece.position().index()] = Some(piece);
        self
    }

    /// Place every piece of an iterator.
    #[must_use]
    pub fn set_pieces<I>(mut self, pieces: I) -> Self
    where
        I: IntoIterator<Item = Piece>,
    {
        for piece in pieces {
            self.config[piece.position().index()] = Some(piece);
        }
        self
    }

    /// Empty the square at `position`.
    #[must_use]
    pub fn clear(mut self, position: Position) -> Self {
        self.config[position.index()] = None;
        self
    }

    /// Set the alliance whose turn it is.
    #[must_use]
    pub const fn set_move_maker(mut self, alliance: Alliance) -> Self {
        self.move_maker = alliance;
        self
    }

    /// Set (or clear) the pawn that may be captured en passant.
    #[must_use]
    pub const fn set_en_passant_pawn(mut self, pawn: Option<Piece>) -> Self {
        self.en_passant_pawn = pawn;
        self
    }

    /// Record whether `alliance` has already castled.
    #[must_use]
    pub const fn set_castled(mut self, alliance: Alliance, castled: bool) -> Self {
        self.castled[alliance.index()] = castled;
        self
    }

    /// The piece currently placed at `position`, if any
    #[must_use]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.config[position.index()]
    }

    /// Build the board, failing unless each alliance has exactly one king.
    pub fn try_build(self) -> Result<Board, BoardError> {
        Board::from_parts(
            self.config,
            self.move_maker,
            self.en_passant_pawn,
            self.castled,
        )
    }

    /// Build the board.
    ///
    /// # Panics
    /// Panics unless each alliance has exactly one king; use
    /// [`Builder::try_build`] for positions that are not known to be valid.
    #[must_use]
    pub fn build(self) -> Board {
        match self.try_build() {
            Ok(board) => board,
            Err(err) => panic!("{err}"),
        }
    }
}
