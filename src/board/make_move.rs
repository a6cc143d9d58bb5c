//! Move execution.
//!
//! Executing a move never touches the source board: the resulting position is
//! assembled with a fresh [`Builder`] from the pieces that take no part in the
//! move, plus the moved pieces on their destinations.

use super::{Alliance, Board, Builder, Move, MoveError, MoveKind, Piece, PieceKind};

impl Move {
    /// The board that results from playing this move on `board`.
    ///
    /// No legality check is made; see [`Player::make_move`](super::Player::make_move).
    ///
    /// # Panics
    /// Panics when called on the null move; use [`Move::try_execute`] when the
    /// move may be null.
    #[must_use]
    pub fn execute(&self, board: &Board) -> Board {
        match self.try_execute(board) {
            Ok(next) => next,
            Err(err) => panic!("{err}"),
        }
    }

    /// The board that results from playing this move, or an error for the
    /// null move.
    pub fn try_execute(&self, board: &Board) -> Result<Board, MoveError> {
        let builder = self.layout(board)?;
        let mover = self.moved_piece().alliance();
        Ok(builder.set_move_maker(mover.opponent()).build())
    }

    /// Piece placement and flags after the move, side to move not yet set.
    fn layout(&self, board: &Board) -> Result<Builder, MoveError> {
        let moved = self.moved_piece();
        match self.kind() {
            MoveKind::Null => return Err(MoveError::NullMove),
            MoveKind::Promotion { .. } => {
                let queen = Piece::with_first_move(
                    PieceKind::Queen,
                    moved.alliance(),
                    self.destination(),
                    false,
                );
                return Ok(self.promotion_base().layout(board)?.set_piece(queen));
            }
            _ => {}
        }

        let castle_rook = self.castle_rook().map(|(rook, _)| rook);
        let captured = self.attacked_piece();
        let takes_part = |piece: &Piece| {
            *piece == moved || Some(*piece) == castle_rook || Some(*piece) == captured
        };

        let bystanders = Alliance::BOTH
            .iter()
            .flat_map(|&alliance| board.active_pieces(alliance))
            .copied()
            .filter(|piece| !takes_part(piece));

        let mut builder = Builder::new()
            .set_pieces(bystanders)
            .set_piece(moved.moved_copy(self));
        for alliance in Alliance::BOTH {
            builder = builder.set_castled(alliance, board.is_castled(alliance));
        }

        Ok(match self.castle_rook() {
            Some((rook, rook_destination)) => builder
                .set_piece(rook.moved_to(rook_destination))
                .set_castled(moved.alliance(), true),
            None if matches!(self.kind(), MoveKind::PawnJump) => {
                builder.set_en_passant_pawn(Some(moved.moved_copy(self)))
            }
            None => builder,
        })
    }
}
