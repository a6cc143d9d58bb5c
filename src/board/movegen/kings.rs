use super::super::{Alliance, Board, Move, Piece, PieceKind, Position};
use super::KING_OFFSETS;

const KINGSIDE_ROOK_FILE: u8 = 7;
const QUEENSIDE_ROOK_FILE: u8 = 0;
const KING_FILE: u8 = 4;

impl Board {
    pub(crate) fn generate_king_moves(&self, king: &Piece, moves: &mut Vec<Move>) {
        self.generate_step_moves(king, &KING_OFFSETS, moves);
    }

    /// Castles available to `king`'s alliance.
    ///
    /// The king and the castling rook must both be unmoved and in their
    /// original corners, the squares between them empty, and the squares the
    /// king starts on, crosses and lands on not attacked by `opponent_moves`.
    pub(crate) fn calculate_castles(
        &self,
        king: &Piece,
        in_check: bool,
        opponent_moves: &[Move],
    ) -> Vec<Move> {
        let mut castles = Vec::new();
        let alliance = king.alliance();
        let rank = alliance.back_rank();

        let home = Position::at(rank, KING_FILE);
        let safe = |file: u8| {
            !threatened_by(self, Position::at(rank, file), alliance, opponent_moves)
        };

        if in_check || !king.is_first_move() || king.position() != home {
            return castles;
        }

        if let Some(rook) = self.castling_rook(alliance, Position::at(rank, KINGSIDE_ROOK_FILE)) {
            if self.files_empty(rank, &[5, 6]) && [4, 5, 6].into_iter().all(safe) {
                castles.push(Move::kingside_castle(
                    *king,
                    Position::at(rank, 6),
                    rook,
                    Position::at(rank, 5),
                ));
            }
        }

        if let Some(rook) = self.castling_rook(alliance, Position::at(rank, QUEENSIDE_ROOK_FILE)) {
            if self.files_empty(rank, &[1, 2, 3]) && [4, 3, 2].into_iter().all(safe) {
                castles.push(Move::queenside_castle(
                    *king,
                    Position::at(rank, 2),
                    rook,
                    Position::at(rank, 3),
                ));
            }
        }

        castles
    }

    fn castling_rook(&self, alliance: Alliance, corner: Position) -> Option<Piece> {
        self.piece_at(corner).filter(|piece| {
            piece.kind() == PieceKind::Rook && piece.alliance() == alliance && piece.is_first_move()
        })
    }

    fn files_empty(&self, rank: u8, files: &[u8]) -> bool {
        files
            .iter()
            .all(|&file| !self.is_occupied(Position::at(rank, file)))
    }
}

/// Whether the other alliance attacks `position`.
///
/// Pawn advances in `opponent_moves` never capture and are ignored; pawn
/// diagonals are checked separately because a pawn only generates a capture
/// when a piece is already standing there.
pub(crate) fn threatened_by(
    board: &Board,
    position: Position,
    alliance: Alliance,
    opponent_moves: &[Move],
) -> bool {
    let attacked_by_move = opponent_moves
        .iter()
        .any(|mv| mv.destination() == position && !mv.is_pawn_advance());
    if attacked_by_move {
        return true;
    }

    let enemy = alliance.opponent();
    let forward = -enemy.direction();
    board
        .active_pieces(enemy)
        .iter()
        .filter(|piece| piece.kind().is_pawn())
        .any(|pawn| {
            [-1, 1]
                .into_iter()
                .any(|file_step| pawn.position().offset(forward, file_step) == Some(position))
        })
}
