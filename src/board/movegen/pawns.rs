use super::super::{Board, Move, Piece, Position};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, pawn: &Piece, moves: &mut Vec<Move>) {
        let alliance = pawn.alliance();
        let forward = -alliance.direction();
        let from = pawn.position();
        let promotion_rank = alliance.promotion_rank();

        let Some(one_step) = from.offset(forward, 0) else {
            return;
        };

        if !self.is_occupied(one_step) {
            push_pawn_move(Move::major(*pawn, one_step), promotion_rank, moves);

            if pawn.is_first_move() && from.rank() == alliance.pawn_start_rank() {
                if let Some(two_step) = from.offset(2 * forward, 0) {
                    if !self.is_occupied(two_step) {
                        moves.push(Move::pawn_jump(*pawn, two_step));
                    }
                }
            }
        }

        for file_step in [-1, 1] {
            let Some(destination) = from.offset(forward, file_step) else {
                continue;
            };
            match self.piece_at(destination) {
                Some(target) if target.alliance() != alliance => {
                    let capture = Move::attack(*pawn, destination, target);
                    push_pawn_move(capture, promotion_rank, moves);
                }
                Some(_) => {}
                None => {
                    if let Some(victim) = self.en_passant_victim(pawn, destination) {
                        moves.push(Move::en_passant(*pawn, destination, victim));
                    }
                }
            }
        }
    }

    /// The en-passant pawn, if it stands beside `pawn` on the file of
    /// `destination` and belongs to the other alliance.
    fn en_passant_victim(&self, pawn: &Piece, destination: Position) -> Option<Piece> {
        let victim = self.en_passant_pawn()?;
        let beside = Position::at(pawn.position().rank(), destination.file());
        (victim.alliance() != pawn.alliance() && victim.position() == beside).then_some(victim)
    }
}

fn push_pawn_move(mv: Move, promotion_rank: u8, moves: &mut Vec<Move>) {
    if mv.destination().rank() == promotion_rank {
        moves.push(Move::promotion(mv));
    } else {
        moves.push(mv);
    }
}
