use super::super::{Board, Move, Piece};

impl Board {
    /// Walk each ray until the edge, an own piece, or the first enemy piece
    /// (which is captured).
    pub(crate) fn generate_slider_moves(
        &self,
        slider: &Piece,
        rays: &[(i8, i8)],
        moves: &mut Vec<Move>,
    ) {
        for &(rank_step, file_step) in rays {
            let mut current = slider.position();
            while let Some(destination) = current.offset(rank_step, file_step) {
                match self.piece_at(destination) {
                    None => moves.push(Move::major(*slider, destination)),
                    Some(target) => {
                        if target.alliance() != slider.alliance() {
                            moves.push(Move::attack(*slider, destination, target));
                        }
                        break;
                    }
                }
                current = destination;
            }
        }
    }
}
