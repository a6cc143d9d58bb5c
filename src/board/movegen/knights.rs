use super::super::{Board, Move, Piece};
use super::KNIGHT_OFFSETS;

impl Board {
    pub(crate) fn generate_knight_moves(&self, knight: &Piece, moves: &mut Vec<Move>) {
        self.generate_step_moves(knight, &KNIGHT_OFFSETS, moves);
    }
}
