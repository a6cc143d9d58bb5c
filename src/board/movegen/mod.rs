//! Move generation on the square-centric board.
//!
//! Each piece produces its pseudo-legal moves (moves that may still leave the
//! own king attacked) by walking offset tables written from White's point of
//! view; pawn offsets are flipped for Black via [`Alliance::direction`].
//! Castles are added per player once both alliances' moves are known.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Alliance, Board, Move, Piece, PieceKind, Position};

/// One-square steps in every direction (rank offset, file offset)
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
];

pub(crate) const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

impl Piece {
    /// Pseudo-legal moves of this piece on `board`.
    ///
    /// Castles are not included; they are part of the owning player's moves.
    #[must_use]
    pub fn legal_moves(&self, board: &Board) -> Vec<Move> {
        let mut moves = Vec::new();
        board.piece_moves(self, &mut moves);
        moves
    }
}

impl Board {
    fn piece_moves(&self, piece: &Piece, moves: &mut Vec<Move>) {
        match piece.kind() {
            PieceKind::Pawn => self.generate_pawn_moves(piece, moves),
            PieceKind::Knight => self.generate_knight_moves(piece, moves),
            PieceKind::Bishop => self.generate_slider_moves(piece, &DIAGONALS, moves),
            PieceKind::Rook => self.generate_slider_moves(piece, &ORTHOGONALS, moves),
            PieceKind::Queen => {
                self.generate_slider_moves(piece, &DIAGONALS, moves);
                self.generate_slider_moves(piece, &ORTHOGONALS, moves);
            }
            PieceKind::King => self.generate_king_moves(piece, moves),
        }
    }

    /// Concatenated pseudo-legal moves of every piece of `alliance`
    pub(crate) fn calculate_legal_moves(&self, alliance: Alliance) -> Vec<Move> {
        let mut moves = Vec::with_capacity(48);
        for piece in self.active_pieces(alliance) {
            self.piece_moves(piece, &mut moves);
        }
        moves
    }

    /// A quiet move to an empty square or a capture of an enemy piece;
    /// nothing if an own piece stands on `destination`.
    fn step_to(&self, piece: &Piece, destination: Position) -> Option<Move> {
        match self.piece_at(destination) {
            None => Some(Move::major(*piece, destination)),
            Some(target) if target.alliance() != piece.alliance() => {
                Some(Move::attack(*piece, destination, target))
            }
            Some(_) => None,
        }
    }

    fn generate_step_moves(&self, piece: &Piece, offsets: &[(i8, i8)], moves: &mut Vec<Move>) {
        let from = piece.position();
        moves.extend(
            offsets
                .iter()
                .filter_map(|&(rank, file)| from.offset(rank, file))
                .filter_map(|destination| self.step_to(piece, destination)),
        );
    }
}
