//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generation counts against known positions
//! - `edge_cases.rs` - Special moves, check, checkmate and stalemate
//! - `search.rs` - Minimax move selection
//! - `proptest.rs` - Property-based tests over random games

mod edge_cases;

use crate::board::{Alliance, Board, Builder, Piece, PieceKind, Position};

/// Build a board from the first four fields of a FEN record (placement,
/// side to move, castling, en-passant target).
///
/// Castling rights become first-move flags on the king and rooks, and pawns
/// are unmoved only on their start rank. Minor pieces and queens are marked
/// unmoved, as on the initial board.
pub(crate) fn board_from_fen(fen: &str) -> Board {
    let mut fields = fen.split_whitespace();
    let placement = fields.next().unwrap();
    let mover = match fields.next().unwrap_or("w") {
        "b" => Alliance::Black,
        _ => Alliance::White,
    };
    let castling = fields.next().unwrap_or("-");
    let en_passant = fields.next().unwrap_or("-");

    let mut builder = Builder::new().set_move_maker(mover);
    for (rank, row) in placement.split('/').enumerate() {
        let mut file = 0u8;
        for c in row.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip as u8;
                continue;
            }
            let kind = PieceKind::from_letter(c).unwrap();
            let alliance = if c.is_ascii_uppercase() {
                Alliance::White
            } else {
                Alliance::Black
            };
            let position = Position::at(rank as u8, file);
            let first_move = match kind {
                PieceKind::Pawn => position.rank() == alliance.pawn_start_rank(),
                PieceKind::King => castling_corners(castling, alliance).next().is_some(),
                PieceKind::Rook => castling_corners(castling, alliance).any(|p| p == position),
                _ => true,
            };
            let piece = Piece::with_first_move(kind, alliance, position, first_move);
            builder = builder.set_piece(piece);
            file += 1;
        }
    }

    if en_passant != "-" {
        let target: Position = en_passant.parse().unwrap();
        let pawn_at = target.offset(mover.direction(), 0).unwrap();
        let pawn = builder.piece_at(pawn_at);
        builder = builder.set_en_passant_pawn(pawn);
    }

    builder.build()
}

/// Rook corners named by a FEN castling field for one alliance
fn castling_corners(castling: &str, alliance: Alliance) -> impl Iterator<Item = Position> + '_ {
    castling.chars().filter_map(move |right| {
        let (owner, file) = match right {
            'K' => (Alliance::White, 7),
            'Q' => (Alliance::White, 0),
            'k' => (Alliance::Black, 7),
            'q' => (Alliance::Black, 0),
            _ => return None,
        };
        (owner == alliance).then(|| Position::at(owner.back_rank(), file))
    })
}

/// Number of move sequences of length `depth` that are actually playable.
pub(crate) fn perft(board: &Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }
    let player = board.current_player();
    player
        .legal_moves()
        .iter()
        .map(|mv| {
            let transition = player.make_move(*mv);
            match transition.status().is_done() {
                false => 0,
                true if depth == 1 => 1,
                true => perft(transition.board(), depth - 1),
            }
        })
        .sum()
}

pub(crate) fn pos(name: &str) -> Position {
    name.parse().unwrap()
}

/// Play `from`-`to` for the side to move, panicking unless it is playable.
pub(crate) fn play(board: &Board, from: &str, to: &str) -> Board {
    let mv = board.find_move(pos(from), pos(to));
    assert!(!mv.is_null(), "no move {from}-{to} on\n{board}");
    board
        .current_player()
        .make_move(mv)
        .into_board()
        .unwrap_or_else(|| panic!("{from}-{to} is not playable on\n{board}"))
}
