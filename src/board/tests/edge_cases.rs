//! Edge case tests for special chess positions and moves.

use std::ptr;

use super::{board_from_fen, play, pos};
use crate::board::{Alliance, Board, Move, MoveKind, MoveStatus, PieceKind, NULL_MOVE};

#[test]
fn test_stalemate_position() {
    let board = board_from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    let black = board.current_player();
    assert!(!black.is_in_check());
    assert!(!black.is_in_checkmate());
    assert!(black.is_in_stalemate());
    assert!(!black.legal_moves().is_empty(), "moves exist but none is playable");
}

#[test]
fn test_fools_mate_is_checkmate() {
    let board = Board::initial();
    let board = play(&board, "f2", "f3");
    let board = play(&board, "e7", "e5");
    let board = play(&board, "g2", "g4");
    let board = play(&board, "d8", "h4");

    let white = board.current_player();
    assert_eq!(white.alliance(), Alliance::White);
    assert!(white.is_in_check());
    assert!(white.is_in_checkmate());
    assert!(!white.is_in_stalemate());
    assert!(!white.opponent().is_in_check());
}

#[test]
fn test_en_passant_removes_correct_pawn() {
    let board = board_from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 1");
    let mv = board.find_move(pos("e5"), pos("d6"));
    assert!(matches!(mv.kind(), MoveKind::EnPassant { .. }));
    assert_eq!(mv.to_string(), "exd6 e.p.");

    let next = play(&board, "e5", "d6");
    assert_eq!(next.piece_at(pos("d5")), None);
    assert_eq!(next.piece_at(pos("e5")), None);
    let pawn = next.piece_at(pos("d6")).unwrap();
    assert_eq!((pawn.kind(), pawn.alliance()), (PieceKind::Pawn, Alliance::White));
    assert_eq!(next.active_pieces(Alliance::Black).len(), 15);
}

#[test]
fn test_en_passant_expires_after_one_move() {
    let board = Board::initial();
    let board = play(&board, "e2", "e4");
    let board = play(&board, "a7", "a6");
    let board = play(&board, "e4", "e5");
    let board = play(&board, "d7", "d5");
    assert!(!board.find_move(pos("e5"), pos("d6")).is_null());

    let board = play(&board, "g1", "f3");
    let board = play(&board, "b8", "c6");
    assert!(board.find_move(pos("e5"), pos("d6")).is_null());
}

#[test]
fn test_en_passant_ignores_own_pawn() {
    // The en-passant pawn is White's own; White's e5 pawn may not take it
    let board = board_from_fen("4k3/8/8/3PP3/8/8/8/4K3 w - d6 0 1");
    assert!(board.find_move(pos("e5"), pos("d6")).is_null());
}

#[test]
fn test_kingside_castle_moves_king_and_rook() {
    let board = board_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let mv = board.find_move(pos("e1"), pos("g1"));
    assert!(matches!(mv.kind(), MoveKind::KingsideCastle { .. }));
    assert_eq!(mv.to_string(), "O-O");

    let next = play(&board, "e1", "g1");
    assert_eq!(next.piece_at(pos("g1")).map(|p| p.kind()), Some(PieceKind::King));
    assert_eq!(next.piece_at(pos("f1")).map(|p| p.kind()), Some(PieceKind::Rook));
    assert_eq!(next.piece_at(pos("e1")), None);
    assert_eq!(next.piece_at(pos("h1")), None);
    assert!(next.is_castled(Alliance::White));
    assert!(next.white_player().is_castled());
    assert!(!next.is_castled(Alliance::Black));

    let after = play(&next, "e8", "c8");
    assert_eq!(after.piece_at(pos("c8")).map(|p| p.kind()), Some(PieceKind::King));
    assert_eq!(after.piece_at(pos("d8")).map(|p| p.kind()), Some(PieceKind::Rook));
    assert!(after.is_castled(Alliance::White));
    assert!(after.is_castled(Alliance::Black));
}

#[test]
fn test_castled_flag_is_carried_forward() {
    let board = board_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let board = play(&board, "e1", "g1");
    let board = play(&board, "a8", "b8");
    assert!(board.is_castled(Alliance::White));
    let board = play(&board, "f1", "f2");
    let board = play(&board, "b8", "b7");
    assert!(board.is_castled(Alliance::White));
    assert!(!board.is_castled(Alliance::Black));
    assert_eq!(board.piece_at(pos("g1")).map(|p| p.kind()), Some(PieceKind::King));
}

#[test]
fn test_no_castle_through_attacked_square() {
    // Black rook on f2 covers f1
    let board = board_from_fen("4k3/8/8/8/8/8/5r2/R3K2R w KQ - 0 1");
    assert!(!board.white_player().is_in_check());
    assert!(board.find_move(pos("e1"), pos("g1")).is_null());
    assert!(board.find_move(pos("e1"), pos("c1")).is_castle());
}

#[test]
fn test_no_castle_out_of_check() {
    let board = board_from_fen("4k3/8/8/4r3/8/8/8/R3K2R w KQ - 0 1");
    let white = board.white_player();
    assert!(white.is_in_check());
    assert!(!white.legal_moves().iter().any(Move::is_castle));
}

#[test]
fn test_queenside_castle_allowed_with_b_file_attacked() {
    let board = board_from_fen("4k3/8/8/8/8/8/1r6/R3K2R w KQ - 0 1");
    let mv = board.find_move(pos("e1"), pos("c1"));
    assert!(matches!(mv.kind(), MoveKind::QueensideCastle { .. }));
    assert_eq!(mv.castle_rook().map(|(_, to)| to), Some(pos("d1")));
    assert!(!board.find_move(pos("e1"), pos("g1")).is_null());
}

#[test]
fn test_no_castle_with_pawn_covering_square() {
    // The black pawn on e2 attacks d1 and f1 without generating a move there
    let board = board_from_fen("4k3/8/8/8/8/8/4p3/R3K2R w KQ - 0 1");
    assert!(board.find_move(pos("e1"), pos("g1")).is_null());
    assert!(board.find_move(pos("e1"), pos("c1")).is_null());
}

#[test]
fn test_no_castle_after_rook_returns() {
    let board = board_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let board = play(&board, "h1", "h2");
    let board = play(&board, "a8", "a7");
    let board = play(&board, "h2", "h1");
    let board = play(&board, "a7", "a8");

    assert!(board.find_move(pos("e1"), pos("g1")).is_null());
    assert!(board.find_move(pos("e1"), pos("c1")).is_castle());
}

#[test]
fn test_promotion_to_queen() {
    let board = board_from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let pawn_moves: Vec<_> = board
        .white_player()
        .legal_moves()
        .iter()
        .filter(|mv| mv.current_position() == pos("a7"))
        .collect();
    assert_eq!(pawn_moves.len(), 1);
    assert!(pawn_moves[0].is_promotion());
    assert_eq!(pawn_moves[0].to_string(), "a8=Q");

    let next = play(&board, "a7", "a8");
    let queen = next.piece_at(pos("a8")).unwrap();
    assert_eq!((queen.kind(), queen.alliance()), (PieceKind::Queen, Alliance::White));
    assert!(!queen.is_first_move());
}

#[test]
fn test_promotion_by_capture() {
    let board = board_from_fen("1r6/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let mv = board.find_move(pos("a7"), pos("b8"));
    assert!(mv.is_promotion());
    assert_eq!(mv.attacked_piece().map(|p| p.kind()), Some(PieceKind::Rook));

    let next = play(&board, "a7", "b8");
    assert_eq!(next.piece_at(pos("b8")).map(|p| p.kind()), Some(PieceKind::Queen));
    assert_eq!(next.piece_at(pos("a7")), None);
    assert_eq!(next.active_pieces(Alliance::Black).len(), 1);
}

#[test]
fn test_black_promotes_on_first_rank() {
    let board = board_from_fen("k7/8/8/8/8/8/p7/2K5 b - - 0 1");
    let next = play(&board, "a2", "a1");
    let queen = next.piece_at(pos("a1")).unwrap();
    assert_eq!((queen.kind(), queen.alliance()), (PieceKind::Queen, Alliance::Black));
}

#[test]
fn test_pinned_piece_cannot_move() {
    let board = board_from_fen("4k3/4r3/8/8/8/8/4B3/4K3 w - - 0 1");
    let mv = board.find_move(pos("e2"), pos("d3"));
    assert!(!mv.is_null(), "the pinned move is still generated");

    let transition = board.current_player().make_move(mv);
    assert_eq!(transition.status(), MoveStatus::InCheck);
    assert!(ptr::eq(transition.board(), &board));
    assert!(transition.into_board().is_none());
}

#[test]
fn test_illegal_moves_are_rejected() {
    let board = Board::initial();
    let pawn = board.piece_at(pos("e2")).unwrap();
    let white = board.current_player();

    let transition = white.make_move(Move::major(pawn, pos("e5")));
    assert_eq!(transition.status(), MoveStatus::IllegalMove);
    assert!(ptr::eq(transition.board(), &board));

    assert_eq!(white.make_move(NULL_MOVE).status(), MoveStatus::IllegalMove);
}

#[test]
fn test_find_move_without_match_is_null() {
    let board = Board::initial();
    assert!(board.find_move(pos("e2"), pos("e5")).is_null());
    assert_eq!(board.find_move(pos("a1"), pos("a2")), NULL_MOVE);
}

#[test]
fn test_find_move_scans_both_players() {
    let board = Board::initial();
    let black_move = board.find_move(pos("e7"), pos("e5"));
    assert_eq!(black_move.moved_piece().alliance(), Alliance::Black);

    let transition = board.current_player().make_move(black_move);
    assert_eq!(transition.status(), MoveStatus::IllegalMove);
}

#[test]
fn test_double_check_allows_only_king_moves() {
    // Rook on e8 and knight on d3 both check the king on e1
    let board = board_from_fen("4r2k/8/8/8/Q7/3n4/8/4K3 w - - 0 1");
    let white = board.current_player();
    assert!(white.is_in_check());

    let playable: Vec<_> = white
        .legal_moves()
        .iter()
        .filter(|mv| white.make_move(**mv).status().is_done())
        .collect();
    assert!(!playable.is_empty());
    assert!(playable.iter().all(|mv| mv.moved_piece().kind().is_king()));
}

#[test]
fn test_pawn_jump_blocked() {
    let board = board_from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1");
    let from_e2: Vec<_> = board
        .white_player()
        .legal_moves()
        .iter()
        .filter(|mv| mv.current_position() == pos("e2"))
        .collect();
    assert_eq!(from_e2.len(), 1);
    assert_eq!(from_e2[0].destination(), pos("e3"));
}

#[test]
fn test_moved_pawn_cannot_jump() {
    let board = play(&Board::initial(), "e2", "e3");
    let board = play(&board, "a7", "a6");
    assert!(board.find_move(pos("e3"), pos("e5")).is_null());
    assert!(!board.find_move(pos("e3"), pos("e4")).is_null());
}

#[test]
fn test_board_diagram() {
    let diagram = Board::initial().to_string();
    let lines: Vec<_> = diagram.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "  r  n  b  q  k  b  n  r");
    assert_eq!(lines[1], "  p  p  p  p  p  p  p  p");
    assert_eq!(lines[4], "  -  -  -  -  -  -  -  -");
    assert_eq!(lines[7], "  R  N  B  Q  K  B  N  R");
}

#[test]
fn test_player_identity() {
    let board = Board::initial();
    let copy = board.clone();
    assert_eq!(board.current_player(), board.white_player());
    assert_ne!(board.white_player(), board.black_player());
    assert_ne!(board.white_player(), copy.white_player());
    assert_eq!(board.white_player().opponent(), board.black_player());
    assert_eq!(board.black_player().to_string(), "Black");
}

#[test]
fn test_king_tracked_per_player() {
    let board = Board::initial();
    assert_eq!(board.white_player().king().position(), pos("e1"));
    assert_eq!(board.black_player().king().position(), pos("e8"));

    let next = play(&play(&board, "e2", "e4"), "e7", "e5");
    let next = play(&next, "e1", "e2");
    assert_eq!(next.white_player().king().position(), pos("e2"));
}
