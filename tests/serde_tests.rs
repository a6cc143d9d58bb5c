//! Serialization of the value types, enabled with the `serde` feature.
#![cfg(feature = "serde")]

use mailbox_chess::board::{Alliance, MoveStatus, Piece, PieceKind, Position};

#[test]
fn piece_survives_json() {
    let piece = Piece::with_first_move(
        PieceKind::Knight,
        Alliance::Black,
        "c6".parse().unwrap(),
        false,
    );
    let json = serde_json::to_string(&piece).unwrap();
    let back: Piece = serde_json::from_str(&json).unwrap();
    assert_eq!(back, piece);
    assert!(!back.is_first_move());
}

#[test]
fn position_serializes_as_rank_and_file() {
    let position: Position = "a8".parse().unwrap();
    let value = serde_json::to_value(position).unwrap();
    assert_eq!(value, serde_json::json!({ "rank": 0, "file": 0 }));
}

#[test]
fn position_out_of_range_is_rejected() {
    let err = serde_json::from_str::<Position>(r#"{"rank":9,"file":3}"#).unwrap_err();
    assert!(err.to_string().contains("Rank 9 out of bounds"));
    assert!(serde_json::from_str::<Position>(r#"{"rank":7,"file":8}"#).is_err());

    let piece = r#"{"kind":"King","alliance":"White","position":{"rank":9,"file":3},"first_move":true}"#;
    assert!(serde_json::from_str::<Piece>(piece).is_err());
}

#[test]
fn move_status_is_a_unit_variant() {
    let json = serde_json::to_string(&MoveStatus::InCheck).unwrap();
    assert_eq!(json, "\"InCheck\"");
    let back: MoveStatus = serde_json::from_str(&json).unwrap();
    assert_eq!(back, MoveStatus::InCheck);
}
