//! Executing validated moves.

use crate::board::{Board, BoardBuilder, Color, Piece, PieceKind, Square};

#[test]
fn test_round_trip_piece_at() {
    let mut board = Board::new();
    let knight = board.piece_at(Square(0, 6)).unwrap();
    let mv = board
        .apply_move(Square(0, 6), Square(2, 5), Color::White)
        .unwrap();
    assert_eq!(mv.piece, knight);
    assert_eq!(board.piece_at(Square(2, 5)), Some(knight));
    assert_eq!(board.piece_at(Square(0, 6)), None);
    assert_eq!(board.piece_count(), 32);
}

#[test]
fn test_capture_removes_one_piece() {
    let mut board = BoardBuilder::new()
        .piece(Square(3, 3), Color::White, PieceKind::Bishop)
        .piece(Square(6, 6), Color::Black, PieceKind::Rook)
        .piece(Square(7, 7), Color::Black, PieceKind::Queen)
        .build();
    let mv = board
        .apply_move(Square(3, 3), Square(6, 6), Color::White)
        .unwrap();
    assert_eq!(mv.captured, Some(Piece::new(Color::Black, PieceKind::Rook)));
    assert_eq!(board.piece_count(), 2);
    assert_eq!(board.piece_count_for(Color::Black), 1);
}

#[test]
fn test_short_game_sequence() {
    let mut board = Board::new();
    let script = [
        (Square(1, 4), Square(3, 4), Color::White),
        (Square(6, 3), Square(4, 3), Color::Black),
        (Square(3, 4), Square(4, 3), Color::White),
        (Square(7, 3), Square(4, 3), Color::Black),
    ];
    for (from, to, color) in script {
        board.apply_move(from, to, color).unwrap();
    }
    assert_eq!(board.piece_count(), 30);
    assert_eq!(
        board.piece_at(Square(4, 3)),
        Some(Piece::new(Color::Black, PieceKind::Queen))
    );
}
