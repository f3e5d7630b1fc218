//! Playfield tests - grid access, placement and line clearing

use tap_tetris::core::{ActivePiece, Playfield};
use tap_tetris::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

fn piece_at(kind: PieceKind, row: i8, col: i8) -> ActivePiece {
    ActivePiece {
        kind,
        rotation: Rotation::North,
        row,
        col,
    }
}

fn fill_row(field: &mut Playfield, row: i8) {
    for col in 0..BOARD_WIDTH as i8 {
        field.set(row, col, Some(PieceKind::T));
    }
}

#[test]
fn test_playfield_new_empty() {
    let field = Playfield::new();
    assert_eq!(field.width(), BOARD_WIDTH);
    assert_eq!(field.height(), BOARD_HEIGHT);

    for row in 0..BOARD_HEIGHT as i8 {
        for col in 0..BOARD_WIDTH as i8 {
            assert_eq!(field.get(row, col), Some(None), "({row}, {col}) should be empty");
        }
    }
    assert!(field.is_empty());
}

#[test]
fn test_playfield_get_out_of_bounds() {
    let field = Playfield::new();

    assert_eq!(field.get(-1, 0), None);
    assert_eq!(field.get(0, -1), None);
    assert_eq!(field.get(BOARD_HEIGHT as i8, 0), None);
    assert_eq!(field.get(0, BOARD_WIDTH as i8), None);
    assert!(!field.is_occupied(-1, 0));
}

#[test]
fn test_playfield_set_and_get() {
    let mut field = Playfield::new();

    assert!(field.set(10, 5, Some(PieceKind::T)));
    assert_eq!(field.get(10, 5), Some(Some(PieceKind::T)));
    assert!(field.is_occupied(10, 5));

    assert!(field.set(10, 5, None));
    assert_eq!(field.get(10, 5), Some(None));

    assert!(!field.set(-1, 0, Some(PieceKind::T)));
    assert!(!field.set(0, BOARD_WIDTH as i8, Some(PieceKind::T)));
}

#[test]
fn test_row_accessor() {
    let mut field = Playfield::new();
    field.set(3, 0, Some(PieceKind::J));
    let row = field.row(3).expect("row 3");
    assert_eq!(row.len(), BOARD_WIDTH as usize);
    assert_eq!(row[0], Some(PieceKind::J));
    assert!(field.row(BOARD_HEIGHT as usize).is_none());
}

#[test]
fn test_bottom_row_cleared_by_four_pieces() {
    let mut field = Playfield::new();

    // I across cols 0-3, I across 4-7, and two O's standing on cols 8-11.
    field.place(&piece_at(PieceKind::I, 17, 1).cells(), PieceKind::I);
    field.place(&piece_at(PieceKind::I, 17, 5).cells(), PieceKind::I);
    field.place(&piece_at(PieceKind::O, 16, 8).cells(), PieceKind::O);
    field.place(&piece_at(PieceKind::O, 16, 10).cells(), PieceKind::O);
    field.set(5, 2, Some(PieceKind::Z));
    assert!(field.is_row_full(17));

    assert_eq!(field.clear_lines(), 1);

    // Everything above moved down exactly one row.
    for col in 0..BOARD_WIDTH as i8 {
        let expected = if col >= 8 { Some(PieceKind::O) } else { None };
        assert_eq!(field.get(17, col), Some(expected), "col {col}");
    }
    assert_eq!(field.get(6, 2), Some(Some(PieceKind::Z)));
    assert_eq!(field.get(5, 2), Some(None));
    assert!(field.row(0).expect("row 0").iter().all(Option::is_none));
}

#[test]
fn test_bottom_row_of_three_i_pieces_leaves_field_empty() {
    let mut field = Playfield::new();
    for col in [1, 5, 9] {
        field.place(&piece_at(PieceKind::I, 17, col).cells(), PieceKind::I);
    }
    assert_eq!(field.clear_lines(), 1);
    assert!(field.is_empty());
}

#[test]
fn test_clear_is_idempotent() {
    let mut field = Playfield::new();
    fill_row(&mut field, 17);
    fill_row(&mut field, 12);
    field.set(16, 4, Some(PieceKind::S));

    assert_eq!(field.clear_lines(), 2);
    let after = field.clone();

    assert_eq!(field.clear_lines(), 0);
    assert_eq!(field, after);
}

#[test]
fn test_clear_keeps_relative_order() {
    let mut field = Playfield::new();
    field.set(13, 0, Some(PieceKind::I));
    field.set(14, 0, Some(PieceKind::O));
    fill_row(&mut field, 15);
    field.set(16, 0, Some(PieceKind::T));
    fill_row(&mut field, 17);

    let cleared = field.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[17, 15]);

    assert_eq!(field.get(17, 0), Some(Some(PieceKind::T)));
    assert_eq!(field.get(16, 0), Some(Some(PieceKind::O)));
    assert_eq!(field.get(15, 0), Some(Some(PieceKind::I)));
    assert!(field.row(0).expect("row 0").iter().all(Option::is_none));
    assert!(field.row(1).expect("row 1").iter().all(Option::is_none));
}

#[test]
fn test_clear_whole_field() {
    let mut field = Playfield::new();
    for row in 0..BOARD_HEIGHT as i8 {
        fill_row(&mut field, row);
    }
    assert_eq!(field.clear_lines(), BOARD_HEIGHT as usize);
    assert!(field.is_empty());
}

#[test]
fn test_playfield_clear() {
    let mut field = Playfield::new();
    field.set(0, 0, Some(PieceKind::L));
    field.clear();
    assert!(field.is_empty());
}
