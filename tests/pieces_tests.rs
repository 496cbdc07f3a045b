//! Piece pattern tests

use blockfall::core::{Pattern, SequenceSource, Tetromino};
use blockfall::types::PieceKind;

#[test]
fn test_four_rotations_return_to_start() {
    for kind in PieceKind::ALL {
        let start = Pattern::canonical(kind);
        let mut p = start;
        for _ in 0..4 {
            p = p.rotated_cw();
        }
        assert_eq!(p, start, "{:?} after four turns", kind);
    }
}

#[test]
fn test_i_rotation_swaps_bounding_box() {
    let flat = Pattern::canonical(PieceKind::I);
    assert_eq!((flat.rows(), flat.cols()), (1, 4));

    let upright = flat.rotated_cw();
    assert_eq!((upright.rows(), upright.cols()), (4, 1));
    let minos: Vec<_> = upright.minos().collect();
    assert_eq!(minos, vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
}

#[test]
fn test_s_rotation() {
    // 011      10
    // 110  ->  11
    //          01
    let s = Pattern::canonical(PieceKind::S).rotated_cw();
    let expected = Pattern::from_rows(&[&[1, 0], &[1, 1], &[0, 1]]).expect("fits in 4x4");
    assert_eq!(s, expected);
}

#[test]
fn test_every_kind_has_four_cells() {
    for kind in PieceKind::ALL {
        assert_eq!(Pattern::canonical(kind).minos().count(), 4);
    }
}

#[test]
fn test_spawn_is_centered_on_row_zero() {
    let expected = [
        (PieceKind::I, 3),
        (PieceKind::J, 4),
        (PieceKind::L, 4),
        (PieceKind::O, 4),
        (PieceKind::S, 4),
        (PieceKind::T, 4),
        (PieceKind::Z, 4),
    ];
    for (kind, x) in expected {
        let piece = Tetromino::new(kind);
        assert_eq!((piece.x, piece.y), (x, 0), "{:?}", kind);
    }
}

#[test]
fn test_spawn_from_source() {
    let mut source = SequenceSource::new([PieceKind::Z, PieceKind::L]).expect("non-empty");
    assert_eq!(Tetromino::spawn_from(&mut source).kind, PieceKind::Z);
    assert_eq!(Tetromino::spawn_from(&mut source).kind, PieceKind::L);
    assert_eq!(Tetromino::spawn_from(&mut source).kind, PieceKind::Z);
}

#[test]
fn test_cells_are_absolute() {
    let piece = Tetromino::new(PieceKind::T).translated(1, 2);
    let cells: Vec<_> = piece.cells().collect();
    // T at origin (5, 2): top nub then the bar below it.
    assert_eq!(cells, vec![(6, 2), (5, 3), (6, 3), (7, 3)]);
}
