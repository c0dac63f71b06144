//! Piece tests - shape tables and the piece value type

use duel_tetris::core::{rotation_states, Piece};
use duel_tetris::types::PieceKind;

#[test]
fn test_every_rotation_state_occupies_four_cells() {
    for kind in PieceKind::all() {
        let states = rotation_states(kind);
        assert!(!states.is_empty());
        for rotation in 0..states.len() {
            let piece = Piece {
                kind,
                rotation,
                color: 1,
                x: 0,
                y: 0,
            };
            assert_eq!(piece.cells().len(), 4, "{:?} rotation {}", kind, rotation);
        }
    }
}

#[test]
fn test_cells_stay_within_the_local_grid() {
    for kind in PieceKind::all() {
        for rotation in 0..rotation_states(kind).len() {
            let piece = Piece {
                kind,
                rotation,
                color: 1,
                x: 0,
                y: 0,
            };
            for (x, y) in piece.cells() {
                assert!((0..4).contains(&x), "{:?} col {} outside 4x4", kind, x);
                assert!((0..4).contains(&y), "{:?} row {} outside 4x4", kind, y);
            }
        }
    }
}

#[test]
fn test_distinct_rotation_counts_per_kind() {
    let expected = [
        (PieceKind::I, 2),
        (PieceKind::Z, 2),
        (PieceKind::S, 2),
        (PieceKind::T, 4),
        (PieceKind::J, 4),
        (PieceKind::L, 4),
        (PieceKind::O, 1),
    ];
    for (kind, count) in expected {
        assert_eq!(rotation_states(kind).len(), count, "{:?}", kind);
    }
}

#[test]
fn test_rotation_is_modular() {
    for kind in PieceKind::all() {
        let count = rotation_states(kind).len();
        let mut piece = Piece::new(kind, 1, 3, 0);
        for _ in 0..count {
            piece.rotate_cw();
        }
        assert_eq!(piece.rotation, 0, "{:?} full cw cycle", kind);
        for _ in 0..count {
            piece.rotate_ccw();
        }
        assert_eq!(piece.rotation, 0, "{:?} full ccw cycle", kind);
    }
}

#[test]
fn test_translate_offsets_every_cell() {
    let mut piece = Piece::new(PieceKind::T, 2, 3, 0);
    let before = piece.cells();
    piece.translate(2, 5);
    let after = piece.cells();
    for (b, a) in before.iter().zip(after.iter()) {
        assert_eq!((b.0 + 2, b.1 + 5), *a);
    }
}

#[test]
fn test_copy_semantics_protect_the_original() {
    let original = Piece::new(PieceKind::S, 4, 3, 0);
    let mut trial = original;
    trial.translate(-1, 3);
    trial.rotate_ccw();
    assert_eq!(original, Piece::new(PieceKind::S, 4, 3, 0));
}

#[test]
fn test_o_piece_shape_is_rotation_invariant() {
    let mut piece = Piece::new(PieceKind::O, 3, 4, 2);
    let before = piece.cells();
    piece.rotate_cw();
    assert_eq!(piece.cells(), before);
    piece.rotate_ccw();
    assert_eq!(piece.cells(), before);
}
