//! Grid tests - cell storage, line clearing, garbage insertion

use duel_tetris::core::Grid;
use duel_tetris::types::{EMPTY_CELL, GARBAGE_CELL};

fn fill_row(grid: &mut Grid, y: usize) {
    for x in 0..grid.width() {
        grid.set(x as i32, y as i32, 1);
    }
}

#[test]
fn test_new_grid_dimensions() {
    let grid = Grid::new(10, 20);
    assert_eq!(grid.width(), 10);
    assert_eq!(grid.height(), 20);
    assert_eq!(grid.cells().len(), 200);

    let custom = Grid::new(12, 25);
    assert_eq!(custom.width(), 12);
    assert_eq!(custom.height(), 25);
    assert_eq!(custom.cells().len(), 300);
}

#[test]
fn test_out_of_bounds_access() {
    let mut grid = Grid::new(10, 20);
    assert_eq!(grid.cell(-1, 0), None);
    assert_eq!(grid.cell(0, -1), None);
    assert_eq!(grid.cell(10, 0), None);
    assert_eq!(grid.cell(0, 20), None);
    assert!(!grid.set(-1, 0, 1));
    assert!(!grid.set(0, 20, 1));
}

#[test]
fn test_full_row_detection() {
    let mut grid = Grid::new(10, 20);
    assert!(!grid.is_row_full(19));

    fill_row(&mut grid, 19);
    assert!(grid.is_row_full(19));

    // One missing cell breaks completeness
    grid.set(6, 19, EMPTY_CELL);
    assert!(!grid.is_row_full(19));
}

#[test]
fn test_clearing_bottom_rows_counts_and_empties_them() {
    for k in 1..=4 {
        let mut grid = Grid::new(10, 20);
        for y in (20 - k)..20 {
            fill_row(&mut grid, y);
        }
        assert_eq!(grid.clear_full_rows(), k);
        for y in (20 - k)..20 {
            for x in 0..10 {
                assert_eq!(grid.cell(x as i32, y as i32), Some(EMPTY_CELL));
            }
        }
    }
}

#[test]
fn test_rows_above_a_clear_shift_down_in_order() {
    let mut grid = Grid::new(10, 20);
    // Two marker rows above a full row
    grid.set(0, 16, 3);
    grid.set(0, 17, 4);
    fill_row(&mut grid, 18);
    grid.set(0, 19, 5);

    assert_eq!(grid.clear_full_rows(), 1);

    assert_eq!(grid.cell(0, 17), Some(3));
    assert_eq!(grid.cell(0, 18), Some(4));
    assert_eq!(grid.cell(0, 19), Some(5));
}

#[test]
fn test_partial_row_is_never_removed() {
    let mut grid = Grid::new(10, 20);
    fill_row(&mut grid, 19);
    grid.set(0, 19, EMPTY_CELL);
    assert_eq!(grid.clear_full_rows(), 0);
    assert_eq!(grid.cell(1, 19), Some(1));
}

#[test]
fn test_garbage_row_layout() {
    let mut grid = Grid::new(10, 20);
    grid.push_garbage_row(4);

    let bottom = grid.row(19);
    for (x, &cell) in bottom.iter().enumerate() {
        let expected = if x == 4 { EMPTY_CELL } else { GARBAGE_CELL };
        assert_eq!(cell, expected);
    }
    // Grid size is unchanged: the top row was dropped
    assert_eq!(grid.cells().len(), 200);
}

#[test]
fn test_garbage_pushes_existing_rows_up() {
    let mut grid = Grid::new(10, 20);
    grid.set(2, 19, 6);
    grid.push_garbage_row(0);
    assert_eq!(grid.cell(2, 18), Some(6));
    grid.push_garbage_row(1);
    assert_eq!(grid.cell(2, 17), Some(6));
}
