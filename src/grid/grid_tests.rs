use crate::grid::Grid;

#[test]
fn test_grid_allocation() {
    let grid = Grid::new(4);
    assert_eq!(grid.n(), 4);
    assert_eq!(grid.width(), 6);
    assert_eq!(grid.len(), 36);
    assert!(grid.as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn test_ix_is_row_major() {
    let grid = Grid::new(4);
    assert_eq!(grid.ix(0, 0), 0);
    assert_eq!(grid.ix(5, 0), 5);
    assert_eq!(grid.ix(0, 1), 6);
    assert_eq!(grid.ix(2, 3), 2 + 6 * 3);
    assert_eq!(grid.ix(5, 5), 35);
}

#[test]
#[should_panic]
fn test_ix_rejects_out_of_range() {
    let grid = Grid::new(4);
    grid.ix(6, 0);
}

#[test]
fn test_ix_clamped_matches_strict_in_range() {
    let grid = Grid::new(4);
    for y in 0..6 {
        for x in 0..6 {
            assert_eq!(grid.ix_clamped(x as isize, y as isize), grid.ix(x, y));
        }
    }
}

#[test]
fn test_ix_clamped_pins_each_axis_independently() {
    let grid = Grid::new(4);
    assert_eq!(grid.ix_clamped(-3, 2), grid.ix(0, 2));
    assert_eq!(grid.ix_clamped(9, 2), grid.ix(5, 2));
    assert_eq!(grid.ix_clamped(2, -1), grid.ix(2, 0));
    assert_eq!(grid.ix_clamped(2, 100), grid.ix(2, 5));
    assert_eq!(grid.ix_clamped(-50, 50), grid.ix(0, 5));
}

#[test]
fn test_get_set_roundtrip() {
    let mut grid = Grid::new(3);
    grid.set(1, 2, -4.5);
    assert_eq!(grid.get(1, 2), -4.5);
    assert_eq!(grid[grid.ix(1, 2)], -4.5);
    assert_eq!(grid.get_clamped(1, 2), -4.5);
}

#[test]
fn test_get_clamped_reads_border_for_outside_coords() {
    let mut grid = Grid::new(3);
    grid.set(0, 2, 7.0);
    grid.set(4, 4, 3.0);
    assert_eq!(grid.get_clamped(-10, 2), 7.0);
    assert_eq!(grid.get_clamped(12, 9), 3.0);
}

#[test]
fn test_fill_touches_every_cell() {
    let mut grid = Grid::new(2);
    grid.fill(2.5);
    assert!(grid.as_slice().iter().all(|&v| v == 2.5));
}
