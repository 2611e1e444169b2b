use super::*;

#[test]
fn new_grid_is_empty() {
    let grid = Grid::new(4, 3).unwrap();
    assert_eq!(grid.dimensions(), (4, 3));
    assert_eq!(grid.size(), 12);
    assert_eq!(grid.occupied_count(), 0);
    assert!(grid.cells().iter().all(|c| *c == CellState::Empty));
}

#[test]
fn non_positive_dimensions_are_rejected() {
    for (w, h) in [(0, 5), (5, 0), (-1, 5), (5, -3), (0, 0)] {
        match Grid::new(w, h) {
            Err(EngineError::InvalidDimension { width, height }) => {
                assert_eq!((width, height), (w, h));
            }
            other => panic!("expected InvalidDimension for {}x{}, got {:?}", w, h, other),
        }
    }
}

#[test]
fn index_is_row_major() {
    let grid = Grid::new(5, 4).unwrap();
    assert_eq!(grid.index(0, 0), 0);
    assert_eq!(grid.index(4, 0), 4);
    assert_eq!(grid.index(0, 1), 5);
    assert_eq!(grid.index(2, 3), 17);
    assert_eq!(grid.coords(17), (2, 3));
}

#[test]
fn set_adjusts_counter_and_is_idempotent() {
    let mut grid = Grid::new(3, 3).unwrap();

    grid.set(1, 1, CellState::Sand);
    assert_eq!(grid.occupied_count(), 1);
    grid.set(1, 1, CellState::Sand);
    assert_eq!(grid.occupied_count(), 1);
    assert_eq!(grid.get(1, 1), CellState::Sand);

    grid.set(1, 1, CellState::Empty);
    assert_eq!(grid.occupied_count(), 0);
    grid.set(1, 1, CellState::Empty);
    assert_eq!(grid.occupied_count(), 0);
}

#[test]
fn out_of_range_reads_empty_and_writes_are_dropped() {
    let mut grid = Grid::new(3, 2).unwrap();
    grid.set(0, 0, CellState::Sand);

    for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 2), (i32::MIN, i32::MAX), (100, 100)] {
        grid.set(x, y, CellState::Sand);
        assert_eq!(grid.get(x, y), CellState::Empty);
        assert!(!grid.in_bounds(x, y));
        assert_eq!(grid.replace(x, y, CellState::Sand), None);
    }
    assert_eq!(grid.occupied_count(), 1);
    assert_eq!(grid.count_occupied(), 1);
}

#[test]
fn replace_reports_previous_state() {
    let mut grid = Grid::new(2, 2).unwrap();
    assert_eq!(grid.replace(1, 0, CellState::Sand), Some(CellState::Empty));
    assert_eq!(grid.replace(1, 0, CellState::Sand), Some(CellState::Sand));
    assert_eq!(grid.occupied_count(), 1);
    assert_eq!(grid.replace(1, 0, CellState::Empty), Some(CellState::Sand));
    assert_eq!(grid.occupied_count(), 0);
}

#[test]
fn move_keeps_count() {
    let mut grid = Grid::new(2, 2).unwrap();
    grid.set(0, 0, CellState::Sand);
    let from = grid.index(0, 0);
    let to = grid.index(1, 1);
    grid.move_idx(from, to);

    assert_eq!(grid.get(0, 0), CellState::Empty);
    assert_eq!(grid.get(1, 1), CellState::Sand);
    assert_eq!(grid.occupied_count(), 1);
}

#[test]
fn clear_resets_cells_and_counter() {
    let mut grid = Grid::new(4, 4).unwrap();
    for i in 0..4 {
        grid.set(i, i, CellState::Sand);
    }
    assert_eq!(grid.occupied_count(), 4);

    grid.clear();
    assert_eq!(grid.occupied_count(), 0);
    assert_eq!(grid.count_occupied(), 0);
}

#[test]
fn cells_ptr_exposes_cell_bytes() {
    let mut grid = Grid::new(3, 1).unwrap();
    grid.set(2, 0, CellState::Sand);

    let bytes = unsafe { std::slice::from_raw_parts(grid.cells_ptr(), grid.size()) };
    assert_eq!(bytes, &[0, 0, 1]);
}
