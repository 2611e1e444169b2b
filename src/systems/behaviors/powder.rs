//! PowderBehavior - falling and sliding for sand
//!
//! Rule A: fall straight down into an empty cell.
//! Rule B: when supported, slide to one of the two diagonals below,
//! primary side chosen by `slide_dirs`.
//! A grain on the floor row never moves.

use super::{slide_dirs, Behavior, CellUpdate, UpdateContext};
use crate::cells::CellState;
use crate::grid::Grid;

pub struct PowderBehavior;

impl PowderBehavior {
    pub fn new() -> Self {
        Self
    }

    /// Index of the diagonal target if it is inside the grid and empty
    #[inline]
    fn slide_target(&self, grid: &Grid, x: u32, below_y: u32, dx: i32) -> Option<usize> {
        let tx = x as i32 + dx;
        if !grid.is_empty(tx, below_y as i32) {
            return None;
        }
        Some(grid.index_unchecked(tx as u32, below_y))
    }
}

impl Default for PowderBehavior {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for PowderBehavior {
    fn update(&self, ctx: &mut UpdateContext) -> CellUpdate {
        let x = ctx.x;
        let y = ctx.y;
        let grid = &mut *ctx.grid;

        // Floor row
        let below_y = y + 1;
        if below_y >= grid.height() {
            return CellUpdate::Idle;
        }

        let idx = grid.index_unchecked(x, y);
        let below = grid.index_unchecked(x, below_y);

        if *fast!(grid.cells(), [below]) == CellState::Empty {
            grid.move_idx(idx, below);
            return CellUpdate::Fell;
        }

        let (first, second) = slide_dirs(ctx.frame, x, y);
        for dx in [first, second] {
            if let Some(target) = self.slide_target(grid, x, below_y, dx) {
                grid.move_idx(idx, target);
                return CellUpdate::Slid;
            }
        }

        CellUpdate::Blocked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update_at(grid: &mut Grid, x: u32, y: u32, frame: u32) -> CellUpdate {
        let mut ctx = UpdateContext { grid, x, y, frame };
        PowderBehavior::new().update(&mut ctx)
    }

    #[test]
    fn falls_into_empty_cell_below() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(1, 0, CellState::Sand);

        assert_eq!(update_at(&mut grid, 1, 0, 0), CellUpdate::Fell);
        assert_eq!(grid.get(1, 0), CellState::Empty);
        assert_eq!(grid.get(1, 1), CellState::Sand);
        assert_eq!(grid.occupied_count(), 1);
    }

    #[test]
    fn floor_grain_stays_put() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(1, 1, CellState::Sand);

        assert_eq!(update_at(&mut grid, 1, 1, 0), CellUpdate::Idle);
        assert_eq!(grid.get(1, 1), CellState::Sand);
    }

    #[test]
    fn slides_to_primary_side_first() {
        // (1 + 0 + 0) odd: left first
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(1, 1, CellState::Sand);
        grid.set(1, 0, CellState::Sand);

        assert_eq!(update_at(&mut grid, 1, 0, 0), CellUpdate::Slid);
        assert_eq!(grid.get(0, 1), CellState::Sand);
        assert_eq!(grid.get(2, 1), CellState::Empty);

        // Odd frame flips it: right first
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(1, 1, CellState::Sand);
        grid.set(1, 0, CellState::Sand);

        assert_eq!(update_at(&mut grid, 1, 0, 1), CellUpdate::Slid);
        assert_eq!(grid.get(2, 1), CellState::Sand);
        assert_eq!(grid.get(0, 1), CellState::Empty);
    }

    #[test]
    fn falls_back_to_secondary_side() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(0, 1, CellState::Sand);
        grid.set(1, 1, CellState::Sand);
        grid.set(1, 0, CellState::Sand);

        assert_eq!(update_at(&mut grid, 1, 0, 0), CellUpdate::Slid);
        assert_eq!(grid.get(2, 1), CellState::Sand);
        assert_eq!(grid.get(1, 0), CellState::Empty);
        assert_eq!(grid.occupied_count(), 3);
    }

    #[test]
    fn grid_edge_counts_as_blocked_diagonal() {
        // x=0, frame 0: parity even, right first; left is off-grid
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(0, 1, CellState::Sand);
        grid.set(1, 1, CellState::Sand);
        grid.set(0, 0, CellState::Sand);

        assert_eq!(update_at(&mut grid, 0, 0, 0), CellUpdate::Blocked);
        assert_eq!(grid.get(0, 0), CellState::Sand);
        assert_eq!(grid.occupied_count(), 3);
    }
}
