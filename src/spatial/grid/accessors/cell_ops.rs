use super::super::*;

impl Grid {
    /// In range and free. Outside the grid is a wall, not open space.
    #[inline]
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        if !self.in_bounds(x, y) { return false; }
        self.cells[self.index(x as u32, y as u32)] == CellState::Empty
    }

    // === Cell access ===
    // Out-of-range reads see Empty, out-of-range writes are dropped.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> CellState {
        if !self.in_bounds(x, y) { return CellState::Empty; }
        self.cells[self.index(x as u32, y as u32)]
    }

    #[inline]
    pub fn set(&mut self, x: i32, y: i32, state: CellState) {
        if !self.in_bounds(x, y) { return; }
        let idx = self.index(x as u32, y as u32);
        self.set_idx(idx, state);
    }

    /// Checked write: the previous state, or `None` when (x, y) is outside the grid.
    /// Same counter contract as `set`.
    #[inline]
    pub fn replace(&mut self, x: i32, y: i32, state: CellState) -> Option<CellState> {
        if !self.in_bounds(x, y) { return None; }
        let idx = self.index(x as u32, y as u32);
        Some(self.set_idx(idx, state))
    }
}
