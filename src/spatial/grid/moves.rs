use super::*;

impl Grid {
    /// Move whatever occupies `from` into the empty cell `to`.
    ///
    /// Two counter-maintaining writes (vacate, then fill), so the count is
    /// unchanged overall. The caller guarantees `to` is empty.
    #[inline]
    pub(crate) fn move_idx(&mut self, from: usize, to: usize) {
        debug_assert!(
            from < self.size && to < self.size,
            "move_idx: idx out of bounds (from={}, to={}, size={})",
            from,
            to,
            self.size
        );
        debug_assert_eq!(self.cells[to], CellState::Empty, "move_idx: target occupied");

        let state = self.set_idx(from, CellState::Empty);
        self.set_idx(to, state);
    }
}
