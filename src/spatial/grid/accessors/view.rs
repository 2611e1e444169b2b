use super::super::*;

impl Grid {
    #[inline]
    pub fn occupied_count(&self) -> u64 {
        self.occupied_count
    }

    /// Read-only view for rendering/export
    #[inline]
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    // === Raw pointer for JS interop ===
    // CellState is repr(u8), so the buffer reads as one byte per cell.
    pub fn cells_ptr(&self) -> *const u8 {
        self.cells.as_ptr() as *const u8
    }

    /// Full recount of occupied cells. O(size); diagnostics only.
    pub fn count_occupied(&self) -> u64 {
        self.cells.iter().filter(|c| c.is_occupied()).count() as u64
    }
}
