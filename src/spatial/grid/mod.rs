//! Grid - flat occupancy array with a running occupied counter
//!
//! Instead of: a graph of per-cell objects
//! We have:    cells[y * width + x] plus one u64 counter
//!
//! `cells` is private. Every write funnels through `set_idx`, which is the
//! only place the counter changes.

use crate::cells::CellState;
use crate::error::EngineError;

mod indexing;
mod accessors;
mod moves;

/// Fixed-size occupancy grid
#[derive(Clone, Debug)]
pub struct Grid {
    width: u32,
    height: u32,
    size: usize,

    cells: Vec<CellState>,
    occupied_count: u64,
}

impl Grid {
    /// Create an all-empty grid.
    ///
    /// Non-positive dimensions (or an area that can't be addressed) are
    /// rejected, never clamped.
    pub fn new(width: i32, height: i32) -> Result<Self, EngineError> {
        if width <= 0 || height <= 0 {
            return Err(EngineError::InvalidDimension { width, height });
        }
        let size = (width as usize)
            .checked_mul(height as usize)
            .ok_or(EngineError::InvalidDimension { width, height })?;

        Ok(Self {
            width: width as u32,
            height: height as u32,
            size,
            cells: vec![CellState::Empty; size],
            occupied_count: 0,
        })
    }

    // === Counter-maintaining write ===
    // Idempotent: writing the current state changes nothing.
    #[inline]
    pub(crate) fn set_idx(&mut self, idx: usize, state: CellState) -> CellState {
        let prev = self.cells[idx];
        if prev == state {
            return prev;
        }

        if !prev.is_occupied() && state.is_occupied() {
            self.occupied_count += 1;
        } else if prev.is_occupied() && !state.is_occupied() {
            self.occupied_count -= 1;
        }

        self.cells[idx] = state;
        prev
    }

    /// Reset every cell to `Empty`
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Empty);
        self.occupied_count = 0;
    }
}

#[cfg(test)]
mod tests;
