//! One simulation tick over a bare `Grid`
//!
//! Rows run bottom to top, so a grain that moved down this tick lands in a
//! row that was already scanned and is not visited twice. Within a row the
//! direction alternates with frame parity to cancel left/right bias.

use crate::behaviors::{scans_left_to_right, BehaviorRegistry, CellUpdate, UpdateContext};
use crate::cells::CellState;
use crate::grid::Grid;

/// Move counts for one tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Non-empty cells the scan looked at
    pub visited: u32,
    pub fell: u32,
    pub slid: u32,
    /// Supported grains with both diagonals taken
    pub blocked: u32,
}

impl StepReport {
    pub fn moved(&self) -> u32 {
        self.fell + self.slid
    }
}

/// Advance `grid` by exactly one frame.
///
/// Deterministic in `(grid, frame_count)`; the occupied count is conserved.
pub fn step(grid: &mut Grid, frame_count: u32) -> StepReport {
    step_with(grid, &BehaviorRegistry::new(), frame_count)
}

pub fn step_with(grid: &mut Grid, behaviors: &BehaviorRegistry, frame_count: u32) -> StepReport {
    let mut report = StepReport::default();
    let (width, height) = grid.dimensions();
    let go_right = scans_left_to_right(frame_count);

    for y in (0..height).rev() {
        if go_right {
            for x in 0..width {
                update_cell(grid, behaviors, x, y, frame_count, &mut report);
            }
        } else {
            for x in (0..width).rev() {
                update_cell(grid, behaviors, x, y, frame_count, &mut report);
            }
        }
    }

    report
}

#[inline]
fn update_cell(
    grid: &mut Grid,
    behaviors: &BehaviorRegistry,
    x: u32,
    y: u32,
    frame: u32,
    report: &mut StepReport,
) {
    let idx = grid.index_unchecked(x, y);
    let state = *fast!(grid.cells(), [idx]);
    if state == CellState::Empty {
        return;
    }
    report.visited += 1;

    let mut ctx = UpdateContext { grid, x, y, frame };
    match behaviors.update(state, &mut ctx) {
        CellUpdate::Fell => report.fell += 1,
        CellUpdate::Slid => report.slid += 1,
        CellUpdate::Blocked => report.blocked += 1,
        CellUpdate::Idle => {}
    }
}
