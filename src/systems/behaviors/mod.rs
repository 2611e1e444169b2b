//! Behaviors - per-cell update rules
//!
//! Each material gets one `Behavior`; the registry dispatches by `CellState`.
//! Adding a material means a new variant plus a new behavior here, the scan
//! in `simulation::step` stays untouched.

mod powder;

pub use powder::PowderBehavior;

use crate::cells::CellState;
use crate::grid::Grid;

/// Update context passed to behaviors
pub struct UpdateContext<'a> {
    pub grid: &'a mut Grid,
    pub x: u32,
    pub y: u32,
    pub frame: u32,
}

/// What happened to one cell during a tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellUpdate {
    /// Nothing to do (empty cell, or a grain resting on the floor row)
    Idle,
    /// Moved straight down
    Fell,
    /// Moved diagonally down
    Slid,
    /// Supported below and both diagonals taken
    Blocked,
}

/// Behavior trait - each material implements this
pub trait Behavior {
    fn update(&self, ctx: &mut UpdateContext) -> CellUpdate;
}

/// Horizontal scan direction for a frame: even frames go left to right.
#[inline]
pub fn scans_left_to_right(frame: u32) -> bool {
    (frame & 1) == 0
}

/// Primary/secondary horizontal offsets for a diagonal slide.
///
/// Left first when `(x + y + frame)` is odd. The checkerboard flips every
/// frame. Wrapping addition keeps the parity exact.
#[inline]
pub fn slide_dirs(frame: u32, x: u32, y: u32) -> (i32, i32) {
    let go_left = (x.wrapping_add(y).wrapping_add(frame) & 1) == 1;
    if go_left { (-1, 1) } else { (1, -1) }
}

/// Behavior registry - dispatch by cell state
pub struct BehaviorRegistry {
    powder: PowderBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            powder: PowderBehavior::new(),
        }
    }

    pub fn update(&self, state: CellState, ctx: &mut UpdateContext) -> CellUpdate {
        match state {
            CellState::Sand => self.powder.update(ctx),
            CellState::Empty => CellUpdate::Idle,
        }
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
