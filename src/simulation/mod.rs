//! World - falling-sand simulation orchestration
//!
//! WorldCore owns the grid, the behavior registry, the brush and the frame
//! counter. It only orchestrates:
//! - per-cell rules live in systems/behaviors
//! - the tick scan lives in step/scan.rs
//! - brush strokes live in systems/brush.rs

use crate::behaviors::BehaviorRegistry;
use crate::brush::Brush;
use crate::cells::CellState;
use crate::error::EngineError;
use crate::grid::Grid;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/scan.rs"]
mod scan;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;
pub use scan::{step, step_with, StepReport};
pub use settings::{SimulationSettings, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// The simulation world
pub struct WorldCore {
    grid: Grid,
    behaviors: BehaviorRegistry,
    brush: Brush,

    // Wraps at u32::MAX; only its parity and low bits matter.
    frame: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create a new world with given dimensions and default brush
    pub fn new(width: i32, height: i32) -> Result<Self, EngineError> {
        init::create_world_core(&SimulationSettings {
            width,
            height,
            ..SimulationSettings::default()
        })
    }

    pub fn from_settings(settings: &SimulationSettings) -> Result<Self, EngineError> {
        init::create_world_core(settings)
    }

    pub fn from_settings_json(json: &str) -> Result<Self, EngineError> {
        let settings = SimulationSettings::from_json(json)?;
        engine_log!("settings loaded: {}", settings.to_json());
        Self::from_settings(&settings)
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn occupied_count(&self) -> u64 { self.grid.occupied_count() }

    pub fn frame(&self) -> u32 { self.frame }

    pub fn grid(&self) -> &Grid { &self.grid }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn get_cell(&self, x: i32, y: i32) -> CellState {
        commands::get_cell(self, x, y)
    }

    /// Silently ignores out-of-range coordinates
    pub fn set_cell(&mut self, x: i32, y: i32, state: CellState) {
        commands::set_cell(self, x, y, state)
    }

    /// Paint sand with the brush centered at (cx, cy)
    pub fn paint(&mut self, cx: i32, cy: i32) -> u32 {
        commands::paint(self, cx, cy)
    }

    /// Erase with the brush centered at (cx, cy)
    pub fn erase(&mut self, cx: i32, cy: i32) -> u32 {
        commands::erase(self, cx, cy)
    }

    pub fn brush_radius(&self) -> i32 { self.brush.radius() }

    pub fn set_brush_radius(&mut self, radius: i32) -> i32 {
        commands::set_brush_radius(self, radius)
    }

    /// Resize the brush by a scroll delta
    pub fn adjust_brush(&mut self, delta: i32) -> i32 {
        commands::adjust_brush(self, delta)
    }

    /// Empty every cell and restart the frame counter
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Step the simulation forward using the internal frame counter
    pub fn step(&mut self) -> StepReport {
        let frame = self.frame;
        let report = step::step(self, frame);
        self.frame = self.frame.wrapping_add(1);
        report
    }

    /// Step with a caller-supplied frame counter; the internal one is untouched
    pub fn step_with_frame(&mut self, frame_count: u32) -> StepReport {
        step::step(self, frame_count)
    }

    /// Read-only cell view for rendering
    pub fn cells(&self) -> &[CellState] {
        self.grid.cells()
    }

    /// Get pointer to the cell bytes (for JS rendering)
    pub fn cells_ptr(&self) -> *const u8 {
        self.grid.cells_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.grid.size()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
