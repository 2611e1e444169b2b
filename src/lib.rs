//! Sandfall Engine - falling-sand cellular automaton for native and WASM hosts
//!
//! Architecture:
//! - core/        - Macros shared by every layer (fast access, logging)
//! - domain/      - Cell states and engine errors
//! - spatial/     - Grid storage with counter-maintaining mutation
//! - systems/     - Per-cell behaviors and the brush
//! - simulation/  - WorldCore orchestration, step, settings, perf, WASM facade

// Macros must be declared before the modules that use them.
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

// Compatibility re-exports (short paths used across the crate)
pub use domain::cells;
pub use domain::error;
pub use spatial::grid;
pub use systems::behaviors;
pub use systems::brush;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    engine_log!("Sandfall engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::cells::CellState;
pub use domain::error::EngineError;
pub use simulation::{step, PerfStats, SimulationSettings, StepReport, World, WorldCore};
pub use spatial::grid::Grid;
pub use systems::brush::{paint_circle, Brush};

// Export cell ids for JS (values match the bytes behind `cells_ptr`)
#[wasm_bindgen]
pub fn cell_empty() -> u8 { CellState::Empty.id() }
#[wasm_bindgen]
pub fn cell_sand() -> u8 { CellState::Sand.id() }
