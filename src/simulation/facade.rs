use wasm_bindgen::prelude::*;

use crate::cells::CellState;
use crate::error::EngineError;

use super::perf_stats::PerfStats;
use super::WorldCore;

fn to_js_error(e: EngineError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(width: i32, height: i32) -> Result<World, JsValue> {
        let core = WorldCore::new(width, height).map_err(to_js_error)?;
        Ok(Self { core })
    }

    /// Create a world from a JSON settings document
    #[wasm_bindgen(js_name = fromSettingsJson)]
    pub fn from_settings_json(json: String) -> Result<World, JsValue> {
        let core = WorldCore::from_settings_json(&json).map_err(to_js_error)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn occupied_count(&self) -> u64 { self.core.occupied_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u32 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn brush_radius(&self) -> i32 { self.core.brush_radius() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Cell id at (x, y); `cell_empty()` when out of range
    pub fn get_cell(&self, x: i32, y: i32) -> u8 {
        self.core.get_cell(x, y).id()
    }

    /// Write a cell by id. Unknown ids are ignored; returns whether the id was accepted.
    pub fn set_cell(&mut self, x: i32, y: i32, id: u8) -> bool {
        match CellState::from_id(id) {
            Some(state) => {
                self.core.set_cell(x, y, state);
                true
            }
            None => false,
        }
    }

    /// Spawn sand under the brush; returns number of cells changed
    pub fn paint(&mut self, cx: i32, cy: i32) -> u32 {
        self.core.paint(cx, cy)
    }

    /// Erase under the brush; returns number of cells changed
    pub fn erase(&mut self, cx: i32, cy: i32) -> u32 {
        self.core.erase(cx, cy)
    }

    pub fn set_brush_radius(&mut self, radius: i32) -> i32 {
        self.core.set_brush_radius(radius)
    }

    /// Resize the brush by a mouse-wheel delta
    pub fn adjust_brush(&mut self, delta: i32) -> i32 {
        self.core.adjust_brush(delta)
    }

    /// Clear all cells
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Step the simulation forward one frame (internal counter)
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Step with a host-supplied frame counter
    pub fn step_with_frame(&mut self, frame_count: u32) {
        self.core.step_with_frame(frame_count);
    }

    /// Get pointer to the cell bytes (for JS rendering)
    pub fn cells_ptr(&self) -> *const u8 {
        self.core.cells_ptr()
    }

    /// Number of cells (= bytes) behind `cells_ptr`
    pub fn cells_len(&self) -> usize {
        self.core.cells_len()
    }
}
