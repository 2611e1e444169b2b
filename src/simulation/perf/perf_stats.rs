use wasm_bindgen::prelude::*;

/// Snapshot of the last step (zeros while perf metrics are off)
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(crate) step_ms: f64,
    pub(crate) cells_visited: u32,
    pub(crate) grains_fell: u32,
    pub(crate) grains_slid: u32,
    pub(crate) grains_blocked: u32,
    pub(crate) grid_size: u32,
    pub(crate) occupied_count: u64,
    pub(crate) non_empty_cells: u64,
    pub(crate) frame: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    /// Grains that changed cell this step
    pub fn grains_moved(&self) -> u32 {
        self.grains_fell.saturating_add(self.grains_slid)
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn cells_visited(&self) -> u32 { self.cells_visited }
    #[wasm_bindgen(getter)]
    pub fn grains_fell(&self) -> u32 { self.grains_fell }
    #[wasm_bindgen(getter)]
    pub fn grains_slid(&self) -> u32 { self.grains_slid }
    #[wasm_bindgen(getter)]
    pub fn grains_blocked(&self) -> u32 { self.grains_blocked }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
    #[wasm_bindgen(getter)]
    pub fn occupied_count(&self) -> u64 { self.occupied_count }
    #[wasm_bindgen(getter)]
    pub fn non_empty_cells(&self) -> u64 { self.non_empty_cells }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u32 { self.frame }
}
