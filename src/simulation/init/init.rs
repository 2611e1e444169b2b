use crate::behaviors::BehaviorRegistry;
use crate::brush::Brush;
use crate::error::EngineError;
use crate::grid::Grid;

use super::perf_stats::PerfStats;
use super::settings::SimulationSettings;
use super::WorldCore;

pub(super) fn create_world_core(settings: &SimulationSettings) -> Result<WorldCore, EngineError> {
    let grid = match Grid::new(settings.width, settings.height) {
        Ok(grid) => grid,
        Err(e) => {
            engine_warn!("world creation failed: {}", e);
            return Err(e);
        }
    };
    let brush = Brush::new(&settings.brush)?;

    engine_log!(
        "world created: {}x{} ({} cells), brush {} in {:?}",
        grid.width(),
        grid.height(),
        grid.size(),
        brush.radius(),
        brush.limits()
    );

    Ok(WorldCore {
        grid,
        behaviors: BehaviorRegistry::new(),
        brush,
        frame: 0,
        perf_enabled: settings.perf_metrics,
        perf_stats: PerfStats::default(),
    })
}
