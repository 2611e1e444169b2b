use serde::{Deserialize, Serialize};

use crate::brush::BrushSettings;
use crate::error::EngineError;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub const DEFAULT_WIDTH: i32 = 320;
pub const DEFAULT_HEIGHT: i32 = 180;

/// World configuration, loadable from JSON:
///
/// ```json
/// { "width": 320, "height": 180,
///   "brush": { "minRadius": 2, "maxRadius": 256, "defaultRadius": 32 } }
/// ```
///
/// Missing fields fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimulationSettings {
    pub width: i32,
    pub height: i32,
    pub brush: BrushSettings,
    pub perf_metrics: bool,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            brush: BrushSettings::default(),
            perf_metrics: false,
        }
    }
}

impl SimulationSettings {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let settings: SimulationSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        // Plain struct of integers and bools: serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(EngineError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        self.brush.validate()
    }
}

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}
