//! Brush - circular paint/erase strokes in grid coordinates
//!
//! Membership is `dx*dx + dy*dy < r*r` (strict), so the boundary ring is
//! never painted. Stray coordinates near the edges are dropped by `Grid::set`.

use serde::{Deserialize, Serialize};

use crate::cells::CellState;
use crate::error::EngineError;
use crate::grid::Grid;

pub const DEFAULT_MIN_RADIUS: i32 = 2;
pub const DEFAULT_MAX_RADIUS: i32 = 256;
pub const DEFAULT_RADIUS: i32 = 32;

/// Write `state` into every cell strictly inside the circle.
/// Returns how many cells actually changed.
pub fn paint_circle(grid: &mut Grid, cx: i32, cy: i32, radius: i32, state: CellState) -> u32 {
    if radius <= 0 {
        return 0;
    }

    let r2 = radius as i64 * radius as i64;
    let mut changed = 0u32;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let (dx64, dy64) = (dx as i64, dy as i64);
            if dx64 * dx64 + dy64 * dy64 >= r2 {
                continue;
            }
            let (Some(x), Some(y)) = (cx.checked_add(dx), cy.checked_add(dy)) else {
                continue;
            };
            match grid.replace(x, y, state) {
                Some(prev) if prev != state => changed += 1,
                _ => {}
            }
        }
    }
    changed
}

/// Brush radius limits
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrushSettings {
    pub min_radius: i32,
    pub max_radius: i32,
    pub default_radius: i32,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            min_radius: DEFAULT_MIN_RADIUS,
            max_radius: DEFAULT_MAX_RADIUS,
            default_radius: DEFAULT_RADIUS,
        }
    }
}

impl BrushSettings {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.min_radius <= 0 || self.min_radius > self.max_radius {
            return Err(EngineError::InvalidBrushRange {
                min: self.min_radius,
                max: self.max_radius,
            });
        }
        Ok(())
    }
}

/// Circular brush with a clamped radius
#[derive(Clone, Debug)]
pub struct Brush {
    radius: i32,
    min_radius: i32,
    max_radius: i32,
}

impl Brush {
    pub fn new(settings: &BrushSettings) -> Result<Self, EngineError> {
        settings.validate()?;
        Ok(Self {
            radius: settings.default_radius.clamp(settings.min_radius, settings.max_radius),
            min_radius: settings.min_radius,
            max_radius: settings.max_radius,
        })
    }

    #[inline]
    pub fn radius(&self) -> i32 { self.radius }

    #[inline]
    pub fn limits(&self) -> (i32, i32) { (self.min_radius, self.max_radius) }

    /// Set the radius, clamped to the configured range. Returns the applied value.
    pub fn set_radius(&mut self, radius: i32) -> i32 {
        self.radius = radius.clamp(self.min_radius, self.max_radius);
        self.radius
    }

    /// Grow/shrink by `delta` (one scroll-wheel notch = 1), clamped.
    pub fn adjust(&mut self, delta: i32) -> i32 {
        self.set_radius(self.radius.saturating_add(delta))
    }

    /// Spawn sand under the brush
    pub fn paint(&self, grid: &mut Grid, cx: i32, cy: i32) -> u32 {
        paint_circle(grid, cx, cy, self.radius, CellState::Sand)
    }

    /// Clear cells under the brush
    pub fn erase(&self, grid: &mut Grid, cx: i32, cy: i32) -> u32 {
        paint_circle(grid, cx, cy, self.radius, CellState::Empty)
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            min_radius: DEFAULT_MIN_RADIUS,
            max_radius: DEFAULT_MAX_RADIUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_circle_excludes_boundary_ring() {
        let mut grid = Grid::new(20, 20).unwrap();
        let changed = paint_circle(&mut grid, 5, 5, 2, CellState::Sand);

        // r=2: only the 3x3 block has dx²+dy² < 4
        assert_eq!(changed, 9);
        assert_eq!(grid.occupied_count(), 9);
        for y in 0..20 {
            for x in 0..20 {
                let (dx, dy) = (x - 5, y - 5);
                let expected = if dx * dx + dy * dy < 4 { CellState::Sand } else { CellState::Empty };
                assert_eq!(grid.get(x, y), expected, "cell ({}, {})", x, y);
            }
        }
        for (x, y) in [(3, 5), (7, 5), (5, 3), (5, 7)] {
            assert_eq!(grid.get(x, y), CellState::Empty);
        }
    }

    #[test]
    fn non_positive_radius_paints_nothing() {
        let mut grid = Grid::new(8, 8).unwrap();
        assert_eq!(paint_circle(&mut grid, 4, 4, 0, CellState::Sand), 0);
        assert_eq!(paint_circle(&mut grid, 4, 4, -3, CellState::Sand), 0);
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn stroke_past_the_edge_only_touches_grid_cells() {
        let mut grid = Grid::new(10, 10).unwrap();
        let changed = paint_circle(&mut grid, 0, 0, 3, CellState::Sand);

        // Quarter of the r=3 disc that lies in range: dx,dy >= 0, dx²+dy² < 9
        let expected = (0..3)
            .flat_map(|dy| (0..3).map(move |dx| (dx, dy)))
            .filter(|(dx, dy)| dx * dx + dy * dy < 9)
            .count() as u32;
        assert_eq!(changed, expected);
        assert_eq!(grid.occupied_count(), expected as u64);
    }

    #[test]
    fn repaint_and_erase_report_only_changes() {
        let mut grid = Grid::new(10, 10).unwrap();
        let brush = Brush::new(&BrushSettings { min_radius: 1, max_radius: 4, default_radius: 2 }).unwrap();

        assert_eq!(brush.paint(&mut grid, 5, 5), 9);
        assert_eq!(brush.paint(&mut grid, 5, 5), 0);
        assert_eq!(brush.erase(&mut grid, 5, 5), 9);
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn radius_is_clamped() {
        let mut brush = Brush::default();
        assert_eq!(brush.radius(), DEFAULT_RADIUS);
        assert_eq!(brush.set_radius(1), DEFAULT_MIN_RADIUS);
        assert_eq!(brush.set_radius(10_000), DEFAULT_MAX_RADIUS);
        assert_eq!(brush.adjust(5), DEFAULT_MAX_RADIUS);
        assert_eq!(brush.adjust(-10), DEFAULT_MAX_RADIUS - 10);
        assert_eq!(brush.adjust(i32::MIN), DEFAULT_MIN_RADIUS);
    }

    #[test]
    fn default_radius_outside_range_is_clamped_on_construction() {
        let settings = BrushSettings { min_radius: 2, max_radius: 8, default_radius: 32 };
        assert_eq!(Brush::new(&settings).unwrap().radius(), 8);
    }

    #[test]
    fn empty_or_non_positive_range_is_rejected() {
        for (min, max) in [(0, 10), (-2, 4), (5, 4)] {
            let settings = BrushSettings { min_radius: min, max_radius: max, default_radius: 3 };
            assert!(matches!(
                Brush::new(&settings),
                Err(EngineError::InvalidBrushRange { .. })
            ));
        }
    }
}
