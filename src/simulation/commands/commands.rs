use crate::cells::CellState;

use super::WorldCore;

pub(super) fn set_cell(world: &mut WorldCore, x: i32, y: i32, state: CellState) {
    world.grid.set(x, y, state);
}

pub(super) fn get_cell(world: &WorldCore, x: i32, y: i32) -> CellState {
    world.grid.get(x, y)
}

/// Spawn sand under the brush; returns cells changed
pub(super) fn paint(world: &mut WorldCore, cx: i32, cy: i32) -> u32 {
    world.brush.paint(&mut world.grid, cx, cy)
}

/// Erase under the brush; returns cells changed
pub(super) fn erase(world: &mut WorldCore, cx: i32, cy: i32) -> u32 {
    world.brush.erase(&mut world.grid, cx, cy)
}

pub(super) fn set_brush_radius(world: &mut WorldCore, radius: i32) -> i32 {
    world.brush.set_radius(radius)
}

pub(super) fn adjust_brush(world: &mut WorldCore, delta: i32) -> i32 {
    world.brush.adjust(delta)
}

pub(super) fn clear(world: &mut WorldCore) {
    world.grid.clear();
    world.frame = 0;
}
