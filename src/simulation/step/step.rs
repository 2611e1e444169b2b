use super::perf_timer::measure;
use super::scan::{step_with, StepReport};
use super::WorldCore;

pub(super) fn step(world: &mut WorldCore, frame_count: u32) -> StepReport {
    if !world.perf_enabled {
        return step_with(&mut world.grid, &world.behaviors, frame_count);
    }

    world.perf_stats.reset();
    let (report, step_ms) = measure(|| step_with(&mut world.grid, &world.behaviors, frame_count));

    let stats = &mut world.perf_stats;
    stats.step_ms = step_ms;
    stats.frame = frame_count;
    stats.cells_visited = report.visited;
    stats.grains_fell = report.fell;
    stats.grains_slid = report.slid;
    stats.grains_blocked = report.blocked;
    stats.grid_size = world.grid.size() as u32;
    stats.occupied_count = world.grid.occupied_count();
    // Full grid scan (only while perf is on)
    stats.non_empty_cells = world.grid.count_occupied();
    debug_assert_eq!(
        stats.occupied_count, stats.non_empty_cells,
        "occupied counter drifted from the cell array"
    );

    report
}
