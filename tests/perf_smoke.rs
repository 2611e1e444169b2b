use sandfall_engine::World;

#[test]
fn perf_smoke_step() {
    let mut world = World::new(128, 64).expect("valid dimensions");
    world.enable_perf_metrics(true);
    for x in 0..128 {
        for y in 0..32 {
            world.set_cell(x, y, sandfall_engine::cell_sand());
        }
    }
    world.step();
    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.occupied_count(), 128 * 32);
    assert_eq!(stats.non_empty_cells(), 128 * 32);
    assert_eq!(world.occupied_count(), 128 * 32);
}
