use fluid_backdrop_engine::FluidBackdrop;

#[test]
fn perf_smoke_frame() {
    let mut backdrop = FluidBackdrop::new(128, 64).unwrap();
    backdrop.enable_perf_metrics(true);
    backdrop.render_frame_at(0.0).unwrap();
    for i in 0..16 {
        backdrop.pointer_move_at(10.0 + i as f32 * 6.0, 32.0, 10.0 + i as f64 * 16.0);
        backdrop.render_frame_at(16.0 + i as f64 * 16.0).unwrap();
    }
    let stats = backdrop.get_perf_stats();
    assert!(stats.frame_ms() >= 0.0);
    assert!(stats.kernel_ms() >= 0.0);
    assert_eq!(stats.cells(), 128 * 64);
    assert!(stats.pointer_active());
    assert_eq!(backdrop.pixels_len(), 128 * 64);
}
