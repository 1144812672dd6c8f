use super::*;
use crate::domain::{GrainKind, SimulationConfig};
use crate::spatial::CHANNEL_LIMIT;
use crate::systems::kernel::initial::initial_cell;

fn core(w: u32, h: u32) -> FluidCore {
    FluidCore::new(w, h).unwrap()
}

#[test]
fn zero_sized_viewport_is_rejected() {
    assert_eq!(
        FluidCore::new(0, 10).err(),
        Some(EngineError::InvalidDimensions { width: 0, height: 10 })
    );
}

#[test]
fn first_frame_is_the_cold_start_state() {
    let mut c = core(12, 7);
    c.render_frame_at(0.0).unwrap();
    assert_eq!(c.frame(), 1);
    for y in 0..7 {
        for x in 0..12 {
            assert_eq!(c.field().get(x, y), initial_cell(x, y, 12, 7));
        }
    }
}

#[test]
fn first_frame_ignores_pointer() {
    let mut a = core(10, 10);
    let mut b = core(10, 10);
    b.pointer_move_at(2.0, 2.0, 0.0);
    b.pointer_move_at(8.0, 8.0, 1.0);
    a.render_frame_at(2.0).unwrap();
    b.render_frame_at(2.0).unwrap();
    assert_eq!(a.field().cells(), b.field().cells());
}

#[test]
fn buffers_alternate_each_frame() {
    let mut c = core(6, 6);
    for n in 0..5u64 {
        c.render_frame_at(n as f64 * 16.0).unwrap();
        assert_eq!(c.buffers().generation(BufferRole::Current), Some(n));
        let prev = c.buffers().generation(BufferRole::Previous);
        assert_eq!(prev, n.checked_sub(1));
    }
}

/// Two frames with no pointer input: the reference every forcing test
/// compares against.
fn untouched(w: u32, h: u32) -> FluidCore {
    let mut c = core(w, h);
    c.render_frame_at(0.0).unwrap();
    c.render_frame_at(16.0).unwrap();
    c
}

fn stroke(c: &mut FluidCore) {
    c.pointer_move_at(6.0, 10.0, 5.0);
    c.pointer_move_at(12.0, 10.0, 10.0);
}

#[test]
fn pointerless_runs_are_deterministic() {
    let a = untouched(16, 16);
    let b = untouched(16, 16);
    assert_eq!(a.field().cells(), b.field().cells());
}

#[test]
fn pointer_stroke_injects_velocity() {
    let base = untouched(20, 20);
    let mut c = core(20, 20);
    c.render_frame_at(0.0).unwrap();
    stroke(&mut c);
    c.render_frame_at(16.0).unwrap();
    assert!(c.field().get(9, 10).vx > base.field().get(9, 10).vx + 0.05);
    assert!(c.field_energy() > base.field_energy());
}

#[test]
fn stale_pointer_is_ignored() {
    let base = untouched(20, 20);
    let mut c = core(20, 20);
    c.render_frame_at(0.0).unwrap();
    stroke(&mut c);
    // More than 100 ms after the last move
    c.render_frame_at(200.0).unwrap();
    assert!(!c.pointer_state().is_active());
    assert_eq!(c.field().cells(), base.field().cells());
}

#[test]
fn disabled_interaction_drops_pointer_input() {
    let base = untouched(20, 20);
    let mut c = core(20, 20);
    c.set_interaction_enabled(false);
    c.render_frame_at(0.0).unwrap();
    stroke(&mut c);
    c.render_frame_at(16.0).unwrap();
    assert_eq!(c.field().cells(), base.field().cells());
}

#[test]
fn pointer_leave_stops_forcing() {
    let base = untouched(20, 20);
    let mut c = core(20, 20);
    c.render_frame_at(0.0).unwrap();
    stroke(&mut c);
    c.pointer_leave();
    c.render_frame_at(16.0).unwrap();
    assert_eq!(c.field().cells(), base.field().cells());
}

#[test]
fn zero_brush_size_never_poisons_the_field() {
    let mut c = core(16, 16);
    c.update_config_json(r#"{"brushSize": 0}"#).unwrap();
    c.render_frame_at(0.0).unwrap();
    c.pointer_move_at(4.0, 4.0, 5.0);
    c.pointer_move_at(8.0, 8.0, 10.0);
    c.render_frame_at(16.0).unwrap();
    for n in 0..10 {
        c.render_frame_at(200.0 + n as f64 * 16.0).unwrap();
    }
    let field = c.field();
    assert!(field.cells().iter().all(|cell| cell.channels().iter().all(|v| v.is_finite())));
    assert!(field.max_abs_channel() <= CHANNEL_LIMIT);
}

#[test]
fn resize_restarts_from_cold_state() {
    let mut c = core(20, 20);
    c.render_frame_at(0.0).unwrap();
    stroke(&mut c);
    c.render_frame_at(16.0).unwrap();
    let t = c.time();

    c.resize(9, 5).unwrap();
    assert_eq!((c.width(), c.height(), c.frame()), (9, 5, 0));
    assert_eq!(c.pixels_len(), 45);
    assert_eq!(c.buffers().generation(BufferRole::Current), None);

    c.render_frame_at(20.0).unwrap();
    assert_eq!(c.field().get(4, 2), initial_cell(4, 2, 9, 5));
    assert!(c.time() > t);
}

#[test]
fn failed_resize_keeps_old_buffers() {
    let mut c = core(8, 8);
    c.render_frame_at(0.0).unwrap();
    assert!(c.resize(0, 8).is_err());
    assert_eq!((c.width(), c.height(), c.frame()), (8, 8, 1));
    assert_eq!(c.pixels_len(), 64);
}

#[test]
fn dispose_releases_and_blocks_frames() {
    let mut c = core(8, 8);
    c.render_frame_at(0.0).unwrap();
    c.dispose();
    assert!(c.is_disposed());
    assert_eq!(c.pixels_len(), 0);
    assert_eq!(c.render_frame_at(16.0), Err(EngineError::Disposed));
    assert_eq!(c.resize(8, 8), Err(EngineError::Disposed));
    // Second dispose is a no-op
    c.dispose();
}

#[test]
fn config_patch_merges_only_given_fields() {
    let mut c = core(4, 4);
    c.update_config_json(r#"{"brushSize": 12, "grainType": 2}"#).unwrap();
    assert_eq!(c.config().simulation.brush_size, 12.0);
    assert_eq!(c.config().display.grain.kind, GrainKind::Organic);
    assert_eq!(c.config().simulation.fluid_decay, SimulationConfig::default().fluid_decay);
}

#[test]
fn malformed_config_is_rejected_without_changes() {
    let mut c = core(4, 4);
    let before = *c.config();
    assert!(matches!(
        c.update_config_json(r#"{"brushSize": "big"}"#),
        Err(EngineError::Config(_))
    ));
    assert!(c.update_config_json(r#"{"nope": 1}"#).is_err());
    assert_eq!(c.config(), &before);
}

#[test]
fn speed_scales_simulation_time() {
    let mut c = core(4, 4);
    c.update_config_json(r#"{"speed": 2.0}"#).unwrap();
    c.render_frame_at(0.0).unwrap();
    assert!((c.time() - 2.0 * FRAME_DT).abs() < 1e-9);
}

#[test]
fn frame_writes_every_pixel_opaque() {
    let mut c = core(7, 3);
    c.render_frame_at(0.0).unwrap();
    assert_eq!(c.pixels().len(), 21);
    assert_eq!(c.pixels_byte_len(), 84);
    assert!(c.pixels().iter().all(|p| p >> 24 == 0xFF));
}

#[test]
fn perf_stats_follow_toggle() {
    let mut c = core(16, 16);
    c.render_frame_at(0.0).unwrap();
    assert_eq!(c.get_perf_stats().cells(), 0);

    c.enable_perf_metrics(true);
    c.render_frame_at(16.0).unwrap();
    let stats = c.get_perf_stats();
    assert_eq!(stats.cells(), 256);
    assert_eq!(stats.frame(), 1);
    assert!(stats.frame_ms() >= 0.0);

    c.enable_perf_metrics(false);
    assert_eq!(c.get_perf_stats().cells(), 0);
}
