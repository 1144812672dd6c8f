use fluid_backdrop_engine::FluidCore;

fn speed_at(core: &FluidCore, x: u32, y: u32) -> f32 {
    core.field().get(x, y).velocity().length()
}

#[test]
fn single_stroke_spikes_then_fades() {
    let mut core = FluidCore::new(4, 4).unwrap();
    core.update_config_json(
        r#"{"fluidDecay": 0.98, "trailLength": 0.8, "stopDecay": 0.85, "brushSize": 5, "brushStrength": 1}"#,
    )
    .unwrap();

    core.render_frame_at(0.0).unwrap();
    let cold = [speed_at(&core, 2, 1), speed_at(&core, 2, 2)];

    core.pointer_move_at(2.0, 2.0, 8.0);
    core.pointer_move_at(2.0, 1.0, 12.0);
    core.render_frame_at(16.0).unwrap();
    let mut last = [speed_at(&core, 2, 1), speed_at(&core, 2, 2)];
    assert!(last[0] > cold[0] && last[1] > cold[1], "no spike on frame 1: {last:?}");

    // No further input; every later frame is past the idle timeout
    for n in 0..20 {
        core.render_frame_at(200.0 + n as f64 * 16.0).unwrap();
        let now = [speed_at(&core, 2, 1), speed_at(&core, 2, 2)];
        assert!(now[0] < last[0] && now[1] < last[1], "frame {}: {now:?} !< {last:?}", n + 2);
        assert!(now[0] > 0.0 && now[1] > 0.0);
        last = now;
    }
}

#[test]
fn idle_field_loses_energy_every_frame() {
    let mut core = FluidCore::new(20, 20).unwrap();
    core.update_config_json(
        r#"{"fluidDecay": 0.98, "trailLength": 0.9, "stopDecay": 0.85, "brushSize": 6, "brushStrength": 1.5}"#,
    )
    .unwrap();

    core.render_frame_at(0.0).unwrap();
    core.pointer_move_at(6.0, 10.0, 8.0);
    core.pointer_move_at(14.0, 10.0, 12.0);
    core.render_frame_at(16.0).unwrap();

    let mut last = core.field_energy();
    for n in 0..20 {
        core.render_frame_at(200.0 + n as f64 * 16.0).unwrap();
        let energy = core.field_energy();
        assert!(energy < last, "frame {}: energy {energy} !< {last}", n + 2);
        last = energy;
    }
}

#[test]
fn cold_start_is_reproducible() {
    let run = || {
        let mut core = FluidCore::new(32, 18).unwrap();
        core.update_config_json(r#"{"fluidDecay": 1.0, "trailLength": 1.0}"#).unwrap();
        core.render_frame_at(0.0).unwrap();
        core.field().cells().to_vec()
    };
    let a = run();
    let b = run();
    assert!(a.iter().zip(&b).all(|(p, q)| p.channels().map(f32::to_bits) == q.channels().map(f32::to_bits)));
}
