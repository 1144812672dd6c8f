use crate::core::EngineError;
use crate::spatial::BufferRole;
use crate::systems::kernel;

use super::perf_timer::PerfTimer;
use super::FluidCore;

/// One display frame: kernel step, composite, swap.
pub(super) fn render_frame(core: &mut FluidCore, now_ms: f64) -> Result<(), EngineError> {
    if core.disposed {
        return Err(EngineError::Disposed);
    }

    let mut timer = core.perf_enabled.then(PerfTimer::start);

    let pointer = core
        .pointer
        .refresh(now_ms, core.config.simulation.interaction_enabled);
    core.clock.advance(core.config.speed);
    let frame = core.buffers.frame();
    let time = core.clock.time() as f32;

    let (src, dst) = core.buffers.split();

    kernel::step(src, dst, frame, pointer, &core.config.simulation);
    let kernel_ms = timer.as_mut().map_or(0.0, PerfTimer::lap);

    core.compositor.render(dst, &core.config.display, time);
    let composite_ms = timer.as_mut().map_or(0.0, PerfTimer::lap);

    core.buffers.swap();

    if let Some(timer) = timer {
        let field = core.buffers.read(BufferRole::Current);
        core.perf_stats.frame_ms = timer.elapsed_ms();
        core.perf_stats.kernel_ms = kernel_ms;
        core.perf_stats.composite_ms = composite_ms;
        core.perf_stats.frame = frame as u32;
        core.perf_stats.cells = field.cells().len() as u32;
        core.perf_stats.energy = field.energy();
        core.perf_stats.max_channel = field.max_abs_channel();
        core.perf_stats.pointer_active = pointer.is_active();
    }

    Ok(())
}
