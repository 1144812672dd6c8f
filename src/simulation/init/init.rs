use crate::core::EngineError;
use crate::domain::EngineConfig;
use crate::spatial::FieldBuffers;
use crate::systems::compositor::Compositor;
use crate::systems::pointer::PointerTracker;

use super::clock::{SimulationClock, WallClock};
use super::perf_stats::PerfStats;
use super::FluidCore;

pub(super) fn create_core(width: u32, height: u32, config: EngineConfig) -> Result<FluidCore, EngineError> {
    let buffers = FieldBuffers::new(width, height)?;
    let compositor = Compositor::new(width, height)?;
    log::debug!("fluid core created at {}x{}", width, height);

    Ok(FluidCore {
        config,
        buffers,
        compositor,
        pointer: PointerTracker::new(),
        clock: SimulationClock::default(),
        wall: WallClock::new(),
        disposed: false,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}
