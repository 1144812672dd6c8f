//! Simulation orchestrator
//!
//! `FluidCore` owns the buffer pair, the compositor, the pointer tracker,
//! both clocks and the live configuration. One `render_frame` call:
//!
//! 1. gate the pointer (idle timeout, interaction flag)
//! 2. advance the simulation clock
//! 3. step kernel: current buffer -> other buffer
//! 4. compositor reads the buffer just written
//! 5. swap buffer labels
//!
//! Everything runs to completion before `render_frame` returns, so frame N+1
//! always reads the complete result of frame N.

use crate::core::EngineError;
use crate::domain::{ConfigPatch, EngineConfig, Rgb};
use crate::spatial::{BufferRole, FieldBuffer, FieldBuffers};
use crate::systems::compositor::Compositor;
use crate::systems::pointer::{PointerState, PointerTracker};

#[path = "clock/clock.rs"]
mod clock;
#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "frame/frame.rs"]
mod frame;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "input/input.rs"]
mod input;
mod facade;

pub use clock::FRAME_DT;
pub use facade::FluidBackdrop;
pub use perf_stats::PerfStats;

use clock::{SimulationClock, WallClock};

pub struct FluidCore {
    config: EngineConfig,
    buffers: FieldBuffers,
    compositor: Compositor,
    pointer: PointerTracker,
    clock: SimulationClock,
    wall: WallClock,
    disposed: bool,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl FluidCore {
    /// Allocate a simulator for a `width` x `height` viewport (one cell per
    /// pixel). Fails fast on zero or oversized dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self, EngineError> {
        init::create_core(width, height, EngineConfig::default())
    }

    pub fn with_config(width: u32, height: u32, config: EngineConfig) -> Result<Self, EngineError> {
        init::create_core(width, height, config)
    }

    pub fn width(&self) -> u32 { self.buffers.width() }

    pub fn height(&self) -> u32 { self.buffers.height() }

    /// Frames rendered since creation or the last resize
    pub fn frame(&self) -> u64 { self.buffers.frame() }

    /// Simulation time in seconds
    pub fn time(&self) -> f64 { self.clock.time() }

    pub fn is_disposed(&self) -> bool { self.disposed }

    /// Read-only view of the live configuration
    pub fn config(&self) -> &EngineConfig { &self.config }

    pub fn config_json(&self) -> String { self.config.to_json() }

    /// Run the kernel and compositor once, using the wall clock for the
    /// pointer idle timeout.
    pub fn render_frame(&mut self) -> Result<(), EngineError> {
        let now = self.wall.now_ms();
        self.render_frame_at(now)
    }

    /// `render_frame` with an explicit timestamp in milliseconds.
    pub fn render_frame_at(&mut self, now_ms: f64) -> Result<(), EngineError> {
        frame::render_frame(self, now_ms)
    }

    /// Reallocate every buffer for a new viewport; resets the frame counter
    /// and discards the field.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), EngineError> {
        settings::resize(self, width, height)
    }

    /// Merge a partial configuration. Takes effect from the next frame.
    pub fn update_config(&mut self, patch: &ConfigPatch) -> Result<(), EngineError> {
        settings::update_config(self, patch)
    }

    pub fn update_config_json(&mut self, json: &str) -> Result<(), EngineError> {
        let patch = ConfigPatch::from_json(json)?;
        self.update_config(&patch)
    }

    pub fn set_interaction_enabled(&mut self, enabled: bool) {
        settings::set_interaction_enabled(self, enabled);
    }

    pub fn set_colors(&mut self, colors: [Rgb; 4]) {
        settings::set_colors(self, colors);
    }

    /// Release both buffers and the frame. Later frames and resizes fail
    /// with [`EngineError::Disposed`].
    pub fn dispose(&mut self) {
        settings::dispose(self);
    }

    // === Pointer input (cell units, y up) ===

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        let now = self.wall.now_ms();
        self.pointer_move_at(x, y, now);
    }

    pub fn pointer_move_at(&mut self, x: f32, y: f32, now_ms: f64) {
        input::pointer_move(self, x, y, now_ms);
    }

    pub fn pointer_leave(&mut self) {
        input::pointer_leave(self);
    }

    pub fn pointer_state(&self) -> PointerState {
        self.pointer.state()
    }

    // === Read access ===

    /// Field written by the most recent frame
    pub fn field(&self) -> &FieldBuffer {
        self.buffers.read(BufferRole::Current)
    }

    pub fn buffers(&self) -> &FieldBuffers {
        &self.buffers
    }

    /// Sum of velocity magnitudes over the current field
    pub fn field_energy(&self) -> f64 {
        self.field().energy()
    }

    /// Last composited frame, packed ABGR, top row first
    pub fn pixels(&self) -> &[u32] {
        self.compositor.pixels()
    }

    pub fn pixels_ptr(&self) -> *const u32 {
        self.compositor.pixels().as_ptr()
    }

    pub fn pixels_len(&self) -> usize {
        self.compositor.pixels().len()
    }

    pub fn pixels_byte_len(&self) -> usize {
        self.pixels_len() * std::mem::size_of::<u32>()
    }

    // === Perf ===

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
        if !enabled {
            self.perf_stats.reset();
        }
    }

    /// Last frame's perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
