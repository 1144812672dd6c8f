#[cfg(target_arch = "wasm32")]
use js_sys;

/// Nominal display frame length the clock advances by, in seconds
pub const FRAME_DT: f64 = 1.0 / 60.0;

/// Simulation time, advanced once per rendered frame.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct SimulationClock {
    time: f64,
}

impl SimulationClock {
    /// Advance by one frame scaled by `speed`. Negative speeds are treated
    /// as zero so time never runs backwards.
    pub(crate) fn advance(&mut self, speed: f32) {
        self.time += FRAME_DT * f64::from(speed.max(0.0));
    }

    pub(crate) fn time(&self) -> f64 {
        self.time
    }
}

/// Millisecond wall clock used for the pointer idle timeout
#[derive(Clone, Copy)]
pub(crate) struct WallClock {
    #[cfg(not(target_arch = "wasm32"))]
    origin: std::time::Instant,
}

impl WallClock {
    pub(crate) fn new() -> Self {
        WallClock {
            #[cfg(not(target_arch = "wasm32"))]
            origin: std::time::Instant::now(),
        }
    }

    pub(crate) fn now_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.origin.elapsed().as_secs_f64() * 1000.0
        }
    }
}
