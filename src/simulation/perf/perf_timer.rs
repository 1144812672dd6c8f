use super::clock::WallClock;

/// Stopwatch for the per-phase timings in `PerfStats`
pub(crate) struct PerfTimer {
    clock: WallClock,
    start_ms: f64,
    lap_ms: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        let clock = WallClock::new();
        let now = clock.now_ms();
        PerfTimer { clock, start_ms: now, lap_ms: now }
    }

    /// Milliseconds since the previous lap (or since start)
    pub(crate) fn lap(&mut self) -> f64 {
        let now = self.clock.now_ms();
        let dt = now - self.lap_ms;
        self.lap_ms = now;
        dt
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        self.clock.now_ms() - self.start_ms
    }
}
