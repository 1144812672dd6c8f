//! Pointer force tracker
//!
//! Holds `(x, y, prev_x, prev_y)` in cell units (y up). All four at zero means
//! inactive; there is no separate flag. The orchestrator calls
//! [`PointerTracker::refresh`] once per frame before the kernel runs.

use crate::core::Vec2;

/// Pointer counts as idle after this long without a move event.
pub const IDLE_TIMEOUT_MS: f64 = 100.0;

/// Snapshot consumed by one kernel step
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub prev_x: f32,
    pub prev_y: f32,
}

impl PointerState {
    pub const INACTIVE: PointerState = PointerState { x: 0.0, y: 0.0, prev_x: 0.0, prev_y: 0.0 };

    #[inline]
    pub fn is_active(&self) -> bool {
        self.x != 0.0 || self.y != 0.0 || self.prev_x != 0.0 || self.prev_y != 0.0
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn previous(&self) -> Vec2 {
        Vec2::new(self.prev_x, self.prev_y)
    }

    /// Movement since the previous event
    #[inline]
    pub fn delta(&self) -> Vec2 {
        self.position() - self.previous()
    }

    /// Instantaneous speed in cells per frame
    #[inline]
    pub fn speed(&self) -> f32 {
        self.delta().length()
    }
}

#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    state: PointerState,
    last_move_ms: Option<f64>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    /// Record a move event at `now_ms`.
    pub fn on_move(&mut self, x: f32, y: f32, now_ms: f64) {
        self.state.prev_x = self.state.x;
        self.state.prev_y = self.state.y;
        self.state.x = x;
        self.state.y = y;
        self.last_move_ms = Some(now_ms);
    }

    pub fn on_leave(&mut self) {
        self.reset();
    }

    pub fn reset(&mut self) {
        self.state = PointerState::INACTIVE;
        self.last_move_ms = None;
    }

    /// Per-frame gate: force inactive when interaction is off or the last
    /// move is older than [`IDLE_TIMEOUT_MS`]. Returns the state to use for
    /// this frame.
    pub fn refresh(&mut self, now_ms: f64, interaction_enabled: bool) -> PointerState {
        let idle = match self.last_move_ms {
            Some(t) => now_ms - t > IDLE_TIMEOUT_MS,
            None => true,
        };
        if !interaction_enabled || idle {
            self.reset();
        }
        self.state
    }
}
