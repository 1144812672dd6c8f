//! Pointer forcing and idle dissipation.

use crate::core::Vec2;
use crate::domain::SimulationConfig;
use crate::spatial::Cell;
use crate::systems::pointer::PointerState;

/// Longest pointer displacement that still adds force, in cells
pub const DELTA_LIMIT: f32 = 8.0;
/// Displacement-to-velocity gain at full falloff
pub const FORCE_GAIN: f32 = 0.02;
/// Trail receives this multiple of the velocity impulse
pub const TRAIL_SHARE: f32 = 10.0;
/// Pointer speed (cells/frame) below which idle dissipation runs
pub const IDLE_SPEED: f32 = 2.0;

/// Per-frame pointer terms, computed once and shared by every cell
#[derive(Clone, Copy, Debug)]
pub struct PointerForce {
    active: bool,
    from: Vec2,
    to: Vec2,
    delta: Vec2,
    speed: f32,
    brush_size: f32,
    strength: f32,
    stop_decay: f32,
}

impl PointerForce {
    pub fn new(pointer: PointerState, config: &SimulationConfig) -> Self {
        Self {
            active: pointer.is_active(),
            from: pointer.previous(),
            to: pointer.position(),
            delta: pointer.delta().clamp_length(DELTA_LIMIT),
            speed: pointer.speed(),
            brush_size: config.brush_size,
            strength: config.brush_strength,
            stop_decay: config.stop_decay,
        }
    }

    #[inline]
    fn falloff(&self, distance: f32) -> f32 {
        if distance <= 0.0 {
            return 1.0;
        }
        (-distance / self.brush_size).exp()
    }

    /// Add the stroke impulse to `cell` at position `p`.
    #[inline]
    pub fn apply_stroke(&self, cell: &mut Cell, p: Vec2) {
        if !self.active {
            return;
        }
        let k = FORCE_GAIN * self.strength * self.falloff(p.distance_to_segment(self.from, self.to));
        cell.vx += self.delta.x * k;
        cell.vy += self.delta.y * k;
        cell.trail += self.delta.length() * k * TRAIL_SHARE;
    }

    /// Extra decay while the pointer rests; strongest next to the pointer,
    /// field-wide once the pointer is gone.
    #[inline]
    pub fn apply_idle(&self, cell: &mut Cell, p: Vec2) {
        if self.speed >= IDLE_SPEED {
            return;
        }
        let proximity = if self.active {
            self.falloff((p - self.to).length())
        } else {
            1.0
        };
        let keep = 1.0 + (self.stop_decay - 1.0) * proximity;
        cell.vx *= keep;
        cell.vy *= keep;
        cell.trail *= keep;
    }
}
