//! Simulation step kernel
//!
//! `step` is a pure function of (previous field, pointer, frame, config) that
//! fills the next field. Each cell is computed independently from the
//! previous field only, so rows run in parallel on the rayon pool when the
//! `parallel` feature is on.
//!
//! Per cell:
//! 1. back-trace the cell and its four diagonal neighbours through the
//!    velocity field
//! 2. gather N/E/S/W around the traced centre and average them
//! 3. blend toward that average (velocity and trail lightly, pressure almost
//!    fully)
//! 4. penalise the traced corner area's deviation from rest in pressure
//! 5. feed the pressure gradient back into velocity
//! 6. decay velocity and trail
//! 7. pointer stroke impulse
//! 8. idle dissipation
//! 9. clamp every channel to `[-CHANNEL_LIMIT, CHANNEL_LIMIT]`

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::Vec2;
use crate::domain::SimulationConfig;
use crate::spatial::{Cell, FieldBuffer};
use crate::systems::pointer::PointerState;

pub mod advection;
pub mod forcing;
pub mod initial;

use advection::{quad_area, trace_back, trace_corners, REST_AREA};
use forcing::PointerForce;

pub const VELOCITY_DIFFUSION: f32 = 0.15;
pub const TRAIL_DIFFUSION: f32 = 0.15;
pub const PRESSURE_DIFFUSION: f32 = 0.95;
/// Pressure change per unit of corner-area distortion
pub const AREA_PENALTY: f32 = 0.01;
/// Pressure-gradient to velocity gain before resolution normalisation
pub const PRESSURE_FEEDBACK: f32 = 100.0;
/// Grid edges shorter than this are normalised as if they had this many
/// cells. Below it the explicit feedback loop gain exceeds one and the
/// field oscillates out to the clamp.
pub const MIN_FEEDBACK_RESOLUTION: f32 = 256.0;

/// Frame-invariant inputs shared by every cell of one step
#[derive(Clone, Copy, Debug)]
pub struct StepParams {
    force: PointerForce,
    fluid_decay: f32,
    trail_length: f32,
    feedback: Vec2,
}

impl StepParams {
    pub fn new(width: u32, height: u32, pointer: PointerState, config: &SimulationConfig) -> Self {
        let res = |n: u32| (n as f32).max(MIN_FEEDBACK_RESOLUTION);
        Self {
            force: PointerForce::new(pointer, config),
            fluid_decay: config.fluid_decay,
            trail_length: config.trail_length,
            feedback: Vec2::new(PRESSURE_FEEDBACK / res(width), PRESSURE_FEEDBACK / res(height)),
        }
    }
}

/// Compute the next state of cell `(x, y)` from `prev`.
pub fn step_cell(prev: &FieldBuffer, x: u32, y: u32, params: &StepParams) -> Cell {
    let here = Vec2::new(x as f32, y as f32);

    let center = trace_back(prev, here);
    let corners = trace_corners(prev, here);

    let own = prev.sample(center);
    let north = prev.sample(center + Vec2::new(0.0, 1.0));
    let east = prev.sample(center + Vec2::new(1.0, 0.0));
    let south = prev.sample(center + Vec2::new(0.0, -1.0));
    let west = prev.sample(center + Vec2::new(-1.0, 0.0));
    let avg = (north + east + south + west) * 0.25;

    let mut cell = Cell {
        vx: own.vx + (avg.vx - own.vx) * VELOCITY_DIFFUSION,
        vy: own.vy + (avg.vy - own.vy) * VELOCITY_DIFFUSION,
        pressure: own.pressure + (avg.pressure - own.pressure) * PRESSURE_DIFFUSION,
        trail: own.trail + (avg.trail - own.trail) * TRAIL_DIFFUSION,
    };

    cell.pressure -= AREA_PENALTY * (quad_area(&corners) - REST_AREA);

    cell.vx += params.feedback.x * (east.pressure - west.pressure);
    cell.vy += params.feedback.y * (north.pressure - south.pressure);

    cell.vx *= params.fluid_decay;
    cell.vy *= params.fluid_decay;
    cell.trail *= params.trail_length;

    params.force.apply_stroke(&mut cell, here);
    params.force.apply_idle(&mut cell, here);

    cell.clamped()
}

#[inline]
fn step_row(prev: &FieldBuffer, row: &mut [Cell], y: u32, params: &StepParams) {
    for (x, out) in row.iter_mut().enumerate() {
        *out = step_cell(prev, x as u32, y, params);
    }
}

/// Advance one frame: read `prev`, write every cell of `next`.
///
/// Frame 0 ignores `prev` and writes the cold-start state.
pub fn step(
    prev: &FieldBuffer,
    next: &mut FieldBuffer,
    frame: u64,
    pointer: PointerState,
    config: &SimulationConfig,
) {
    debug_assert_eq!(
        (prev.width(), prev.height()),
        (next.width(), next.height()),
        "step: source and target fields differ in size"
    );

    if frame == 0 {
        initial::fill_initial(next);
        return;
    }

    let params = StepParams::new(next.width(), next.height(), pointer, config);
    let width = next.width() as usize;

    #[cfg(feature = "parallel")]
    {
        next.cells_mut()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| step_row(prev, row, y as u32, &params));
    }

    #[cfg(not(feature = "parallel"))]
    {
        for (y, row) in next.cells_mut().chunks_mut(width).enumerate() {
            step_row(prev, row, y as u32, &params);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::CHANNEL_LIMIT;

    fn cold_field(w: u32, h: u32) -> FieldBuffer {
        let mut f = FieldBuffer::new(w, h).unwrap();
        initial::fill_initial(&mut f);
        f
    }

    #[test]
    fn frame_zero_writes_initial_condition() {
        let prev = FieldBuffer::new(8, 6).unwrap();
        let mut next = FieldBuffer::new(8, 6).unwrap();
        step(&prev, &mut next, 0, PointerState::INACTIVE, &SimulationConfig::default());
        assert_eq!(next.get(3, 4), initial::initial_cell(3, 4, 8, 6));
    }

    #[test]
    fn uniform_still_field_stays_still() {
        let mut prev = FieldBuffer::new(8, 8).unwrap();
        for c in prev.cells_mut() {
            c.pressure = 0.2;
            c.trail = 0.3;
        }
        let mut next = FieldBuffer::new(8, 8).unwrap();
        let cfg = SimulationConfig { fluid_decay: 1.0, trail_length: 1.0, stop_decay: 1.0, ..Default::default() };
        step(&prev, &mut next, 1, PointerState::INACTIVE, &cfg);
        for c in next.cells() {
            assert_eq!(c.vx, 0.0);
            assert_eq!(c.vy, 0.0);
            assert!((c.pressure - 0.2).abs() < 1e-6);
            assert!((c.trail - 0.3).abs() < 1e-6);
        }
    }

    #[test]
    fn decay_scales_velocity_and_trail() {
        let mut prev = FieldBuffer::new(8, 8).unwrap();
        for c in prev.cells_mut() {
            *c = Cell { vx: 0.1, vy: 0.0, pressure: 0.0, trail: 0.2 };
        }
        let mut next = FieldBuffer::new(8, 8).unwrap();
        let cfg = SimulationConfig { fluid_decay: 0.5, trail_length: 0.25, stop_decay: 1.0, ..Default::default() };
        step(&prev, &mut next, 1, PointerState::INACTIVE, &cfg);
        let c = next.get(4, 4);
        assert!((c.vx - 0.05).abs() < 1e-6);
        assert!((c.trail - 0.05).abs() < 1e-6);
    }

    #[test]
    fn pressure_gradient_drives_velocity_toward_high_pressure() {
        let mut prev = FieldBuffer::new(16, 16).unwrap();
        for (i, c) in prev.cells_mut().iter_mut().enumerate() {
            c.pressure = (i % 16) as f32 * 0.01;
        }
        let mut next = FieldBuffer::new(16, 16).unwrap();
        let cfg = SimulationConfig { stop_decay: 1.0, ..Default::default() };
        step(&prev, &mut next, 1, PointerState::INACTIVE, &cfg);
        let c = next.get(8, 8);
        assert!(c.vx > 0.0);
        assert!(c.vy.abs() < 1e-6);
    }

    #[test]
    fn stroke_injects_velocity_and_trail() {
        let prev = cold_field(32, 32);
        let mut next = FieldBuffer::new(32, 32).unwrap();
        let pointer = PointerState { x: 20.0, y: 16.0, prev_x: 12.0, prev_y: 16.0 };
        step(&prev, &mut next, 1, pointer, &SimulationConfig::default());
        let on_stroke = next.get(16, 16);
        let far = next.get(16, 0);
        assert!(on_stroke.vx > 0.1);
        assert!(on_stroke.vx > far.vx);
        assert!(on_stroke.trail > 0.0);
    }

    #[test]
    fn saturated_input_stays_clamped() {
        let mut prev = FieldBuffer::new(12, 12).unwrap();
        for (i, c) in prev.cells_mut().iter_mut().enumerate() {
            let s = if i % 3 == 0 { 1.0 } else { -1.0 };
            *c = Cell { vx: 0.4 * s, vy: -0.4 * s, pressure: 0.4 * s, trail: 0.4 };
        }
        let mut next = FieldBuffer::new(12, 12).unwrap();
        let cfg = SimulationConfig { fluid_decay: 1.5, trail_length: 1.5, ..Default::default() };
        let pointer = PointerState { x: 6.0, y: 6.0, prev_x: 1.0, prev_y: 1.0 };
        step(&prev, &mut next, 5, pointer, &cfg);
        assert!(next.max_abs_channel() <= CHANNEL_LIMIT);
    }
}
