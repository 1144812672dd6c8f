//! Field buffer - one complete snapshot of simulation state
//!
//! Cells are stored row-major, row 0 at the bottom (simulation y points up).
//! Each cell carries four channels like an RGBA float texel, which keeps one
//! cell in one cache line quarter and lets rows be handed out as disjoint
//! `&mut [Cell]` slices to parallel workers.

use crate::core::error::check_dimensions;
use crate::core::{EngineError, Vec2};

mod indexing;
mod sampling;

/// Hard bound applied to every channel after every step.
pub const CHANNEL_LIMIT: f32 = 0.4;

/// State of a single grid cell
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cell {
    pub vx: f32,
    pub vy: f32,
    /// Pseudo-pressure; diffusion target and velocity feedback source
    pub pressure: f32,
    /// Slow-fading accumulator that makes strokes visible
    pub trail: f32,
}

impl Cell {
    pub const ZERO: Cell = Cell { vx: 0.0, vy: 0.0, pressure: 0.0, trail: 0.0 };

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.vx, self.vy)
    }

    #[inline]
    pub fn lerp(self, other: Cell, t: f32) -> Cell {
        Cell {
            vx: self.vx + (other.vx - self.vx) * t,
            vy: self.vy + (other.vy - self.vy) * t,
            pressure: self.pressure + (other.pressure - self.pressure) * t,
            trail: self.trail + (other.trail - self.trail) * t,
        }
    }

    /// Bound every channel to `[-CHANNEL_LIMIT, CHANNEL_LIMIT]`. NaN becomes
    /// 0 so one bad cell cannot spread through sampling.
    #[inline]
    pub fn clamped(self) -> Cell {
        let c = |v: f32| if v.is_nan() { 0.0 } else { v.clamp(-CHANNEL_LIMIT, CHANNEL_LIMIT) };
        Cell { vx: c(self.vx), vy: c(self.vy), pressure: c(self.pressure), trail: c(self.trail) }
    }

    #[inline]
    pub fn channels(&self) -> [f32; 4] {
        [self.vx, self.vy, self.pressure, self.trail]
    }
}

impl std::ops::Add for Cell {
    type Output = Cell;
    #[inline]
    fn add(self, rhs: Cell) -> Cell {
        Cell {
            vx: self.vx + rhs.vx,
            vy: self.vy + rhs.vy,
            pressure: self.pressure + rhs.pressure,
            trail: self.trail + rhs.trail,
        }
    }
}

impl std::ops::Mul<f32> for Cell {
    type Output = Cell;
    #[inline]
    fn mul(self, k: f32) -> Cell {
        Cell { vx: self.vx * k, vy: self.vy * k, pressure: self.pressure * k, trail: self.trail * k }
    }
}

/// A width x height grid of cells
#[derive(Clone, Debug, Default)]
pub struct FieldBuffer {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl FieldBuffer {
    pub fn new(width: u32, height: u32) -> Result<Self, EngineError> {
        check_dimensions(width, height)?;
        let size = (width as usize) * (height as usize);
        Ok(Self { width, height, cells: vec![Cell::ZERO; size] })
    }

    /// A 0x0 buffer owning no memory
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Sum of velocity magnitudes over all cells
    pub fn energy(&self) -> f64 {
        self.cells.iter().map(|c| c.velocity().length() as f64).sum()
    }

    /// Largest absolute value of any channel. NaN if any channel is NaN.
    pub fn max_abs_channel(&self) -> f32 {
        self.cells
            .iter()
            .flat_map(|c| c.channels())
            .fold(0.0f32, |m, v| if m.is_nan() || v.is_nan() { f32::NAN } else { m.max(v.abs()) })
    }
}
