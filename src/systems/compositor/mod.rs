//! Display compositor
//!
//! Turns the current field into one RGBA frame: warp a plasma pattern by the
//! local velocity, blend the four palette colors by the pattern, then run
//! the optional grain filter. Output is packed ABGR, top row first, so the
//! page can copy it straight into an `ImageData`.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::error::check_dimensions;
use crate::core::{EngineError, Vec2};
use crate::domain::{DisplayConfig, Rgb};
use crate::spatial::{Cell, FieldBuffer};

pub mod grain;
pub mod pattern;

/// Share of the last palette color at full weight
pub const ACCENT_WEIGHT: f32 = 0.4;

/// Shade one pixel. `frag` is the pixel position (y up), `size` the
/// viewport in pixels.
pub fn shade(cell: &Cell, frag: Vec2, size: Vec2, time: f32, config: &DisplayConfig) -> Rgb {
    // centred: x in [-aspect, aspect], y in [-1, 1]
    let uv = Vec2::new(
        (2.0 * frag.x + 1.0 - size.x) / size.y,
        (2.0 * frag.y + 1.0 - size.y) / size.y,
    );
    let warped = uv + cell.velocity() * (0.5 * config.distortion_amount);

    let q = pattern::plasma(warped * config.scale, time);
    let [w1, w2, w3] = pattern::mix_weights(q, config.softness);

    let [c1, c2, c3, c4] = config.colors;
    let color = c1
        .lerp(c2, w1)
        .lerp(c3, w2)
        .lerp(c4, w3 * ACCENT_WEIGHT)
        .scale(config.color_intensity)
        .saturate();

    if config.grain.enabled {
        grain::apply(color, frag, size.y, time, &config.grain)
    } else {
        color
    }
}

/// Owns the output frame
#[derive(Default)]
pub struct Compositor {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Compositor {
    pub fn new(width: u32, height: u32) -> Result<Self, EngineError> {
        let mut compositor = Self::default();
        compositor.resize(width, height)?;
        Ok(compositor)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), EngineError> {
        check_dimensions(width, height)?;
        self.width = width;
        self.height = height;
        self.pixels = vec![0xFF00_0000; (width as usize) * (height as usize)];
        Ok(())
    }

    pub fn dispose(&mut self) {
        *self = Self::default();
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Packed ABGR pixels, top row first
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Render `field` into the frame. The field must match the frame size.
    pub fn render(&mut self, field: &FieldBuffer, config: &DisplayConfig, time: f32) {
        debug_assert_eq!((field.width(), field.height()), (self.width, self.height));
        let width = self.width as usize;
        let height = self.height;
        let size = Vec2::new(self.width as f32, height as f32);

        let shade_row = |(row, out): (usize, &mut [u32])| {
            let y = height - 1 - row as u32;
            for (x, (px, cell)) in out.iter_mut().zip(field.row(y)).enumerate() {
                let frag = Vec2::new(x as f32, y as f32);
                *px = shade(cell, frag, size, time, config).to_abgr();
            }
        };

        #[cfg(feature = "parallel")]
        {
            self.pixels.par_chunks_mut(width).enumerate().for_each(shade_row);
        }

        #[cfg(not(feature = "parallel"))]
        {
            self.pixels.chunks_mut(width).enumerate().for_each(shade_row);
        }
    }
}
