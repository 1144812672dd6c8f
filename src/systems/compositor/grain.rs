//! Grain post-filter: five generators, five blend modes.

use crate::core::Vec2;
use crate::domain::{BlendMode, GrainConfig, GrainKind, Rgb};

#[inline]
fn fract(v: f32) -> f32 {
    v - v.floor()
}

/// Cheap 2D hash in `[0, 1)`
#[inline]
fn hash(p: Vec2) -> f32 {
    // fold into a small range first so sin keeps its precision
    let x = p.x.rem_euclid(289.0);
    let y = p.y.rem_euclid(289.0);
    fract((x * 12.9898 + y * 78.233).sin() * 43758.547)
}

#[inline]
fn smooth(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Smoothly interpolated lattice noise in `[0, 1)`
fn value_noise(p: Vec2) -> f32 {
    let i = Vec2::new(p.x.floor(), p.y.floor());
    let f = Vec2::new(smooth(p.x - i.x), smooth(p.y - i.y));
    let a = hash(i);
    let b = hash(i + Vec2::new(1.0, 0.0));
    let c = hash(i + Vec2::new(0.0, 1.0));
    let d = hash(i + Vec2::new(1.0, 1.0));
    let bottom = a + (b - a) * f.x;
    let top = c + (d - c) * f.x;
    bottom + (top - bottom) * f.y
}

impl GrainKind {
    /// Grain value in `[0, 1]` at grain-space point `p`, animation time `t`.
    pub fn sample(self, p: Vec2, t: f32) -> f32 {
        match self {
            GrainKind::Film => {
                let frame = (t * 24.0).floor();
                hash(Vec2::new(p.x.floor() + frame * 17.3, p.y.floor() + frame * 91.7))
            }
            GrainKind::Digital => {
                let block = Vec2::new((p.x * 0.5).floor(), (p.y * 0.5).floor());
                let frame = (t * 12.0).floor();
                let n = hash(block + Vec2::new(frame * 3.1, frame * 7.7));
                (n * 4.0).floor().min(3.0) / 3.0
            }
            GrainKind::Organic => {
                let q = p * 0.35 + Vec2::new(t * 0.3, t * 0.2);
                0.65 * value_noise(q) + 0.35 * value_noise(q * 2.03 + Vec2::new(5.2, 1.3))
            }
            GrainKind::Animated => {
                let drift = value_noise(p + Vec2::new(t * 3.0, -t * 2.0));
                let sparkle = hash(Vec2::new(p.x.floor(), p.y.floor() + (t * 30.0).floor()));
                0.5 * drift + 0.5 * sparkle
            }
            GrainKind::Halftone => {
                let (s, c) = std::f32::consts::FRAC_PI_4.sin_cos();
                let r = Vec2::new(p.x * c - p.y * s, p.x * s + p.y * c);
                let cell = Vec2::new(fract(r.x) - 0.5, fract(r.y) - 0.5);
                let radius = 0.3 + 0.1 * (t * 2.0).sin();
                let d = cell.length();
                let edge = ((d - (radius - 0.1)) / 0.2).clamp(0.0, 1.0);
                1.0 - smooth(edge)
            }
        }
    }
}

impl BlendMode {
    /// Blend one channel of `grain` onto `base`, both in `[0, 1]`.
    #[inline]
    pub fn blend(self, base: f32, grain: f32) -> f32 {
        match self {
            BlendMode::Overlay => {
                if base < 0.5 {
                    2.0 * base * grain
                } else {
                    1.0 - 2.0 * (1.0 - base) * (1.0 - grain)
                }
            }
            BlendMode::Multiply => base * grain,
            BlendMode::Screen => 1.0 - (1.0 - base) * (1.0 - grain),
            BlendMode::SoftLight => (1.0 - 2.0 * grain) * base * base + 2.0 * grain * base,
            BlendMode::Linear => (base + grain - 0.5).clamp(0.0, 1.0),
        }
    }
}

/// Apply grain to a composited pixel. `frag` is the pixel position,
/// `height` the viewport height in pixels.
pub fn apply(color: Rgb, frag: Vec2, height: f32, time: f32, grain: &GrainConfig) -> Rgb {
    let p = frag * (grain.size / height);
    let raw = grain.kind.sample(p, time * grain.speed);
    let g = ((raw - 0.5) * grain.contrast + 0.5).clamp(0.0, 1.0);
    let blended = color.map(|c| grain.blend_mode.blend(c, g));
    color.lerp(blended, grain.intensity).saturate()
}
