//! Time-seeded plasma recurrence that the fluid warps.

use crate::core::Vec2;

/// Number of coupled cosine terms
pub const PATTERN_TERMS: u32 = 8;

/// Run the coupled recurrence from `p`: each term bends x by a cosine of
/// the current y, then y by a cosine of the freshly bent x.
#[inline]
pub fn plasma(mut p: Vec2, time: f32) -> Vec2 {
    for i in 1..=PATTERN_TERMS {
        let k = i as f32;
        p.x += 0.6 / k * (k * 2.5 * p.y + time + 0.3 * k).cos();
        p.y += 0.6 / k * (k * 1.5 * p.x + time * 0.7).cos();
    }
    p
}

/// Three color-mix weights in `[0, 1]`: projections on x, y and x + y,
/// pulled toward 0.5 by `softness` (0 = untouched, 10 and above = flat).
#[inline]
pub fn mix_weights(p: Vec2, softness: f32) -> [f32; 3] {
    let pull = (softness / 10.0).clamp(0.0, 1.0);
    let soften = |w: f32| w + (0.5 - w) * pull;
    [
        soften(0.5 + 0.5 * p.x.cos()),
        soften(0.5 + 0.5 * p.y.cos()),
        soften(0.5 + 0.5 * (p.x + p.y).cos()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plasma_is_deterministic() {
        let p = Vec2::new(0.3, -0.7);
        assert_eq!(plasma(p, 1.25), plasma(p, 1.25));
    }

    #[test]
    fn plasma_evolves_with_time() {
        let p = Vec2::new(0.3, -0.7);
        assert_ne!(plasma(p, 0.0), plasma(p, 0.5));
    }

    #[test]
    fn weights_stay_in_unit_range() {
        for i in 0..50 {
            let p = Vec2::new(i as f32 * 0.37, -(i as f32) * 0.91);
            for w in mix_weights(p, 0.1) {
                assert!((0.0..=1.0).contains(&w));
            }
        }
    }

    #[test]
    fn max_softness_flattens_weights() {
        let w = mix_weights(Vec2::new(1.3, 2.9), 10.0);
        assert_eq!(w, [0.5, 0.5, 0.5]);
    }
}
