//! Semi-Lagrangian back-tracing and the area-distortion measure.

use crate::core::Vec2;
use crate::spatial::FieldBuffer;

/// Back-tracing iterations per sample point
pub const ADVECTION_STEPS: usize = 8;

/// Area spanned by the undistorted diagonal corners (a 2x2 square).
pub const REST_AREA: f32 = 4.0;

/// Diagonal corner offsets, counter-clockwise from bottom-left
const CORNERS: [Vec2; 4] = [
    Vec2 { x: -1.0, y: -1.0 },
    Vec2 { x: 1.0, y: -1.0 },
    Vec2 { x: 1.0, y: 1.0 },
    Vec2 { x: -1.0, y: 1.0 },
];

/// Walk backwards along the velocity field from `p`.
#[inline]
pub fn trace_back(prev: &FieldBuffer, mut p: Vec2) -> Vec2 {
    for _ in 0..ADVECTION_STEPS {
        p -= prev.sample_velocity(p);
    }
    p
}

/// Back-trace the four diagonal neighbours of `center`.
#[inline]
pub fn trace_corners(prev: &FieldBuffer, center: Vec2) -> [Vec2; 4] {
    CORNERS.map(|offset| trace_back(prev, center + offset))
}

#[inline]
fn triangle_area(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    0.5 * (b - a).cross(c - a).abs()
}

/// Sum of the two triangles (a, b, c) and (a, c, d).
#[inline]
pub fn quad_area(corners: &[Vec2; 4]) -> f32 {
    let [a, b, c, d] = *corners;
    triangle_area(a, b, c) + triangle_area(a, c, d)
}
