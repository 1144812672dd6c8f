use super::*;

impl FieldBuffer {
    /// Bilinear sample at a continuous cell position.
    ///
    /// Cell `(x, y)` sits exactly at `(x, y)`. Positions outside the grid are
    /// clamped to the edge, so sampling is total for any finite input.
    #[inline]
    pub fn sample(&self, p: Vec2) -> Cell {
        let max_x = (self.width - 1) as f32;
        let max_y = (self.height - 1) as f32;
        // NaN positions fall back to the origin cell
        let px = if p.x.is_nan() { 0.0 } else { p.x.clamp(0.0, max_x) };
        let py = if p.y.is_nan() { 0.0 } else { p.y.clamp(0.0, max_y) };

        let x0 = px.floor() as u32;
        let y0 = py.floor() as u32;
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);
        let fx = px - x0 as f32;
        let fy = py - y0 as f32;

        let bottom = self.get(x0, y0).lerp(self.get(x1, y0), fx);
        let top = self.get(x0, y1).lerp(self.get(x1, y1), fx);
        bottom.lerp(top, fy)
    }

    #[inline]
    pub fn sample_velocity(&self, p: Vec2) -> Vec2 {
        self.sample(p).velocity()
    }
}
