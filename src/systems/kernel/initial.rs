//! Cold-start state written on frame 0.

use crate::spatial::{Cell, FieldBuffer};

/// State of cell `(x, y)` on frame 0: still fluid, a soft pressure bump in
/// the middle, and vertical trail banding.
#[inline]
pub fn initial_cell(x: u32, y: u32, width: u32, height: u32) -> Cell {
    let cx = (width as f32 - 1.0) * 0.5;
    let cy = (height as f32 - 1.0) * 0.5;
    let dx = x as f32 - cx;
    let dy = y as f32 - cy;
    let dist_sq = dx * dx + dy * dy;
    Cell {
        vx: 0.0,
        vy: 0.0,
        pressure: 0.1 * (-0.001 * dist_sq).exp(),
        trail: 0.5 + 0.5 * (0.2 * x as f32).cos(),
    }
    .clamped()
}

pub fn fill_initial(field: &mut FieldBuffer) {
    let (w, h) = (field.width(), field.height());
    for (idx, cell) in field.cells_mut().iter_mut().enumerate() {
        let x = (idx % w as usize) as u32;
        let y = (idx / w as usize) as u32;
        *cell = initial_cell(x, y, w, h);
    }
}
