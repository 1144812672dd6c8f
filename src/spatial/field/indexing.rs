use super::*;

impl FieldBuffer {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.cells.len() }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    // === Cell access ===
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Cell {
        debug_assert!(
            x < self.width && y < self.height,
            "get: out of bounds ({}, {}) for {}x{} field",
            x,
            y,
            self.width,
            self.height
        );
        *fast!(self.cells, [self.index(x, y)])
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, cell: Cell) {
        let idx = self.index(x, y);
        self.cells[idx] = cell;
    }

    /// Row `y` as a slice, bottom row first
    #[inline]
    pub fn row(&self, y: u32) -> &[Cell] {
        let start = self.index(0, y);
        &self.cells[start..start + self.width as usize]
    }
}
