//! Ping-pong pair of field buffers.
//!
//! Two owned buffers plus an index saying which one is *current*. A step
//! reads current and writes the other one, then `swap` flips the index.
//! Nothing is copied between buffers.

use crate::core::error::check_dimensions;
use crate::core::EngineError;

use super::field::{Cell, FieldBuffer};

/// Label of a buffer within the pair
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferRole {
    /// Holds the most recently completed step
    Current,
    /// Holds the step before that; next write target
    Previous,
}

pub struct FieldBuffers {
    buffers: [FieldBuffer; 2],
    current: usize,
    /// Frame number that last wrote each slot (`None` = never written)
    generations: [Option<u64>; 2],
    frame: u64,
}

impl FieldBuffers {
    pub fn new(width: u32, height: u32) -> Result<Self, EngineError> {
        check_dimensions(width, height)?;
        Ok(Self {
            buffers: [FieldBuffer::new(width, height)?, FieldBuffer::new(width, height)?],
            current: 0,
            generations: [None, None],
            frame: 0,
        })
    }

    #[inline]
    fn slot(&self, role: BufferRole) -> usize {
        match role {
            BufferRole::Current => self.current,
            BufferRole::Previous => self.current ^ 1,
        }
    }

    pub fn width(&self) -> u32 {
        self.buffers[0].width()
    }

    pub fn height(&self) -> u32 {
        self.buffers[0].height()
    }

    /// Frames completed since the last allocation
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn is_disposed(&self) -> bool {
        self.buffers[0].is_empty()
    }

    pub fn read(&self, role: BufferRole) -> &FieldBuffer {
        &self.buffers[self.slot(role)]
    }

    pub fn write(&mut self, role: BufferRole, x: u32, y: u32, cell: Cell) {
        let slot = self.slot(role);
        self.buffers[slot].set(x, y, cell);
    }

    pub fn generation(&self, role: BufferRole) -> Option<u64> {
        self.generations[self.slot(role)]
    }

    /// Borrow the step source (current) and target (previous) together.
    ///
    /// The two references always point at different buffers, so a step can
    /// never read what it is writing.
    pub fn split(&mut self) -> (&FieldBuffer, &mut FieldBuffer) {
        let [a, b] = &mut self.buffers;
        if self.current == 0 {
            (&*a, b)
        } else {
            (&*b, a)
        }
    }

    /// Promote the just-written buffer to current and advance the frame.
    pub fn swap(&mut self) {
        let written = self.current ^ 1;
        self.generations[written] = Some(self.frame);
        self.current = written;
        self.frame += 1;
    }

    /// Reallocate both buffers, discarding all history.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), EngineError> {
        *self = FieldBuffers::new(width, height)?;
        Ok(())
    }

    /// Release both buffers. Reads afterwards see empty 0x0 buffers.
    pub fn dispose(&mut self) {
        self.buffers = [FieldBuffer::empty(), FieldBuffer::empty()];
        self.generations = [None, None];
        self.current = 0;
        self.frame = 0;
    }
}
