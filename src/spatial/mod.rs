//! Field storage: per-cell state, sampling, and the ping-pong buffer pair.

pub mod buffers;
pub mod field;

pub use buffers::{BufferRole, FieldBuffers};
pub use field::{Cell, FieldBuffer, CHANNEL_LIMIT};
