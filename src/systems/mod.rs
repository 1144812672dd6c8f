//! Per-frame systems: pointer gating, the step kernel and the compositor.

pub mod compositor;
pub mod kernel;
pub mod pointer;
