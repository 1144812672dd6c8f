//! Core building blocks shared by every layer: errors, logging, math.

#[macro_use]
#[path = "utils/safety.rs"]
pub mod safety;
pub mod error;
pub mod logging;
pub mod vec2;

pub use error::EngineError;
pub use vec2::Vec2;
