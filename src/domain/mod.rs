//! Domain types handed to the engine by its collaborators.

pub mod color;
pub mod config;
pub mod patch;

pub use color::Rgb;
pub use config::{BlendMode, DisplayConfig, EngineConfig, GrainConfig, GrainKind, SimulationConfig};
pub use patch::ConfigPatch;
