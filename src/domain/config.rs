//! Live engine configuration.
//!
//! The control panel owns the values; the orchestrator holds one
//! `EngineConfig` and mutates it only through `ConfigPatch`. Ranges in the
//! field docs are the panel's ranges and are not enforced here: the hard
//! channel clamp in the step kernel is the only safety net.

use serde::{Deserialize, Serialize};

use super::color::Rgb;

/// Parameters read by the step kernel and pointer tracker
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationConfig {
    /// Pointer falloff radius in cells (5..100)
    pub brush_size: f32,
    /// Pointer force multiplier (0.1..2.0)
    pub brush_strength: f32,
    /// Velocity retention per frame (0.9..1.0)
    pub fluid_decay: f32,
    /// Trail retention per frame (0.1..1.0)
    pub trail_length: f32,
    /// Extra retention near an idle pointer (0.5..1.0)
    pub stop_decay: f32,
    pub interaction_enabled: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            brush_size: 30.0,
            brush_strength: 1.0,
            fluid_decay: 0.98,
            trail_length: 0.8,
            stop_decay: 0.85,
            interaction_enabled: true,
        }
    }
}

/// Grain pattern generator
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum GrainKind {
    #[default]
    Film,
    Digital,
    Organic,
    Animated,
    Halftone,
}

impl From<u32> for GrainKind {
    fn from(index: u32) -> Self {
        match index {
            0 => GrainKind::Film,
            1 => GrainKind::Digital,
            2 => GrainKind::Organic,
            3 => GrainKind::Animated,
            _ => GrainKind::Halftone,
        }
    }
}

impl From<GrainKind> for u32 {
    fn from(kind: GrainKind) -> Self {
        kind as u32
    }
}

/// How grain is combined with the base color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum BlendMode {
    #[default]
    Overlay,
    Multiply,
    Screen,
    SoftLight,
    Linear,
}

impl From<u32> for BlendMode {
    fn from(index: u32) -> Self {
        match index {
            0 => BlendMode::Overlay,
            1 => BlendMode::Multiply,
            2 => BlendMode::Screen,
            3 => BlendMode::SoftLight,
            _ => BlendMode::Linear,
        }
    }
}

impl From<BlendMode> for u32 {
    fn from(mode: BlendMode) -> Self {
        mode as u32
    }
}

/// Grain post-filter settings
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrainConfig {
    pub enabled: bool,
    /// Mix of blended grain into the color (0..1)
    pub intensity: f32,
    /// Spatial frequency, grains per viewport height (10..500)
    pub size: f32,
    /// Temporal speed (0..5)
    pub speed: f32,
    /// Contrast around mid-grey (0.1..3)
    pub contrast: f32,
    pub kind: GrainKind,
    pub blend_mode: BlendMode,
}

impl Default for GrainConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            intensity: 0.1,
            size: 100.0,
            speed: 1.0,
            contrast: 1.0,
            kind: GrainKind::Film,
            blend_mode: BlendMode::Overlay,
        }
    }
}

/// Parameters read by the compositor
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayConfig {
    pub colors: [Rgb; 4],
    /// Velocity-to-warp gain (0.5..10)
    pub distortion_amount: f32,
    /// Final color multiplier (0.1..5)
    pub color_intensity: f32,
    /// Pull of the mix coefficients toward 0.5 (0.1..10)
    pub softness: f32,
    /// Spatial scale of the base pattern
    pub scale: f32,
    pub grain: GrainConfig,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            colors: [
                Rgb::new(0.05, 0.07, 0.20),
                Rgb::new(0.20, 0.45, 0.85),
                Rgb::new(0.95, 0.40, 0.55),
                Rgb::new(1.00, 0.90, 0.70),
            ],
            distortion_amount: 2.0,
            color_intensity: 1.0,
            softness: 1.0,
            scale: 1.0,
            grain: GrainConfig::default(),
        }
    }
}

/// Everything the orchestrator needs for one frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    pub simulation: SimulationConfig,
    pub display: DisplayConfig,
    /// Clock multiplier applied to each frame's time increment
    pub speed: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            display: DisplayConfig::default(),
            speed: 1.0,
        }
    }
}

impl EngineConfig {
    pub fn to_json(&self) -> String {
        // Plain data with finite-or-not floats; serde_json writes non-finite as null.
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }
}
