//! Partial configuration updates from the control panel.
//!
//! Keys are the panel's flat parameter names (`brushSize`, `grainType`, ...)
//! so a page can forward its change events verbatim as JSON.

use serde::Deserialize;

use super::color::Rgb;
use super::config::{BlendMode, EngineConfig, GrainKind};
use crate::core::EngineError;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigPatch {
    pub brush_size: Option<f32>,
    pub brush_strength: Option<f32>,
    pub distortion_amount: Option<f32>,
    pub fluid_decay: Option<f32>,
    pub trail_length: Option<f32>,
    pub stop_decay: Option<f32>,
    pub color_intensity: Option<f32>,
    pub softness: Option<f32>,
    pub interaction_enabled: Option<bool>,
    pub speed: Option<f32>,
    pub scale: Option<f32>,
    pub colors: Option<[Rgb; 4]>,
    pub grain_enabled: Option<bool>,
    pub grain_intensity: Option<f32>,
    pub grain_size: Option<f32>,
    pub grain_speed: Option<f32>,
    pub grain_contrast: Option<f32>,
    pub grain_type: Option<GrainKind>,
    pub grain_blend_mode: Option<BlendMode>,
}

fn set<T>(slot: &mut T, value: Option<T>, applied: &mut usize) {
    if let Some(v) = value {
        *slot = v;
        *applied += 1;
    }
}

impl ConfigPatch {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Merge every present field into `config`; returns how many were set.
    pub fn apply(&self, config: &mut EngineConfig) -> usize {
        let mut n = 0;
        let sim = &mut config.simulation;
        set(&mut sim.brush_size, self.brush_size, &mut n);
        set(&mut sim.brush_strength, self.brush_strength, &mut n);
        set(&mut sim.fluid_decay, self.fluid_decay, &mut n);
        set(&mut sim.trail_length, self.trail_length, &mut n);
        set(&mut sim.stop_decay, self.stop_decay, &mut n);
        set(&mut sim.interaction_enabled, self.interaction_enabled, &mut n);

        let display = &mut config.display;
        set(&mut display.distortion_amount, self.distortion_amount, &mut n);
        set(&mut display.color_intensity, self.color_intensity, &mut n);
        set(&mut display.softness, self.softness, &mut n);
        set(&mut display.scale, self.scale, &mut n);
        set(&mut display.colors, self.colors, &mut n);

        let grain = &mut display.grain;
        set(&mut grain.enabled, self.grain_enabled, &mut n);
        set(&mut grain.intensity, self.grain_intensity, &mut n);
        set(&mut grain.size, self.grain_size, &mut n);
        set(&mut grain.speed, self.grain_speed, &mut n);
        set(&mut grain.contrast, self.grain_contrast, &mut n);
        set(&mut grain.kind, self.grain_type, &mut n);
        set(&mut grain.blend_mode, self.grain_blend_mode, &mut n);

        set(&mut config.speed, self.speed, &mut n);
        n
    }
}
