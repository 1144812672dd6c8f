use wasm_bindgen::prelude::*;

use crate::core::EngineError;
use crate::domain::Rgb;

use super::perf_stats::PerfStats;
use super::FluidCore;

fn to_js(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Browser handle: one instance per canvas.
///
/// Typical page loop: forward pointer events in cell units (y up), call
/// `render_frame` from `requestAnimationFrame`, then copy
/// `pixels_byte_len` bytes from `pixels_ptr` into an `ImageData`.
#[wasm_bindgen]
pub struct FluidBackdrop {
    core: FluidCore,
}

#[wasm_bindgen]
impl FluidBackdrop {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<FluidBackdrop, JsValue> {
        let core = FluidCore::new(width, height).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Simulation time in seconds
    #[wasm_bindgen(getter)]
    pub fn time(&self) -> f64 { self.core.time() }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Step the field and composite one frame
    pub fn render_frame(&mut self) -> Result<(), JsValue> {
        self.core.render_frame().map_err(to_js)
    }

    /// Same as `render_frame` but with a caller-supplied timestamp, e.g. the
    /// `requestAnimationFrame` argument
    pub fn render_frame_at(&mut self, now_ms: f64) -> Result<(), JsValue> {
        self.core.render_frame_at(now_ms).map_err(to_js)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), JsValue> {
        self.core.resize(width, height).map_err(to_js)
    }

    /// Merge a partial config given as JSON (panel parameter names)
    pub fn update_config(&mut self, json: &str) -> Result<(), JsValue> {
        self.core.update_config_json(json).map_err(to_js)
    }

    /// Full live config as JSON
    pub fn config_json(&self) -> String {
        self.core.config_json()
    }

    pub fn set_interaction_enabled(&mut self, enabled: bool) {
        self.core.set_interaction_enabled(enabled);
    }

    /// Replace the palette with 12 floats: four RGB triples in `[0, 1]`
    pub fn set_colors(&mut self, rgb: &[f32]) -> Result<(), JsValue> {
        if rgb.len() != 12 {
            return Err(JsValue::from_str(&format!(
                "set_colors expects 12 floats, got {}",
                rgb.len()
            )));
        }
        let c = |i: usize| Rgb::new(rgb[i * 3], rgb[i * 3 + 1], rgb[i * 3 + 2]);
        self.core.set_colors([c(0), c(1), c(2), c(3)]);
        Ok(())
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.core.pointer_move(x, y);
    }

    pub fn pointer_move_at(&mut self, x: f32, y: f32, now_ms: f64) {
        self.core.pointer_move_at(x, y, now_ms);
    }

    pub fn pointer_leave(&mut self) {
        self.core.pointer_leave();
    }

    /// Sum of velocity magnitudes over the current field
    pub fn field_energy(&self) -> f64 {
        self.core.field_energy()
    }

    // === Frame transfer ===

    pub fn pixels_ptr(&self) -> *const u32 {
        self.core.pixels_ptr()
    }

    pub fn pixels_len(&self) -> usize {
        self.core.pixels_len()
    }

    pub fn pixels_byte_len(&self) -> usize {
        self.core.pixels_byte_len()
    }

    /// Release all buffers. Every later frame or resize fails.
    pub fn dispose(&mut self) {
        self.core.dispose();
    }
}
