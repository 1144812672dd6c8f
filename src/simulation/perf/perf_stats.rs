use wasm_bindgen::prelude::*;

/// Timings and field diagnostics for the last rendered frame
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(crate) frame_ms: f64,
    pub(crate) kernel_ms: f64,
    pub(crate) composite_ms: f64,
    pub(crate) frame: u32,
    pub(crate) cells: u32,
    pub(crate) energy: f64,
    pub(crate) max_channel: f32,
    pub(crate) pointer_active: bool,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn frame_ms(&self) -> f64 { self.frame_ms }
    #[wasm_bindgen(getter)]
    pub fn kernel_ms(&self) -> f64 { self.kernel_ms }
    #[wasm_bindgen(getter)]
    pub fn composite_ms(&self) -> f64 { self.composite_ms }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u32 { self.frame }
    #[wasm_bindgen(getter)]
    pub fn cells(&self) -> u32 { self.cells }
    #[wasm_bindgen(getter)]
    pub fn energy(&self) -> f64 { self.energy }
    #[wasm_bindgen(getter)]
    pub fn max_channel(&self) -> f32 { self.max_channel }
    #[wasm_bindgen(getter)]
    pub fn pointer_active(&self) -> bool { self.pointer_active }
}
