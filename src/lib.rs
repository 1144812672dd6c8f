//! Fluid Backdrop Engine - interactive fluid field for procedural backgrounds
//!
//! A per-cell velocity/pressure/trail field is advected every display frame,
//! pushed around by the pointer, and composited into a palette-blended,
//! optionally grainy RGBA frame.
//!
//! Architecture:
//! - core/        - errors, logging, vector math, safety macros
//! - domain/      - configuration and colors
//! - spatial/     - field buffers and sampling
//! - systems/     - pointer tracker, step kernel, compositor
//! - simulation/  - orchestration and the wasm facade

// Safety macros must come first so `fast!` is visible everywhere
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Thread pool initialization for the parallel kernel in the browser
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook and console logger
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    crate::core::logging::install(level);

    log::info!("Fluid backdrop engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::EngineError;
pub use domain::{ConfigPatch, EngineConfig, Rgb};
pub use simulation::{FluidBackdrop, FluidCore, PerfStats};
