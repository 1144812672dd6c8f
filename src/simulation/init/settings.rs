use crate::core::EngineError;
use crate::domain::{ConfigPatch, Rgb};

use super::FluidCore;

pub(super) fn resize(core: &mut FluidCore, width: u32, height: u32) -> Result<(), EngineError> {
    if core.disposed {
        log::warn!("resize to {}x{} ignored: engine disposed", width, height);
        return Err(EngineError::Disposed);
    }
    // Dimensions are validated before anything is released; a rejected
    // size leaves the old buffers in place.
    core.buffers.resize(width, height)?;
    core.compositor.resize(width, height)?;
    core.pointer.reset();
    log::debug!("resized to {}x{}; field history discarded", width, height);
    Ok(())
}

pub(super) fn update_config(core: &mut FluidCore, patch: &ConfigPatch) -> Result<(), EngineError> {
    if core.disposed {
        return Err(EngineError::Disposed);
    }
    let applied = patch.apply(&mut core.config);
    if !core.config.simulation.interaction_enabled {
        core.pointer.reset();
    }
    log::debug!("config patch applied ({} fields)", applied);
    Ok(())
}

pub(super) fn set_interaction_enabled(core: &mut FluidCore, enabled: bool) {
    core.config.simulation.interaction_enabled = enabled;
    if !enabled {
        core.pointer.reset();
    }
}

pub(super) fn set_colors(core: &mut FluidCore, colors: [Rgb; 4]) {
    core.config.display.colors = colors;
}

pub(super) fn dispose(core: &mut FluidCore) {
    if core.disposed {
        return;
    }
    core.buffers.dispose();
    core.compositor.dispose();
    core.pointer.reset();
    core.disposed = true;
    log::debug!("fluid core disposed");
}
