use super::FluidCore;

pub(super) fn pointer_move(core: &mut FluidCore, x: f32, y: f32, now_ms: f64) {
    if core.disposed || !core.config.simulation.interaction_enabled {
        return;
    }
    core.pointer.on_move(x, y, now_ms);
}

pub(super) fn pointer_leave(core: &mut FluidCore) {
    core.pointer.on_leave();
}
