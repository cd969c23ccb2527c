use crate::constants::DEFAULT_START_POSITION;
use crate::domain::ramp::Ramp;

use super::state::SimulationState;
use super::SimulationCore;

/// Stop stepping and rebuild the state at rest from a new start position.
/// Clearing the time baseline also cancels any stale in-flight frame.
pub(super) fn reset(core: &mut SimulationCore, start_position: f64) {
    let start_position = if start_position.is_finite() {
        Ramp::clamp_position(start_position)
    } else {
        DEFAULT_START_POSITION
    };

    core.running = false;
    core.last_time_ms = None;
    core.frame = 0;
    core.bounces = 0;

    let start_height = core.ramp.height(start_position.abs());
    core.energy_ceiling = core.mass * core.gravity * start_height;
    core.state = SimulationState::at_rest(start_position, start_height, core.energy_ceiling);
}

pub(super) fn start(core: &mut SimulationCore) {
    if core.running {
        return;
    }
    core.running = true;
    // Baseline is established by the first tick, not here; the core stays
    // agnostic to the host clock.
    core.last_time_ms = None;
}

pub(super) fn pause(core: &mut SimulationCore) {
    core.running = false;
    core.last_time_ms = None;
}

pub(super) fn drag_to(core: &mut SimulationCore, position: f64) -> bool {
    if core.running {
        return false;
    }
    if !position.is_finite() {
        return false;
    }
    reset(core, position);
    true
}
