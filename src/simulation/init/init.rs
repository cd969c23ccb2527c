use crate::constants::{DEFAULT_GRAVITY, DEFAULT_MASS, DEFAULT_START_POSITION};
use crate::domain::presets::PresetRegistry;
use crate::domain::ramp::Ramp;

use super::state::SimulationState;
use super::{commands, settings, SimulationCore};

pub(super) fn create_simulation_core() -> SimulationCore {
    create_simulation_core_with_params(DEFAULT_MASS, DEFAULT_GRAVITY)
}

pub(super) fn create_simulation_core_with_params(mass: f64, gravity: f64) -> SimulationCore {
    let presets = PresetRegistry::from_builtin();
    let gravity = settings::clamp_gravity(gravity);
    let gravity_preset = presets
        .key_for_gravity(gravity)
        .unwrap_or("Custom")
        .to_string();

    let mut core = SimulationCore {
        presets,
        ramp: Ramp::parabola(),
        mass: settings::clamp_mass(mass),
        gravity,
        gravity_preset,
        // Placeholder; the reset below rebuilds the state properly.
        state: SimulationState::at_rest(DEFAULT_START_POSITION, 0.0, 0.0),
        energy_ceiling: 0.0,
        running: false,
        last_time_ms: None,
        frame: 0,
        bounces: 0,
    };
    commands::reset(&mut core, DEFAULT_START_POSITION);
    core
}
