use crate::constants::{GRAVITY_MAX, GRAVITY_MIN, MASS_MAX, MASS_MIN};
use crate::domain::presets::PresetRegistry;

use super::{commands, SimulationCore};

pub(super) fn clamp_mass(kg: f64) -> f64 {
    kg.clamp(MASS_MIN, MASS_MAX)
}

pub(super) fn clamp_gravity(gravity: f64) -> f64 {
    gravity.clamp(GRAVITY_MIN, GRAVITY_MAX)
}

// Parameter changes invalidate the energy ceiling, so every accepted change
// restarts the run at the current position (forces the Idle transition).

pub(super) fn set_mass(core: &mut SimulationCore, kg: f64) {
    if !kg.is_finite() {
        return;
    }
    core.mass = clamp_mass(kg);
    let position = core.state.position;
    commands::reset(core, position);
}

pub(super) fn set_gravity(core: &mut SimulationCore, gravity: f64) {
    if !gravity.is_finite() {
        return;
    }
    core.gravity = clamp_gravity(gravity);
    // Slider moves land on "Custom" unless they happen to hit a preset value.
    core.gravity_preset = core
        .presets
        .key_for_gravity(core.gravity)
        .unwrap_or("Custom")
        .to_string();
    let position = core.state.position;
    commands::reset(core, position);
}

pub(super) fn set_gravity_preset(core: &mut SimulationCore, key: &str) -> bool {
    let Some(gravity) = core.presets.gravity_for(key) else {
        // Malformed preset names are silently ignored, no state change.
        return false;
    };
    core.gravity = clamp_gravity(gravity);
    core.gravity_preset = key.to_string();
    let position = core.state.position;
    commands::reset(core, position);
    true
}

pub(super) fn load_preset_bundle_json(core: &mut SimulationCore, json: &str) -> Result<(), String> {
    let registry = PresetRegistry::from_bundle_json(json)?;
    core.presets = registry;
    // Current gravity value is kept; relabel it against the new content.
    core.gravity_preset = core
        .presets
        .key_for_gravity(core.gravity)
        .unwrap_or("Custom")
        .to_string();
    Ok(())
}
