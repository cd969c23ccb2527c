//! Integrator - owns the ball state and advances it once per display frame
//!
//! The core keeps the single `SimulationState` value and replaces it
//! wholesale on every step; nothing outside ever mutates it in place.
//! All mutation is serialized through the frame-callback chain, so there is
//! no locking. `reset` and `drag_to` are cancellation points: clearing the
//! time baseline makes any stale in-flight frame a no-op.
//!
//! Integration math is in step/integrate.rs, frame plumbing in step/step.rs,
//! parameter clamping in init/settings.rs, lifecycle in commands/commands.rs.

use crate::constants::DEFAULT_START_POSITION;
use crate::domain::presets::PresetRegistry;
use crate::domain::ramp::Ramp;

#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "step/integrate.rs"]
mod integrate;
#[path = "state/state.rs"]
mod state;
mod facade;

pub use facade::{Simulation, Snapshot};
pub use state::SimulationState;

/// The simulation core
pub struct SimulationCore {
    presets: PresetRegistry,
    ramp: Ramp,

    // Parameters
    mass: f64,
    gravity: f64,
    gravity_preset: String,

    // State
    state: SimulationState,
    energy_ceiling: f64,
    running: bool,
    last_time_ms: Option<f64>,
    frame: u64,
    bounces: u64,
}

impl SimulationCore {
    /// Create a core at the default start position, at rest.
    pub fn new() -> Self {
        init::create_simulation_core()
    }

    pub fn new_with_params(mass: f64, gravity: f64) -> Self {
        init::create_simulation_core_with_params(mass, gravity)
    }

    pub fn mass(&self) -> f64 { self.mass }

    pub fn gravity(&self) -> f64 { self.gravity }

    pub fn gravity_preset(&self) -> &str { &self.gravity_preset }

    pub fn is_running(&self) -> bool { self.running }

    pub fn frame(&self) -> u64 { self.frame }

    /// Boundary bounces since the last reset
    pub fn bounces(&self) -> u64 { self.bounces }

    /// Read-only view of the current state snapshot
    pub fn state(&self) -> &SimulationState { &self.state }

    /// Set mass [1, 100] kg; restarts the run at the current position
    pub fn set_mass(&mut self, kg: f64) {
        settings::set_mass(self, kg);
    }

    /// Set gravity [1, 30] m/s^2; restarts the run at the current position
    pub fn set_gravity(&mut self, gravity: f64) {
        settings::set_gravity(self, gravity);
    }

    /// Look up a named preset. Unknown keys are ignored (returns false).
    pub fn set_gravity_preset(&mut self, key: &str) -> bool {
        settings::set_gravity_preset(self, key)
    }

    pub fn load_preset_bundle_json(&mut self, json: &str) -> Result<(), String> {
        settings::load_preset_bundle_json(self, json)
    }

    pub fn preset_manifest_json(&self) -> String {
        self.presets.manifest_json()
    }

    /// Idle -> Running; the next tick establishes the time baseline
    pub fn start(&mut self) {
        commands::start(self);
    }

    /// Running -> Idle; clears the time baseline
    pub fn pause(&mut self) {
        commands::pause(self);
    }

    /// Reset to the default start position
    pub fn reset(&mut self) {
        commands::reset(self, DEFAULT_START_POSITION);
    }

    /// Reset to an explicit start position in [-1, 1]
    pub fn reset_to(&mut self, position: f64) {
        commands::reset(self, position);
    }

    /// Drag handler: reposition the ball while Idle. Ignored while Running.
    pub fn drag_to(&mut self, position: f64) -> bool {
        commands::drag_to(self, position)
    }

    /// Advance one display frame given a monotonic timestamp in ms.
    /// Returns true when a physics step was actually applied.
    pub fn tick(&mut self, timestamp_ms: f64) -> bool {
        step::tick(self, timestamp_ms)
    }
}

impl Default for SimulationCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
