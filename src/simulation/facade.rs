use js_sys::Float64Array;
use wasm_bindgen::prelude::*;

use super::state::SimulationState;
use super::SimulationCore;

/// Read-only state snapshot handed to the presentation layer after every
/// step (canvas, readouts and the stacked energy chart all consume it).
#[wasm_bindgen]
#[derive(Clone)]
pub struct Snapshot {
    position: f64,
    velocity: f64,
    height: f64,
    potential_energy: f64,
    kinetic_energy: f64,
    total_energy: f64,
}

#[wasm_bindgen]
impl Snapshot {
    #[wasm_bindgen(getter)]
    pub fn position(&self) -> f64 { self.position }
    #[wasm_bindgen(getter)]
    pub fn velocity(&self) -> f64 { self.velocity }
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 { self.height }

    #[wasm_bindgen(getter, js_name = potentialEnergy)]
    pub fn potential_energy(&self) -> f64 { self.potential_energy }
    #[wasm_bindgen(getter, js_name = kineticEnergy)]
    pub fn kinetic_energy(&self) -> f64 { self.kinetic_energy }
    #[wasm_bindgen(getter, js_name = totalEnergy)]
    pub fn total_energy(&self) -> f64 { self.total_energy }
}

impl From<SimulationState> for Snapshot {
    fn from(s: SimulationState) -> Self {
        Self {
            position: s.position,
            velocity: s.velocity,
            height: s.height,
            potential_energy: s.potential_energy,
            kinetic_energy: s.kinetic_energy,
            total_energy: s.total_energy,
        }
    }
}

#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
}

#[wasm_bindgen]
impl Simulation {
    /// Create a simulation with default parameters, at rest at the default
    /// start position
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { core: SimulationCore::new() }
    }

    #[wasm_bindgen(js_name = newWithParams)]
    pub fn new_with_params(mass: f64, gravity: f64) -> Self {
        Self { core: SimulationCore::new_with_params(mass, gravity) }
    }

    #[wasm_bindgen(getter)]
    pub fn mass(&self) -> f64 { self.core.mass() }

    #[wasm_bindgen(getter)]
    pub fn gravity(&self) -> f64 { self.core.gravity() }

    #[wasm_bindgen(getter, js_name = gravityPreset)]
    pub fn gravity_preset(&self) -> String { self.core.gravity_preset().to_string() }

    #[wasm_bindgen(getter, js_name = isRunning)]
    pub fn is_running(&self) -> bool { self.core.is_running() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn bounces(&self) -> u64 { self.core.bounces() }

    /// Set mass in kg, clamped to the slider range [1, 100]
    pub fn set_mass(&mut self, kg: f64) {
        self.core.set_mass(kg);
    }

    /// Set gravity in m/s^2, clamped to the slider range [1, 30]
    pub fn set_gravity(&mut self, gravity: f64) {
        self.core.set_gravity(gravity);
    }

    /// Select a named gravity preset; unknown names are ignored
    pub fn set_gravity_preset(&mut self, key: &str) -> bool {
        self.core.set_gravity_preset(key)
    }

    pub fn start(&mut self) {
        self.core.start();
    }

    pub fn pause(&mut self) {
        self.core.pause();
    }

    /// Reset to the default start position
    pub fn reset(&mut self) {
        self.core.reset();
    }

    /// Reset to an explicit start position in [-1, 1]
    pub fn reset_to(&mut self, position: f64) {
        self.core.reset_to(position);
    }

    /// Drag handler: reposition while paused. Ignored while running.
    pub fn drag_to(&mut self, position: f64) -> bool {
        self.core.drag_to(position)
    }

    /// Advance one display frame; `timestamp_ms` comes straight from the
    /// host frame callback. Returns true when a physics step was applied.
    pub fn tick(&mut self, timestamp_ms: f64) -> bool {
        self.core.tick(timestamp_ms)
    }

    pub fn snapshot(&self) -> Snapshot {
        (*self.core.state()).into()
    }

    /// Snapshot as JSON with the same camelCase keys the original UI used
    pub fn snapshot_json(&self) -> String {
        self.core.state().to_json()
    }

    /// Snapshot as a typed array for the chart:
    /// [position, velocity, height, potentialEnergy, kineticEnergy, totalEnergy]
    pub fn snapshot_array(&self) -> Float64Array {
        let s = self.core.state();
        Float64Array::from(
            &[
                s.position,
                s.velocity,
                s.height,
                s.potential_energy,
                s.kinetic_energy,
                s.total_energy,
            ][..],
        )
    }

    pub fn load_preset_bundle(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_preset_bundle_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn get_preset_manifest_json(&self) -> String {
        self.core.preset_manifest_json()
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
