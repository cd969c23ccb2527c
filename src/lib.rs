//! Rampa Engine - energy conservation ramp simulation in WASM
//!
//! A ball rolls on a parabolic track under configurable gravity and mass.
//! The JS side owns rendering, sliders and the energy chart; this crate owns
//! the physics state and advances it once per display frame.
//!
//! Architecture:
//! - domain/     - Track geometry, constants, gravity preset content
//! - simulation/ - Integrator core, frame stepping, snapshots
//! - api/        - Public WASM API

pub mod api;
pub mod domain;
pub mod simulation;

// Compatibility re-exports (keeps short paths working for tests and JS glue)
pub use domain::constants;
pub use domain::presets;
pub use domain::ramp;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Rampa WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::{Simulation, Snapshot};
pub use simulation::SimulationState;

// Export preset gravities and defaults for JS
#[wasm_bindgen]
pub fn gravity_earth() -> f64 { constants::GRAVITY_EARTH }
#[wasm_bindgen]
pub fn gravity_moon() -> f64 { constants::GRAVITY_MOON }
#[wasm_bindgen]
pub fn gravity_mars() -> f64 { constants::GRAVITY_MARS }
#[wasm_bindgen]
pub fn gravity_jupiter() -> f64 { constants::GRAVITY_JUPITER }
#[wasm_bindgen]
pub fn default_mass() -> f64 { constants::DEFAULT_MASS }
#[wasm_bindgen]
pub fn default_gravity() -> f64 { constants::DEFAULT_GRAVITY }
#[wasm_bindgen]
pub fn default_start_position() -> f64 { constants::DEFAULT_START_POSITION }
