//! Physical constants and slider ranges shared by the engine and the UI.

pub const GRAVITY_EARTH: f64 = 9.81;
pub const GRAVITY_MOON: f64 = 1.62;
pub const GRAVITY_MARS: f64 = 3.71;
pub const GRAVITY_JUPITER: f64 = 24.79;

// Slider ranges; all inbound parameter values are clamped into these.
pub const MASS_MIN: f64 = 1.0; // kg
pub const MASS_MAX: f64 = 100.0;
pub const GRAVITY_MIN: f64 = 1.0; // m/s^2
pub const GRAVITY_MAX: f64 = 30.0;

pub const DEFAULT_MASS: f64 = 20.0;
pub const DEFAULT_GRAVITY: f64 = GRAVITY_EARTH;
pub const DEFAULT_START_POSITION: f64 = -0.8;

/// Track parabola coefficient: y = RAMP_COEFFICIENT * x^2
pub const RAMP_COEFFICIENT: f64 = 0.8;

/// Per-step multiplicative velocity decay (emulates friction/air resistance).
/// Applied per step, NOT per second.
pub const DAMPING: f64 = 0.9995;

/// Fraction of speed kept after bouncing off a track boundary.
pub const RESTITUTION: f64 = 0.8;
