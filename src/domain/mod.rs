pub mod constants;
pub mod presets;
pub mod ramp;
