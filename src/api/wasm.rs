//! Public WASM API surface.

pub use crate::simulation::{Simulation, Snapshot};
