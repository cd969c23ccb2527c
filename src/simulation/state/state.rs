use serde::Serialize;

/// Snapshot of the ball on the track. Replaced wholesale every step and
/// handed to the presentation layer read-only.
///
/// `total_energy` is the ceiling fixed at the last reset
/// (`mass * gravity * ramp(|start|)`), not a running sum: kinetic energy is
/// derived as `ceiling - potential`, so the displayed total does not decay
/// with the velocity damping. The energy readouts rely on this.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationState {
    /// Horizontal coordinate on the track, in [-1, 1]
    pub position: f64,
    /// Signed horizontal velocity, m/s
    pub velocity: f64,
    /// Track height at `position`, m
    pub height: f64,
    /// mass * gravity * height, J
    pub potential_energy: f64,
    /// max(0, total_energy - potential_energy), J
    pub kinetic_energy: f64,
    /// Energy ceiling fixed at the last reset, J
    pub total_energy: f64,
}

impl SimulationState {
    /// State at rest: all energy potential, none kinetic.
    pub(crate) fn at_rest(position: f64, height: f64, total_energy: f64) -> Self {
        Self {
            position,
            velocity: 0.0,
            height,
            potential_energy: total_energy,
            kinetic_energy: 0.0,
            total_energy,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
