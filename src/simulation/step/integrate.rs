use crate::constants::{DAMPING, RESTITUTION};
use crate::domain::ramp::{Ramp, TRACK_MAX, TRACK_MIN};

use super::state::SimulationState;

pub(crate) struct StepOutcome {
    pub state: SimulationState,
    /// True when the ball hit a track boundary this step
    pub bounced: bool,
}

/// One semi-implicit Euler step along the track. Pure with respect to its
/// arguments; no hidden state.
///
/// Order matters: accelerate, move, damp, bounce. Damping is applied per
/// step regardless of dt, and `energy_ceiling` is carried through
/// untouched - kinetic energy is derived from the ceiling rather than from
/// 1/2 m v^2, so the displayed total never reflects the damping loss.
pub(super) fn integrate(
    prev: &SimulationState,
    dt: f64,
    mass: f64,
    gravity: f64,
    ramp: &Ramp,
    energy_ceiling: f64,
) -> StepOutcome {
    // Gravity component along the slope, restoring toward the minimum.
    let slope = ramp.slope(prev.position);
    let angle = slope.atan();
    let acceleration = -gravity * angle.sin();

    let mut velocity = prev.velocity + acceleration * dt;
    let mut position = prev.position + velocity * dt;

    velocity *= DAMPING;

    // Inelastic bounce at the track ends.
    let mut bounced = false;
    if position > TRACK_MAX {
        position = TRACK_MAX;
        velocity = -velocity * RESTITUTION;
        bounced = true;
    }
    if position < TRACK_MIN {
        position = TRACK_MIN;
        velocity = -velocity * RESTITUTION;
        bounced = true;
    }

    let height = ramp.height(position);
    let potential_energy = mass * gravity * height;
    // Clamp: floating-point drift must not surface as negative energy.
    let kinetic_energy = (energy_ceiling - potential_energy).max(0.0);

    StepOutcome {
        state: SimulationState {
            position,
            velocity,
            height,
            potential_energy,
            kinetic_energy,
            total_energy: energy_ceiling,
        },
        bounced,
    }
}
