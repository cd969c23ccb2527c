use super::{integrate, SimulationCore};

/// Advance one display frame.
///
/// A tick while Idle is a stale frame callback and is dropped. The first
/// tick after starting only records the time baseline; no physics runs
/// until there are two consecutive timestamps to difference.
pub(super) fn tick(core: &mut SimulationCore, timestamp_ms: f64) -> bool {
    if !core.running {
        return false;
    }

    let Some(last) = core.last_time_ms else {
        core.last_time_ms = Some(timestamp_ms);
        return false;
    };

    // The host clock is monotonic; guard anyway so dt is never negative.
    let dt = ((timestamp_ms - last) / 1000.0).max(0.0);
    core.last_time_ms = Some(timestamp_ms);

    let outcome = integrate::integrate(
        &core.state,
        dt,
        core.mass,
        core.gravity,
        &core.ramp,
        core.energy_ceiling,
    );
    core.state = outcome.state;
    if outcome.bounced {
        core.bounces += 1;
    }
    core.frame += 1;
    true
}
