use super::*;
use crate::constants::{DAMPING, GRAVITY_MAX, MASS_MAX, MASS_MIN, RESTITUTION};
use crate::domain::ramp::Ramp;

use super::integrate::integrate;
use super::state::SimulationState;

fn assert_close(actual: f64, expected: f64, eps: f64) {
    assert!(
        (actual - expected).abs() < eps,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn reset_puts_all_energy_into_potential() {
    let mut core = SimulationCore::new();

    for &pos in &[-1.0, -0.8, -0.25, 0.0, 0.4, 1.0] {
        core.reset_to(pos);
        let s = core.state();
        assert_eq!(s.position, pos);
        assert_eq!(s.velocity, 0.0);
        assert_eq!(s.kinetic_energy, 0.0);
        assert_eq!(s.potential_energy, s.total_energy);
        assert_close(s.height, 0.8 * pos * pos, 1e-12);
        assert!(!core.is_running());
    }
}

#[test]
fn reset_scenario_matches_hand_computed_energy() {
    // 20 kg on Earth released at -0.8: h = 0.8 * 0.64 = 0.512 m,
    // E = 20 * 9.81 * 0.512 = 100.4544 J.
    let mut core = SimulationCore::new_with_params(20.0, 9.81);
    core.reset_to(-0.8);

    let s = core.state();
    assert_close(s.height, 0.512, 1e-12);
    assert_close(s.total_energy, 100.4544, 1e-9);
    assert_close(s.potential_energy, 100.4544, 1e-9);
    assert_eq!(s.kinetic_energy, 0.0);
}

#[test]
fn preset_switch_while_paused_recomputes_ceiling() {
    let mut core = SimulationCore::new();
    assert_eq!(core.gravity_preset(), "Earth");
    core.reset_to(-0.8);

    assert!(core.set_gravity_preset("Moon"));
    assert_eq!(core.gravity_preset(), "Moon");
    assert_close(core.gravity(), 1.62, 1e-12);

    // 20 * 1.62 * 0.512 = 16.5888 J, position kept, velocity back to zero.
    let s = core.state();
    assert_eq!(s.position, -0.8);
    assert_eq!(s.velocity, 0.0);
    assert_close(s.total_energy, 16.5888, 1e-9);
}

#[test]
fn unknown_preset_is_silently_ignored() {
    let mut core = SimulationCore::new();
    let gravity = core.gravity();

    assert!(!core.set_gravity_preset("Pluto"));
    assert_eq!(core.gravity(), gravity);
    assert_eq!(core.gravity_preset(), "Earth");
}

#[test]
fn gravity_slider_relabels_preset_to_custom() {
    let mut core = SimulationCore::new();

    core.set_gravity(12.5);
    assert_eq!(core.gravity_preset(), "Custom");

    // Landing exactly on a preset value restores its label.
    core.set_gravity(9.81);
    assert_eq!(core.gravity_preset(), "Earth");
}

#[test]
fn parameters_clamp_to_slider_ranges() {
    let mut core = SimulationCore::new();

    core.set_mass(500.0);
    assert_eq!(core.mass(), MASS_MAX);
    core.set_mass(0.1);
    assert_eq!(core.mass(), MASS_MIN);
    core.set_gravity(50.0);
    assert_eq!(core.gravity(), GRAVITY_MAX);

    // Non-finite input leaves the parameter alone.
    core.set_mass(f64::NAN);
    assert_eq!(core.mass(), MASS_MIN);

    let clamped = SimulationCore::new_with_params(1000.0, -3.0);
    assert_eq!(clamped.mass(), MASS_MAX);
    assert_eq!(clamped.gravity(), 1.0);
}

#[test]
fn parameter_change_forces_idle() {
    let mut core = SimulationCore::new();
    core.start();
    core.tick(0.0);
    core.tick(16.0);
    assert!(core.is_running());

    core.set_mass(40.0);
    assert!(!core.is_running());
    assert_eq!(core.state().velocity, 0.0);
    assert_eq!(core.frame(), 0);
}

#[test]
fn zero_dt_step_keeps_position_and_height() {
    let prev = SimulationState {
        position: 0.3,
        velocity: 2.0,
        height: 0.8 * 0.3 * 0.3,
        potential_energy: 0.0,
        kinetic_energy: 0.0,
        total_energy: 50.0,
    };
    let out = integrate(&prev, 0.0, 20.0, 9.81, &Ramp::parabola(), 50.0);

    assert_eq!(out.state.position, prev.position);
    assert_eq!(out.state.height, prev.height);
    // Damping is per step, so even a zero-dt step applies it once.
    assert_eq!(out.state.velocity, prev.velocity * DAMPING);
    assert!(!out.bounced);
}

#[test]
fn boundary_bounce_clamps_and_reflects() {
    let ramp = Ramp::parabola();
    let (mass, gravity) = (20.0, 9.81);
    let ceiling = mass * gravity * ramp.height(1.0);
    let prev = SimulationState {
        position: 0.95,
        velocity: 5.0,
        height: ramp.height(0.95),
        potential_energy: mass * gravity * ramp.height(0.95),
        kinetic_energy: 0.0,
        total_energy: ceiling,
    };

    let dt = 0.1;
    let out = integrate(&prev, dt, mass, gravity, &ramp, ceiling);

    // Same arithmetic as the step: accelerate, move (overshoots), damp.
    let accel = -gravity * ramp.slope(0.95).atan().sin();
    let pre_collision = (5.0 + accel * dt) * DAMPING;
    assert!(0.95 + (5.0 + accel * dt) * dt > 1.0, "step must overshoot");

    assert!(out.bounced);
    assert_eq!(out.state.position, 1.0);
    assert_close(out.state.velocity, -pre_collision * RESTITUTION, 1e-12);
    assert_close(out.state.height, 0.8, 1e-12);
    // At the ceiling height all energy is potential again.
    assert_close(out.state.potential_energy, ceiling, 1e-9);
    assert_eq!(out.state.kinetic_energy, 0.0);
}

#[test]
fn first_tick_only_establishes_baseline() {
    let mut core = SimulationCore::new();
    let before = *core.state();

    core.start();
    assert!(!core.tick(1000.0));
    assert_eq!(core.frame(), 0);
    assert_eq!(core.state().position, before.position);

    assert!(core.tick(1016.6));
    assert_eq!(core.frame(), 1);
}

#[test]
fn tick_while_idle_is_dropped() {
    let mut core = SimulationCore::new();
    assert!(!core.tick(0.0));
    assert!(!core.tick(16.0));
    assert_eq!(core.frame(), 0);

    // Pausing clears the baseline, so a stale queued frame is a no-op too.
    core.start();
    core.tick(32.0);
    core.pause();
    assert!(!core.tick(48.0));
    assert_eq!(core.frame(), 0);
}

#[test]
fn drag_is_ignored_while_running() {
    let mut core = SimulationCore::new();
    core.start();
    assert!(!core.drag_to(0.5));
    assert_eq!(core.state().position, -0.8);
    assert!(core.is_running());

    core.pause();
    assert!(core.drag_to(0.5));
    assert_eq!(core.state().position, 0.5);
    assert_eq!(core.state().kinetic_energy, 0.0);
}

#[test]
fn drag_clamps_to_track() {
    let mut core = SimulationCore::new();
    assert!(core.drag_to(3.0));
    assert_eq!(core.state().position, 1.0);
    assert!(!core.drag_to(f64::INFINITY));
    assert_eq!(core.state().position, 1.0);
}

#[test]
fn long_run_turning_point_peaks_decay() {
    let mut core = SimulationCore::new();
    core.reset_to(-0.8);
    let ceiling = core.state().total_energy;

    core.start();
    core.tick(0.0);

    let dt_ms = 1000.0 / 120.0;
    let mut prev_velocity = 0.0_f64;
    let mut peaks: Vec<f64> = Vec::new();

    for i in 1..=20_000u32 {
        core.tick(f64::from(i) * dt_ms);
        let s = core.state();

        assert!(s.position >= -1.0 && s.position <= 1.0);
        assert!(s.kinetic_energy >= 0.0);
        assert!(s.potential_energy >= 0.0);
        // The stored total is the fixed ceiling, by design.
        assert_eq!(s.total_energy, ceiling);

        // A velocity sign flip marks a turning point; sample PE there.
        if prev_velocity != 0.0 && prev_velocity.signum() != s.velocity.signum() {
            peaks.push(s.potential_energy);
        }
        prev_velocity = s.velocity;
    }

    assert!(peaks.len() > 10, "expected many oscillations, got {}", peaks.len());
    for pair in peaks.windows(2) {
        assert!(
            pair[1] <= pair[0] + 1e-6,
            "turning-point energy grew: {} -> {}",
            pair[0],
            pair[1]
        );
    }
    // Damping must have eaten a visible share of the amplitude by now.
    assert!(*peaks.last().unwrap() < 0.9 * peaks[0]);
}

#[test]
fn custom_preset_bundle_replaces_builtin() {
    let mut core = SimulationCore::new();
    let json = r#"{"presets":[
        {"key":"Titan","label":"Titán","gravity":1.35},
        {"key":"Heavy","label":"Pesado","gravity":99.0}
    ]}"#;

    core.load_preset_bundle_json(json).expect("bundle should parse");
    // Old keys are gone, the current gravity value no longer has a label.
    assert!(!core.set_gravity_preset("Earth"));
    assert_eq!(core.gravity_preset(), "Custom");

    assert!(core.set_gravity_preset("Titan"));
    assert_close(core.gravity(), 1.35, 1e-12);
    // Out-of-range bundle gravity was clamped to the slider maximum.
    assert!(core.set_gravity_preset("Heavy"));
    assert_eq!(core.gravity(), GRAVITY_MAX);

    assert!(core.load_preset_bundle_json("{\"presets\":[]}").is_err());
    assert!(core.load_preset_bundle_json("not json").is_err());
}
