use nalgebra::{Point3, Vector3};

use crate::body::Body;
use crate::integrator::Euler;
use crate::scenario::{circular_velocity, orbital_period};
use crate::simulation::{BodySnapshot, Simulation};
use crate::state::SystemState;

const SUN_MASS: f64 = 1.989e30; // kg
const EARTH_MASS: f64 = 5.972e24; // kg
const AU: f64 = 1.496e11; // m

fn make_two_body() -> SystemState {
    let mut system = SystemState::new();
    system
        .add_body(SUN_MASS, 6.957e8, Point3::origin(), Vector3::zeros())
        .unwrap();
    system
        .add_body(
            EARTH_MASS,
            6.371e6,
            Point3::new(AU, 0.0, 0.0),
            Vector3::new(0.0, circular_velocity(SUN_MASS, AU), 0.0),
        )
        .unwrap();
    system
}

fn assert_bodies_identical(a: &Body, b: &Body) {
    assert_eq!(a.id, b.id);
    assert_eq!(a.mass, b.mass);
    assert_eq!(a.radius, b.radius);
    assert_eq!(a.position, b.position);
    assert_eq!(a.velocity, b.velocity);
}

#[test]
fn test_step_advances_time() {
    let mut sim = Simulation::new(make_two_body()).with_time_step(60.0);

    assert_eq!(sim.time(), 0.0);

    let time = sim.step();

    assert!((time - 60.0).abs() < 1e-12);
    assert_eq!(sim.time(), time);
}

#[test]
fn test_step_with_explicit_dt() {
    let mut sim = Simulation::new(make_two_body()).with_time_step(60.0);

    sim.step_with(7.0);

    assert!((sim.time() - 7.0).abs() < 1e-12);
    // The configured step is untouched
    assert_eq!(sim.time_step(), 60.0);
}

#[test]
fn test_set_time_step_takes_effect_next_tick() {
    let mut sim = Simulation::new(make_two_body()).with_time_step(60.0);

    sim.step();
    sim.set_time_step(10.0);
    sim.step();

    assert!((sim.time() - 70.0).abs() < 1e-12);
    assert_eq!(sim.time_step(), 10.0);
}

#[test]
fn test_pause_freezes_state() {
    let mut sim = Simulation::new(make_two_body()).with_time_step(3_600.0);

    sim.step();
    let time = sim.time();
    let positions: Vec<_> = sim.bodies().iter().map(|b| b.position).collect();

    sim.pause();
    assert!(sim.is_paused());

    // Paused ticks are complete no-ops
    for _ in 0..10 {
        sim.step();
    }

    assert_eq!(sim.time(), time);
    for (body, pos) in sim.bodies().iter().zip(&positions) {
        assert_eq!(body.position, *pos);
    }

    // Resuming picks up where the state froze
    sim.resume();
    sim.step();
    assert!(sim.time() > time);
}

#[test]
fn test_reset_restores_initial_conditions() {
    let mut sim = Simulation::new(make_two_body()).with_time_step(3_600.0);
    let initial: Vec<Body> = sim.bodies().to_vec();

    for _ in 0..50 {
        sim.step();
    }
    assert!(sim.time() > 0.0);
    assert_ne!(sim.bodies()[1].position, initial[1].position);

    sim.reset();

    assert_eq!(sim.time(), 0.0);
    assert_eq!(sim.body_count(), initial.len());
    for (body, original) in sim.bodies().iter().zip(&initial) {
        assert_bodies_identical(body, original);
    }
}

#[test]
fn test_reset_is_idempotent() {
    let mut sim = Simulation::new(make_two_body()).with_time_step(3_600.0);

    for _ in 0..20 {
        sim.step();
    }

    sim.reset();
    let after_first: Vec<Body> = sim.bodies().to_vec();

    sim.reset();

    for (body, first) in sim.bodies().iter().zip(&after_first) {
        assert_bodies_identical(body, first);
    }
}

#[test]
fn test_snapshot_survives_many_runs() {
    let mut sim = Simulation::new(make_two_body()).with_time_step(3_600.0);
    let initial: Vec<Body> = sim.bodies().to_vec();

    // Stepping and resetting repeatedly must not erode the snapshot
    for _ in 0..3 {
        for _ in 0..30 {
            sim.step();
        }
        sim.reset();
    }

    for (body, original) in sim.bodies().iter().zip(&initial) {
        assert_bodies_identical(body, original);
    }
}

#[test]
fn test_reset_zeroes_transients() {
    let mut sim = Simulation::new(make_two_body()).with_time_step(3_600.0);

    sim.step();
    assert!(sim.bodies()[1].force.norm() > 0.0);

    sim.reset();

    for body in sim.bodies() {
        assert_eq!(body.force, Vector3::zeros());
        assert_eq!(body.acceleration, Vector3::zeros());
    }
}

#[test]
fn test_reinitialize_recaptures_snapshot() {
    let mut sim = Simulation::new(make_two_body()).with_time_step(3_600.0);
    sim.step();

    // Swap in a different system
    let mut replacement = SystemState::new();
    replacement
        .add_body(1.0e20, 1.0, Point3::new(5.0, 0.0, 0.0), Vector3::zeros())
        .unwrap();
    sim.reinitialize(replacement);

    assert_eq!(sim.body_count(), 1);
    assert_eq!(sim.time(), 0.0);

    sim.step();
    sim.reset();

    // Reset now restores the replacement, not the original system
    assert_eq!(sim.body_count(), 1);
    assert_eq!(sim.bodies()[0].position, Point3::new(5.0, 0.0, 0.0));
}

#[test]
fn test_bodies_view() {
    let sim = Simulation::new(make_two_body());

    let bodies = sim.bodies();
    assert_eq!(bodies.len(), 2);
    assert_eq!(bodies[0].mass, SUN_MASS);
    assert_eq!(bodies[1].mass, EARTH_MASS);
}

#[test]
fn test_snapshot_fields() {
    let sim = Simulation::new(make_two_body());

    let snapshots: Vec<BodySnapshot> = sim.snapshot();
    assert_eq!(snapshots.len(), 2);

    let satellite = &snapshots[1];
    assert_eq!(satellite.id, 1);
    assert_eq!(satellite.mass, EARTH_MASS);
    assert_eq!(satellite.position, [AU, 0.0, 0.0]);
    assert_eq!(satellite.velocity[1], circular_velocity(SUN_MASS, AU));
    assert!((satellite.speed - circular_velocity(SUN_MASS, AU)).abs() < 1e-9);
}

#[test]
fn test_with_integrator_swaps_scheme() {
    // Explicit Euler updates position with the old velocity, so one
    // tick from rest moves nothing
    let mut state = SystemState::new();
    state
        .add_body(1.0e24, 1.0, Point3::origin(), Vector3::zeros())
        .unwrap();
    state
        .add_body(1.0e24, 1.0, Point3::new(1.0e8, 0.0, 0.0), Vector3::zeros())
        .unwrap();

    let mut euler_sim = Simulation::new(state.clone())
        .with_integrator(Euler)
        .with_time_step(10.0);
    let mut leapfrog_sim = Simulation::new(state).with_time_step(10.0);

    euler_sim.step();
    leapfrog_sim.step();

    assert_eq!(euler_sim.bodies()[0].position, Point3::origin());
    assert_ne!(leapfrog_sim.bodies()[0].position, Point3::origin());
}

#[test]
fn test_suggest_time_step() {
    let sim = Simulation::new(make_two_body());

    let dt = sim.suggest_time_step();

    // ~100 steps per orbit of the innermost satellite
    let expected = orbital_period(SUN_MASS, AU) / 100.0;
    assert!((dt - expected).abs() / expected < 1e-9);
}

#[test]
fn test_suggest_time_step_empty_system() {
    let sim = Simulation::new(SystemState::new()).with_time_step(42.0);

    // Nothing to orbit: fall back to the configured step
    assert_eq!(sim.suggest_time_step(), 42.0);
}
