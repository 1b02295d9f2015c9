use nalgebra::{Point3, Vector3};

use crate::forces::gravity::DirectGravity;
use crate::forces::{CompositeForce, ForceModel, G};
use crate::state::SystemState;

const SUN_MASS: f64 = 1.989e30; // kg
const EARTH_MASS: f64 = 5.972e24; // kg
const AU: f64 = 1.496e11; // m

fn make_sun_earth() -> SystemState {
    let mut system = SystemState::new();
    system
        .add_body(SUN_MASS, 6.957e8, Point3::origin(), Vector3::zeros())
        .unwrap();
    system
        .add_body(
            EARTH_MASS,
            6.371e6,
            Point3::new(AU, 0.0, 0.0),
            Vector3::zeros(),
        )
        .unwrap();
    system
}

#[test]
fn test_force_toward_central_body() {
    let mut system = make_sun_earth();

    let gravity = DirectGravity::new();
    system.clear_forces();
    gravity.accumulate(&mut system);

    // Satellite is pulled toward the origin (negative x)
    let force = system.bodies[1].force;
    assert!(force.x < 0.0);
    assert_eq!(force.y, 0.0);
    assert_eq!(force.z, 0.0);
}

#[test]
fn test_newtons_third_law() {
    let mut system = SystemState::new();
    system
        .add_body(
            3.0e24,
            1.0,
            Point3::new(1.0e10, 2.0e10, -5.0e9),
            Vector3::zeros(),
        )
        .unwrap();
    system
        .add_body(
            7.0e23,
            1.0,
            Point3::new(-4.0e10, 6.0e9, 2.0e10),
            Vector3::zeros(),
        )
        .unwrap();

    let gravity = DirectGravity::new();
    system.clear_forces();
    gravity.accumulate(&mut system);

    // The pair's contributions are exact negatives, component for component
    assert_eq!(system.bodies[0].force, -system.bodies[1].force);
}

#[test]
fn test_inverse_square_magnitude() {
    let mut system = make_sun_earth();

    let gravity = DirectGravity::new();
    system.clear_forces();
    gravity.accumulate(&mut system);

    // F = G * M * m / r²
    let expected = G * SUN_MASS * EARTH_MASS / (AU * AU);
    let actual = system.bodies[1].force.norm();
    assert!(
        (actual - expected).abs() / expected < 1e-12,
        "force magnitude {:.6e}, expected {:.6e}",
        actual,
        expected
    );
}

#[test]
fn test_zero_distance_pair_skipped() {
    let mut system = SystemState::new();

    // Two bodies at the same point: the pair has no defined direction
    let p = Point3::new(1.0e10, -2.0e10, 3.0e10);
    system.add_body(1.0e24, 1.0, p, Vector3::zeros()).unwrap();
    system.add_body(2.0e24, 1.0, p, Vector3::zeros()).unwrap();

    let gravity = DirectGravity::new();
    system.clear_forces();
    gravity.accumulate(&mut system);

    for body in &system.bodies {
        assert!(body.force.iter().all(|c| c.is_finite()));
        assert_eq!(body.force, Vector3::zeros());
    }
}

#[test]
fn test_zero_distance_pair_still_feels_third_body() {
    let mut system = SystemState::new();

    let p = Point3::origin();
    system.add_body(1.0e24, 1.0, p, Vector3::zeros()).unwrap();
    system.add_body(1.0e24, 1.0, p, Vector3::zeros()).unwrap();
    system
        .add_body(5.0e24, 1.0, Point3::new(1.0e10, 0.0, 0.0), Vector3::zeros())
        .unwrap();

    let gravity = DirectGravity::new();
    system.clear_forces();
    gravity.accumulate(&mut system);

    // Total force on each coincident body is bounded by the third body's pull
    let expected = G * 1.0e24 * 5.0e24 / (1.0e10 * 1.0e10);
    for body in &system.bodies[..2] {
        assert!(
            (body.force.norm() - expected).abs() / expected < 1e-12,
            "coincident body should feel only the third body"
        );
        assert!(body.force.x > 0.0);
    }
}

#[test]
fn test_softening_reduces_force() {
    let mut hard_system = make_sun_earth();
    let mut soft_system = make_sun_earth();

    let gravity_hard = DirectGravity::new();
    let gravity_soft = DirectGravity::with_softening(0.5 * AU);

    hard_system.clear_forces();
    gravity_hard.accumulate(&mut hard_system);
    soft_system.clear_forces();
    gravity_soft.accumulate(&mut soft_system);

    assert!(soft_system.bodies[1].force.norm() < hard_system.bodies[1].force.norm());
}

#[test]
fn test_accumulate_adds_without_clearing() {
    let mut system = make_sun_earth();

    let gravity = DirectGravity::new();
    system.clear_forces();
    gravity.accumulate(&mut system);
    let single = system.bodies[1].force;

    // A second pass without clearing doubles the accumulator; the
    // integrators clear between passes
    gravity.accumulate(&mut system);
    assert_eq!(system.bodies[1].force, single * 2.0);
}

#[test]
fn test_potential_energy_negative() {
    let system = make_sun_earth();

    let gravity = DirectGravity::new();
    let pe = gravity.potential_energy(&system);

    // Gravitational potential is negative
    assert!(pe < 0.0);

    // U = -G * M * m / r
    let expected = -G * SUN_MASS * EARTH_MASS / AU;
    assert!((pe - expected).abs() / expected.abs() < 1e-12);
}

#[test]
fn test_potential_energy_more_bodies_more_negative() {
    let mut system = make_sun_earth();

    let gravity = DirectGravity::new();
    let pe_two = gravity.potential_energy(&system);

    system
        .add_body(
            EARTH_MASS,
            6.371e6,
            Point3::new(0.0, 2.0 * AU, 0.0),
            Vector3::zeros(),
        )
        .unwrap();
    let pe_three = gravity.potential_energy(&system);

    // More bodies = more negative potential
    assert!(pe_three < pe_two);
}

#[test]
fn test_potential_energy_skips_coincident_pair() {
    let mut system = SystemState::new();

    let p = Point3::origin();
    system.add_body(1.0e24, 1.0, p, Vector3::zeros()).unwrap();
    system.add_body(1.0e24, 1.0, p, Vector3::zeros()).unwrap();

    let gravity = DirectGravity::new();
    let pe = gravity.potential_energy(&system);

    assert!(pe.is_finite());
    assert_eq!(pe, 0.0);
}

#[test]
fn test_composite_force_sums_contributions() {
    let mut single_system = make_sun_earth();
    let mut composite_system = make_sun_earth();

    let gravity = DirectGravity::new();
    single_system.clear_forces();
    gravity.accumulate(&mut single_system);

    // Layering the same model twice doubles both force and potential
    let composite = CompositeForce::new()
        .with_force(DirectGravity::new())
        .with_force(DirectGravity::new());
    composite_system.clear_forces();
    composite.accumulate(&mut composite_system);

    assert_eq!(
        composite_system.bodies[1].force,
        single_system.bodies[1].force * 2.0
    );
    assert_eq!(
        composite.potential_energy(&composite_system),
        gravity.potential_energy(&single_system) * 2.0
    );
}
