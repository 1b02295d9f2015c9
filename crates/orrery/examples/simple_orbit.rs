//! Simple orbital integration example
//!
//! Demonstrates the leapfrog integrator with a single planet orbiting
//! a Sun-like central body, showing conservation diagnostics.
//!
//! Run with: cargo run --package orrery --example simple_orbit

use nalgebra::{Point3, Vector3};
use orrery::forces::{DirectGravity, ForceModel};
use orrery::integrator::{Integrator, Leapfrog};
use orrery::scenario::{circular_velocity, orbital_period};
use orrery::state::SystemState;
use units::{Length, Mass};

fn main() {
    println!("N-body Integrator Test: Single Planet Orbit\n");
    println!("{}", "=".repeat(60));

    let central_mass = Mass::from_solar_masses(1.0).to_kg();
    let planet_mass = Mass::from_earth_masses(1.0).to_kg();
    let r = Length::from_au(1.0).to_meters();

    let mut system = SystemState::new();
    system
        .add_body(
            central_mass,
            Length::from_solar_radii(1.0).to_meters(),
            Point3::origin(),
            Vector3::zeros(),
        )
        .unwrap();

    let v_circular = circular_velocity(central_mass, r);
    system
        .add_body(
            planet_mass,
            Length::from_earth_radii(1.0).to_meters(),
            Point3::new(r, 0.0, 0.0),
            Vector3::new(0.0, v_circular, 0.0),
        )
        .unwrap();

    println!("\nInitial conditions:");
    println!("  Central mass: {:.4e} kg", central_mass);
    println!("  Planet mass: {:.4e} kg", planet_mass);
    println!("  Orbital radius: {:.4e} m (1 AU)", r);
    println!("  Circular velocity: {:.2} km/s", v_circular / 1000.0);

    // Set up integrator and force model
    let integrator = Leapfrog;
    let force = DirectGravity::new();

    // Initial diagnostics
    let initial_ke = system.kinetic_energy();
    let initial_pe = force.potential_energy(&system);
    let initial_energy = initial_ke + initial_pe;
    let initial_l = system.total_angular_momentum().norm();

    println!("\nInitial energy:");
    println!("  Kinetic: {:.6e} J", initial_ke);
    println!("  Potential: {:.6e} J", initial_pe);
    println!("  Total: {:.6e} J", initial_energy);
    println!("  Angular momentum: {:.6e} kg m²/s", initial_l);

    // Integration parameters
    let period = orbital_period(central_mass, r);
    let steps_per_orbit = 1_000;
    let dt = period / steps_per_orbit as f64;
    let n_orbits = 10;
    let n_steps = steps_per_orbit * n_orbits;

    println!("\nIntegration parameters:");
    println!("  Orbital period: {:.4e} s ({:.3} days)", period, period / 86_400.0);
    println!("  Timestep: {:.1} s ({} steps/orbit)", dt, steps_per_orbit);
    println!("  Total time: {} orbits", n_orbits);
    println!("  Total steps: {}", n_steps);

    println!("\nIntegrating...");

    // Integrate and track diagnostics
    let mut orbit_count = 0;
    let mut next_orbit_time = period;

    for _step in 0..n_steps {
        integrator.step(&mut system, dt, &force);

        // Print diagnostics every orbit
        if system.time >= next_orbit_time {
            orbit_count += 1;
            next_orbit_time += period;

            let body = &system.bodies[1];
            let r_current = body.distance_from_origin();
            let v_current = body.speed();

            let ke = system.kinetic_energy();
            let pe = force.potential_energy(&system);
            let energy = ke + pe;
            let l = system.total_angular_momentum().norm();

            let energy_error = ((energy - initial_energy) / initial_energy).abs();
            let l_error = ((l - initial_l) / initial_l).abs();
            let r_error = ((r_current - r) / r).abs();

            println!(
                "Orbit {}: r={:.6e} m, v={:.2} km/s, ΔE={:.2e}, ΔL={:.2e}, Δr={:.2e}",
                orbit_count,
                r_current,
                v_current / 1000.0,
                energy_error,
                l_error,
                r_error
            );
        }
    }

    // Final diagnostics
    let final_ke = system.kinetic_energy();
    let final_pe = force.potential_energy(&system);
    let final_energy = final_ke + final_pe;
    let final_l = system.total_angular_momentum().norm();

    println!("\n{}", "=".repeat(60));
    println!("Final diagnostics:");
    println!(
        "  Time: {:.4e} s ({:.1} orbits)",
        system.time,
        system.time / period
    );

    let energy_error = ((final_energy - initial_energy) / initial_energy).abs();
    let l_error = ((final_l - initial_l) / initial_l).abs();

    println!("\nConservation:");
    println!(
        "  Energy error: {:.2e} ({:.4}%)",
        energy_error,
        energy_error * 100.0
    );
    println!("  Angular momentum error: {:.2e}", l_error);

    let final_body = &system.bodies[1];
    println!("\nFinal position:");
    println!(
        "  x = {:.6e} m, y = {:.6e} m, z = {:.6e} m",
        final_body.position.x, final_body.position.y, final_body.position.z
    );
    println!("  r = {:.6e} m", final_body.distance_from_origin());

    // Success criteria
    println!("\n{}", "=".repeat(60));
    if energy_error < 1e-2 {
        println!("✓ Energy drift bounded (< 1%)");
    } else {
        println!("✗ Energy error too large: {:.2e}", energy_error);
    }

    let r_final = final_body.distance_from_origin();
    let r_error = ((r_final - r) / r).abs();
    if r_error < 0.01 {
        println!("✓ Orbit remains circular (Δr < 1%)");
    } else {
        println!("✗ Orbit drift: {:.2e}", r_error);
    }

    println!("\nTest complete!");
}
