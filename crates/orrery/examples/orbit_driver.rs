//! Minimal external driver loop.
//!
//! Stands in for the renderer/UI that normally consumes the engine:
//! steps the simulation, reads body positions between ticks, and issues
//! the control commands (pause, time-step change, reset) a real driver
//! would.
//!
//! Run with: cargo run --package orrery --example orbit_driver

use orrery::scenario::inner_system;
use orrery::simulation::Simulation;

fn print_positions(sim: &Simulation) {
    for body in sim.bodies() {
        println!(
            "  body {:>2}: pos = ({:+.3e}, {:+.3e}, {:+.3e}) m, |v| = {:.2} km/s",
            body.id.0,
            body.position.x,
            body.position.y,
            body.position.z,
            body.speed() / 1000.0
        );
    }
}

fn main() {
    let mut sim = Simulation::new(inner_system().expect("reference scenario is valid"));

    // Pace the loop off the innermost orbit
    let dt = sim.suggest_time_step();
    sim.set_time_step(dt);

    println!("Driving {} bodies, dt = {:.1} s", sim.body_count(), dt);
    println!("\nInitial state:");
    print_positions(&sim);

    // Run a quarter of the innermost orbit
    for _ in 0..25 {
        sim.step();
    }
    println!("\nAfter 25 ticks (t = {:.3e} s):", sim.time());
    print_positions(&sim);

    // Pausing freezes the state; ticks become no-ops
    sim.pause();
    let frozen_time = sim.time();
    for _ in 0..10 {
        sim.step();
    }
    assert_eq!(sim.time(), frozen_time);
    println!("\nPaused for 10 ticks: t still {:.3e} s", sim.time());

    // Resume at a finer time step
    sim.resume();
    sim.set_time_step(dt / 10.0);
    for _ in 0..50 {
        sim.step();
    }
    println!("\nResumed at dt/10 (t = {:.3e} s):", sim.time());
    print_positions(&sim);

    // Reset discards all evolution since construction
    sim.reset();
    println!("\nAfter reset (t = {:.3e} s):", sim.time());
    print_positions(&sim);
}
