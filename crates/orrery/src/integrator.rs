//! Time integration for N-body systems.
//!
//! The primary integrator is the kick-drift leapfrog, whose symplectic
//! update keeps energy drift bounded over long runs. An explicit Euler
//! integrator is kept for comparison only.

use crate::forces::ForceModel;
use crate::state::SystemState;

/// A time integrator for N-body systems.
///
/// Integrators advance the system state forward in time by running a
/// complete force pass and then updating velocities and positions.
pub trait Integrator: Send + Sync {
    /// Advance the system by one timestep.
    ///
    /// `dt` is a single scalar shared by every body for this tick; the
    /// force pass completes for all bodies before any body moves.
    ///
    /// # Arguments
    ///
    /// * `state` - Current system state (modified in place)
    /// * `dt` - Timestep in seconds
    /// * `force` - Force model that fills the accumulators
    fn step(&self, state: &mut SystemState, dt: f64, force: &dyn ForceModel);

    /// Advance the system by multiple timesteps.
    ///
    /// # Returns
    ///
    /// Final time after integration
    fn integrate(
        &self,
        state: &mut SystemState,
        dt: f64,
        n_steps: usize,
        force: &dyn ForceModel,
    ) -> f64 {
        for _ in 0..n_steps {
            self.step(state, dt, force);
        }
        state.time
    }
}

/// Kick-drift leapfrog integrator.
///
/// Each step runs the full pairwise force pass, then per body:
///
/// 1. Kick: `v(t + dt) = v(t) + (F/m) * dt`
/// 2. Drift: `x(t + dt) = x(t) + v(t + dt) * dt`
///
/// The drift uses the *updated* velocity — that ordering, rather than a
/// simultaneous update, is what makes the scheme symplectic and keeps
/// energy drift bounded over long integrations, where explicit Euler
/// drifts systematically.
///
/// # Examples
///
/// ```
/// use nalgebra::{Point3, Vector3};
/// use orrery::forces::DirectGravity;
/// use orrery::integrator::{Integrator, Leapfrog};
/// use orrery::state::SystemState;
///
/// let mut system = SystemState::new();
/// system.add_body(1.989e30, 6.957e8, Point3::origin(), Vector3::zeros()).unwrap();
/// system.add_body(
///     5.972e24,
///     6.371e6,
///     Point3::new(1.496e11, 0.0, 0.0),
///     Vector3::new(0.0, 2.978e4, 0.0),
/// ).unwrap();
///
/// let force = DirectGravity::new();
/// Leapfrog.step(&mut system, 60.0, &force);
/// assert!(system.time > 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Leapfrog;

impl Integrator for Leapfrog {
    fn step(&self, state: &mut SystemState, dt: f64, force: &dyn ForceModel) {
        // Full force accumulation before any body moves
        state.clear_forces();
        force.accumulate(state);

        for body in &mut state.bodies {
            body.acceleration = body.force / body.mass;
            body.velocity += body.acceleration * dt;
            body.position += body.velocity * dt;
        }

        state.time += dt;
    }
}

/// Explicit Euler integrator (1st order, for testing/comparison only).
///
/// Advances position with the *old* velocity before kicking, which is
/// exactly the non-symplectic ordering that drifts in energy. Kept so
/// tests can demonstrate the difference; do not use for real runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euler;

impl Integrator for Euler {
    fn step(&self, state: &mut SystemState, dt: f64, force: &dyn ForceModel) {
        state.clear_forces();
        force.accumulate(state);

        for body in &mut state.bodies {
            body.acceleration = body.force / body.mass;
            body.position += body.velocity * dt;
            body.velocity += body.acceleration * dt;
        }

        state.time += dt;
    }
}
