//! Driver-facing simulation facade.
//!
//! [`Simulation`] bundles the body state, a force model, an integrator,
//! and the current time step behind the small surface an external
//! driver needs: `step`, `bodies`, `reset`, `set_time_step`, and the
//! pause flag. The engine performs no timing or threading of its own —
//! any scheduler (render loop, timer, test harness) decides when ticks
//! happen.

use serde::Serialize;

use crate::body::Body;
use crate::forces::{DirectGravity, ForceModel};
use crate::integrator::{Integrator, Leapfrog};
use crate::scenario::orbital_period;
use crate::state::SystemState;

/// Deep copy of the system taken at construction or re-initialization.
///
/// Owns independent `Body` values, never references into the live set;
/// consumed only by reset and never mutated afterwards.
#[derive(Debug, Clone)]
struct InitialConditions {
    time: f64,
    bodies: Vec<Body>,
}

impl InitialConditions {
    fn capture(state: &SystemState) -> Self {
        let bodies = state
            .bodies
            .iter()
            .map(|b| {
                let mut body = *b;
                // Transients do not survive into the snapshot
                body.force = nalgebra::Vector3::zeros();
                body.acceleration = nalgebra::Vector3::zeros();
                body
            })
            .collect();

        Self {
            time: state.time,
            bodies,
        }
    }
}

/// Render-facing view of one body.
#[derive(Clone, Debug, Serialize)]
pub struct BodySnapshot {
    /// Unique body ID
    pub id: u32,
    /// Mass in kg
    pub mass: f64,
    /// Physical radius in m
    pub radius: f64,
    /// Position [x, y, z] in m
    pub position: [f64; 3],
    /// Velocity [x, y, z] in m/s
    pub velocity: [f64; 3],
    /// Speed in m/s
    pub speed: f64,
}

impl From<&Body> for BodySnapshot {
    fn from(body: &Body) -> Self {
        Self {
            id: body.id.0,
            mass: body.mass,
            radius: body.radius,
            position: [body.position.x, body.position.y, body.position.z],
            velocity: [body.velocity.x, body.velocity.y, body.velocity.z],
            speed: body.speed(),
        }
    }
}

/// An owned, single-threaded N-body simulation.
///
/// Each tick runs force accumulation to completion, then integration to
/// completion. Exclusive ownership (`&mut self` on [`Simulation::step`])
/// means nothing can observe or mutate the body set mid-tick; reads
/// between ticks through [`Simulation::bodies`] are always consistent.
///
/// # Examples
///
/// ```
/// use orrery::scenario::inner_system;
/// use orrery::simulation::Simulation;
///
/// let mut sim = Simulation::new(inner_system().unwrap()).with_time_step(3_600.0);
///
/// sim.step();
/// assert!(sim.time() > 0.0);
///
/// sim.reset();
/// assert_eq!(sim.time(), 0.0);
/// ```
pub struct Simulation {
    state: SystemState,
    initial: InitialConditions,
    force: Box<dyn ForceModel>,
    integrator: Box<dyn Integrator>,
    time_step: f64,
    paused: bool,
}

impl Simulation {
    /// Creates a simulation over `state`, capturing the initial-condition
    /// snapshot that [`Simulation::reset`] restores.
    ///
    /// Defaults: direct O(N²) gravity, kick-drift leapfrog, a 1 s time
    /// step. Callers set the step to match their scenario's scale
    /// ([`Simulation::suggest_time_step`] gives a reasonable value).
    pub fn new(state: SystemState) -> Self {
        let initial = InitialConditions::capture(&state);
        Self {
            state,
            initial,
            force: Box::new(DirectGravity::new()),
            integrator: Box::new(Leapfrog),
            time_step: 1.0,
            paused: false,
        }
    }

    /// Replaces the force model.
    pub fn with_force<F: ForceModel + 'static>(mut self, force: F) -> Self {
        self.force = Box::new(force);
        self
    }

    /// Replaces the integrator.
    pub fn with_integrator<I: Integrator + 'static>(mut self, integrator: I) -> Self {
        self.integrator = Box::new(integrator);
        self
    }

    /// Sets the time step used by [`Simulation::step`].
    pub fn with_time_step(mut self, dt: f64) -> Self {
        self.time_step = dt;
        self
    }

    /// Advances the simulation by one tick with the configured time step.
    ///
    /// When paused this is a complete no-op: no force pass, no
    /// integration, state frozen.
    ///
    /// # Returns
    ///
    /// Current simulation time in seconds
    pub fn step(&mut self) -> f64 {
        self.step_with(self.time_step)
    }

    /// Advances the simulation by one tick with an explicit time step.
    ///
    /// `dt` is shared by every body for the whole tick.
    pub fn step_with(&mut self, dt: f64) -> f64 {
        if !self.paused {
            self.integrator.step(&mut self.state, dt, self.force.as_ref());
        }
        self.state.time
    }

    /// Read-only view of the current body states for rendering.
    pub fn bodies(&self) -> &[Body] {
        &self.state.bodies
    }

    /// Serializable snapshot of every body.
    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.state.bodies.iter().map(BodySnapshot::from).collect()
    }

    /// The underlying system state.
    pub fn state(&self) -> &SystemState {
        &self.state
    }

    /// Current simulation time in seconds.
    pub fn time(&self) -> f64 {
        self.state.time
    }

    /// Number of simulated bodies.
    pub fn body_count(&self) -> usize {
        self.state.body_count()
    }

    /// Restores the initial-condition snapshot.
    ///
    /// Same bodies, ids, masses, positions, and velocities as the
    /// moment the snapshot was captured; force and acceleration
    /// transients zeroed. Idempotent, and the snapshot itself is never
    /// touched — resetting twice yields the same state as resetting
    /// once, no matter how many steps ran in between.
    pub fn reset(&mut self) {
        self.state.time = self.initial.time;
        self.state.bodies = self.initial.bodies.clone();
    }

    /// Replaces the live system *and* recaptures the snapshot.
    ///
    /// Subsequent [`Simulation::reset`] calls restore this new state.
    pub fn reinitialize(&mut self, state: SystemState) {
        self.initial = InitialConditions::capture(&state);
        self.state = state;
    }

    /// Updates the time step used by subsequent [`Simulation::step`]
    /// calls; takes effect starting with the next full tick.
    ///
    /// The engine does not clamp the value — bounding it to a range the
    /// integrator handles gracefully is the caller's policy.
    pub fn set_time_step(&mut self, dt: f64) {
        self.time_step = dt;
    }

    /// Current time step in seconds.
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Freezes the simulation; subsequent ticks are no-ops until
    /// [`Simulation::resume`].
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Unfreezes the simulation.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Suggests a time step for stable integration.
    ///
    /// Returns a step such that the innermost body (relative to the
    /// most massive one) takes ~100 steps per orbit, or the current
    /// step when there are fewer than two bodies.
    pub fn suggest_time_step(&self) -> f64 {
        let Some(central) = self
            .state
            .bodies
            .iter()
            .max_by(|a, b| a.mass.total_cmp(&b.mass))
        else {
            return self.time_step;
        };

        let min_radius = self
            .state
            .bodies
            .iter()
            .filter(|b| b.id != central.id)
            .map(|b| b.distance_to(central))
            .fold(f64::INFINITY, f64::min);

        if !min_radius.is_finite() || min_radius == 0.0 {
            return self.time_step;
        }

        orbital_period(central.mass, min_radius) / 100.0
    }
}
