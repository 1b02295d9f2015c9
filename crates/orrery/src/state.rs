use nalgebra::{Point3, Vector3};

use crate::body::{Body, BodyId};
use crate::error::BodyError;

/// Complete state of an N-body system at a given time.
///
/// Bodies are stored in insertion order; pair iteration and summations
/// always walk that order, so a given system evolves bit-for-bit
/// reproducibly.
#[derive(Debug, Clone)]
pub struct SystemState {
    /// Current simulation time in seconds
    pub time: f64,
    /// Simulated bodies, in insertion order
    pub bodies: Vec<Body>,
    /// Next available body ID
    next_id: u32,
}

impl Default for SystemState {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemState {
    /// Creates an empty system at time zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use orrery::state::SystemState;
    ///
    /// let system = SystemState::new();
    /// assert_eq!(system.body_count(), 0);
    /// assert_eq!(system.time, 0.0);
    /// ```
    pub fn new() -> Self {
        Self {
            time: 0.0,
            bodies: Vec::new(),
            next_id: 0,
        }
    }

    /// Adds a new body to the system and returns its ID.
    ///
    /// Mass must be positive and finite; anything else is rejected with
    /// [`BodyError`] rather than poisoning later force passes.
    ///
    /// # Arguments
    ///
    /// * `mass` - Body mass in kg
    /// * `radius` - Physical radius in m (metadata only)
    /// * `position` - Position in m
    /// * `velocity` - Velocity in m/s
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::{Point3, Vector3};
    /// use orrery::state::SystemState;
    ///
    /// let mut system = SystemState::new();
    ///
    /// let sun = system
    ///     .add_body(1.989e30, 6.957e8, Point3::origin(), Vector3::zeros())
    ///     .unwrap();
    ///
    /// assert_eq!(system.body_count(), 1);
    /// assert_eq!(sun.0, 0);
    /// ```
    pub fn add_body(
        &mut self,
        mass: f64,
        radius: f64,
        position: Point3<f64>,
        velocity: Vector3<f64>,
    ) -> Result<BodyId, BodyError> {
        let id = BodyId(self.next_id);
        let body = Body::new(id, mass, radius, position, velocity)?;
        self.next_id += 1;
        self.bodies.push(body);
        Ok(id)
    }

    /// Removes a body from the system.
    ///
    /// Returns the removed body if found, `None` otherwise.
    pub fn remove_body(&mut self, id: BodyId) -> Option<Body> {
        self.bodies
            .iter()
            .position(|b| b.id == id)
            .map(|idx| self.bodies.remove(idx))
    }

    /// Gets a reference to a body by ID.
    pub fn get_body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Gets a mutable reference to a body by ID.
    pub fn get_body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    /// Returns the number of bodies in the system.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Zeroes every body's force accumulator.
    ///
    /// Called at the start of every force pass, before any model adds
    /// its contributions.
    pub fn clear_forces(&mut self) {
        for body in &mut self.bodies {
            body.force = Vector3::zeros();
        }
    }

    /// Returns the total mass of all bodies in kg.
    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.mass).sum()
    }

    /// Returns the total kinetic energy in J.
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }

    /// Returns the total momentum of all bodies in kg·m/s.
    ///
    /// Gravity is an internal force, so this should stay constant
    /// (useful for checking numerical drift).
    pub fn total_momentum(&self) -> Vector3<f64> {
        self.bodies
            .iter()
            .map(|b| b.momentum())
            .fold(Vector3::zeros(), |acc, p| acc + p)
    }

    /// Returns the total angular momentum about the origin in kg·m²/s.
    pub fn total_angular_momentum(&self) -> Vector3<f64> {
        self.bodies
            .iter()
            .map(|b| b.specific_angular_momentum() * b.mass)
            .fold(Vector3::zeros(), |acc, l| acc + l)
    }

    /// Returns the mass-weighted center of the system in m.
    ///
    /// Returns the origin for an empty system.
    pub fn barycenter(&self) -> Point3<f64> {
        let total = self.total_mass();
        if total == 0.0 {
            return Point3::origin();
        }

        let weighted = self
            .bodies
            .iter()
            .map(|b| b.position.coords * b.mass)
            .fold(Vector3::zeros(), |acc, r| acc + r);

        Point3::from(weighted / total)
    }
}
