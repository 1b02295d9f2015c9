//! Force models for the N-body engine.
//!
//! This module provides the `ForceModel` trait and implementations for
//! accumulating gravitational forces on bodies.

use crate::state::SystemState;

pub mod gravity;

#[cfg(test)]
mod gravity_test;

pub use gravity::DirectGravity;

/// Gravitational constant in m³ kg⁻¹ s⁻²
pub const G: f64 = 6.674_30e-11;

/// A source of force on bodies in an N-body system.
///
/// A force model *adds* each body's net contribution into its `force`
/// accumulator; it never clears the accumulators itself, so several
/// models can be layered over one pass. The caller zeroes accumulators
/// with [`SystemState::clear_forces`] before the pass begins — the
/// integrators do this on every step.
///
/// # Examples
///
/// ```
/// use nalgebra::{Point3, Vector3};
/// use orrery::forces::{DirectGravity, ForceModel};
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
/// let gravity = DirectGravity::new();
/// system.clear_forces();
/// gravity.accumulate(&mut system);
///
/// // The satellite is pulled back toward the origin
/// assert!(system.bodies[1].force.x < 0.0);
/// ```
pub trait ForceModel: Send + Sync {
    /// Accumulate this model's force contributions onto every body.
    ///
    /// Implementations add into each body's `force` field and touch no
    /// other state.
    fn accumulate(&self, state: &mut SystemState);

    /// Compute potential energy contribution in J (optional).
    ///
    /// Default implementation returns 0.0. Override for force models
    /// that contribute to potential energy (e.g., gravity).
    fn potential_energy(&self, _state: &SystemState) -> f64 {
        0.0
    }
}

/// Combine multiple force models into a single composite force.
///
/// # Examples
///
/// ```
/// use orrery::forces::{CompositeForce, DirectGravity};
///
/// let composite = CompositeForce::new()
///     .with_force(DirectGravity::new());
///
/// // Later we could add drag, thrust, etc.
/// ```
pub struct CompositeForce {
    models: Vec<Box<dyn ForceModel>>,
}

impl CompositeForce {
    /// Creates an empty composite force
    pub fn new() -> Self {
        Self { models: Vec::new() }
    }

    /// Adds a force model to the composite
    pub fn with_force<F: ForceModel + 'static>(mut self, force: F) -> Self {
        self.models.push(Box::new(force));
        self
    }
}

impl Default for CompositeForce {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceModel for CompositeForce {
    fn accumulate(&self, state: &mut SystemState) {
        for model in &self.models {
            model.accumulate(state);
        }
    }

    fn potential_energy(&self, state: &SystemState) -> f64 {
        self.models.iter().map(|f| f.potential_energy(state)).sum()
    }
}
