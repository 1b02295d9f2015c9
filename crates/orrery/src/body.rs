use nalgebra::{Point3, Vector3};

use crate::error::BodyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);

/// One simulated point mass.
///
/// `position` and `velocity` evolve every tick. `force` is an
/// accumulator that force models add into and that is cleared at the
/// start of every force pass; `acceleration` is derived from it during
/// integration and kept only as a diagnostic. `radius` is physical
/// metadata for the renderer and the reset snapshot, never read by the
/// force computation.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub id: BodyId,
    pub mass: f64,                   // kg
    pub radius: f64,                 // m (display/snapshot metadata)
    pub position: Point3<f64>,       // m
    pub velocity: Vector3<f64>,      // m/s
    pub acceleration: Vector3<f64>,  // m/s², recomputed every tick
    pub force: Vector3<f64>,         // N, cleared before each force pass
}

impl Body {
    /// Creates a body, rejecting non-positive or non-finite mass.
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::{Point3, Vector3};
    /// use orrery::body::{Body, BodyId};
    ///
    /// let body = Body::new(
    ///     BodyId(0),
    ///     5.972e24,
    ///     6.371e6,
    ///     Point3::new(1.496e11, 0.0, 0.0),
    ///     Vector3::new(0.0, 2.978e4, 0.0),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(body.mass, 5.972e24);
    /// assert!(Body::new(BodyId(1), -1.0, 1.0, Point3::origin(), Vector3::zeros()).is_err());
    /// ```
    pub fn new(
        id: BodyId,
        mass: f64,
        radius: f64,
        position: Point3<f64>,
        velocity: Vector3<f64>,
    ) -> Result<Self, BodyError> {
        if !mass.is_finite() {
            return Err(BodyError::NonFiniteMass);
        }
        if mass <= 0.0 {
            return Err(BodyError::NonPositiveMass { mass });
        }

        Ok(Body {
            id,
            mass,
            radius,
            position,
            velocity,
            acceleration: Vector3::zeros(),
            force: Vector3::zeros(),
        })
    }

    pub fn momentum(&self) -> Vector3<f64> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_squared()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.position - other.position).norm()
    }

    pub fn distance_from_origin(&self) -> f64 {
        self.position.coords.norm()
    }

    /// Angular momentum per unit mass about the origin (r × v)
    pub fn specific_angular_momentum(&self) -> Vector3<f64> {
        self.position.coords.cross(&self.velocity)
    }
}
