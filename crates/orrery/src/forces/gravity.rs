//! Direct N-body gravity (O(N²) implementation)

use crate::forces::{ForceModel, G};
use crate::state::SystemState;

/// Direct O(N²) pairwise gravitational force accumulation.
///
/// Visits every unordered pair once, computes the Newtonian attraction,
/// and applies it to both bodies with opposite signs, so the pair's
/// contributions cancel exactly in the system's momentum total. Simple
/// and accurate, but scales poorly for large N.
///
/// Coincident bodies are a defined degeneracy, not an error: a pair at
/// zero separation has no meaningful direction and contributes nothing.
///
/// Best for:
/// - Small systems (N in the tens to low hundreds)
/// - Testing and validation
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
///     Vector3::zeros(),
/// ).unwrap();
///
/// let gravity = DirectGravity::new();
/// system.clear_forces();
/// gravity.accumulate(&mut system);
///
/// // Newton's third law: equal and opposite
/// let f0 = system.bodies[0].force;
/// let f1 = system.bodies[1].force;
/// assert_eq!(f0, -f1);
/// ```
pub struct DirectGravity {
    /// Optional softening length to tame close encounters (m)
    pub softening: f64,
}

impl DirectGravity {
    /// Creates a new direct gravity force with no softening
    pub fn new() -> Self {
        Self { softening: 0.0 }
    }

    /// Creates a new direct gravity force with specified softening length
    ///
    /// # Arguments
    ///
    /// * `softening` - Softening length in m
    pub fn with_softening(softening: f64) -> Self {
        Self { softening }
    }
}

impl Default for DirectGravity {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceModel for DirectGravity {
    fn accumulate(&self, state: &mut SystemState) {
        let eps2 = self.softening * self.softening;

        for i in 0..state.bodies.len() {
            // Split so the pair (i, j) can be borrowed mutably at once
            let (head, tail) = state.bodies.split_at_mut(i + 1);
            let first = &mut head[i];

            for second in tail.iter_mut() {
                let r = second.position - first.position;
                let r_sq = r.norm_squared();

                // Coincident bodies: no defined direction, skip the pair
                if r_sq == 0.0 {
                    continue;
                }

                let denom_sq = r_sq + eps2;
                let f = r * (G * first.mass * second.mass / (denom_sq * denom_sq.sqrt()));

                first.force += f;
                second.force -= f;
            }
        }
    }

    fn potential_energy(&self, state: &SystemState) -> f64 {
        let eps2 = self.softening * self.softening;

        // Each pair counted once
        state
            .bodies
            .iter()
            .enumerate()
            .flat_map(|(i, a)| {
                state.bodies[i + 1..].iter().filter_map(move |b| {
                    let r_sq = (a.position - b.position).norm_squared();
                    if r_sq == 0.0 {
                        return None;
                    }
                    Some(-G * a.mass * b.mass / (r_sq + eps2).sqrt())
                })
            })
            .sum()
    }
}
