//! Initial-condition construction.
//!
//! Builds physically plausible starting configurations: a massive
//! central body orbited by lighter satellites, each seeded with the
//! circular Keplerian velocity `v = sqrt(G·M/r)` so the system begins
//! near dynamical equilibrium instead of an arbitrary state. Satellite
//! orbits are placed in different coordinate planes to exercise the
//! full 3D force calculation.

use nalgebra::{Point3, Vector3};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use serde::Deserialize;
use units::{Length, Mass};

use crate::error::BodyError;
use crate::forces::G;
use crate::state::SystemState;

/// Circular orbital speed around a central mass.
///
/// For a body orbiting a central mass `M` at radius `r`, the circular
/// Keplerian speed is `sqrt(G·M/r)`, directed perpendicular to the
/// radius vector.
///
/// # Arguments
///
/// * `central_mass` - Central mass in kg
/// * `radius` - Orbital radius in m
///
/// # Returns
///
/// Circular velocity in m/s
///
/// # Examples
///
/// ```
/// use orrery::scenario::circular_velocity;
///
/// // Earth's orbital speed: ~29.78 km/s
/// let v = circular_velocity(1.989e30, 1.496e11);
/// assert!((v - 2.978e4).abs() < 100.0);
/// ```
pub fn circular_velocity(central_mass: f64, radius: f64) -> f64 {
    (G * central_mass / radius).sqrt()
}

/// Orbital period of a circular orbit, `T = 2π·sqrt(r³/(G·M))`.
///
/// # Arguments
///
/// * `central_mass` - Central mass in kg
/// * `radius` - Orbital radius in m
///
/// # Returns
///
/// Orbital period in seconds
pub fn orbital_period(central_mass: f64, radius: f64) -> f64 {
    2.0 * std::f64::consts::PI * (radius.powi(3) / (G * central_mass)).sqrt()
}

/// Coordinate plane an orbit lies in.
///
/// The reference scenario spreads satellites across all three planes so
/// no axis degenerates to zero throughout a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrbitPlane {
    #[default]
    Xy,
    Xz,
    Yz,
}

/// Position and velocity for a circular orbit.
///
/// Places the body on a circle of radius `orbit_radius` in the given
/// plane at angle `phase`, with the Keplerian speed directed along the
/// tangent.
///
/// # Arguments
///
/// * `central_mass` - Central mass in kg (assumed at the origin)
/// * `orbit_radius` - Orbital radius in m
/// * `plane` - Plane the orbit lies in
/// * `phase` - Angle around the orbit in radians
pub fn circular_orbit_state(
    central_mass: f64,
    orbit_radius: f64,
    plane: OrbitPlane,
    phase: f64,
) -> (Point3<f64>, Vector3<f64>) {
    let v = circular_velocity(central_mass, orbit_radius);
    let (sin, cos) = phase.sin_cos();
    let (r_cos, r_sin) = (orbit_radius * cos, orbit_radius * sin);
    let (v_cos, v_sin) = (v * cos, v * sin);

    match plane {
        OrbitPlane::Xy => (
            Point3::new(r_cos, r_sin, 0.0),
            Vector3::new(-v_sin, v_cos, 0.0),
        ),
        OrbitPlane::Xz => (
            Point3::new(r_cos, 0.0, r_sin),
            Vector3::new(-v_sin, 0.0, v_cos),
        ),
        OrbitPlane::Yz => (
            Point3::new(0.0, r_cos, r_sin),
            Vector3::new(0.0, -v_sin, v_cos),
        ),
    }
}

/// One satellite in a declarative scenario description.
#[derive(Debug, Clone, Deserialize)]
pub struct SatelliteConfig {
    /// Mass in kg
    pub mass: f64,
    /// Physical radius in m
    #[serde(default = "default_satellite_radius")]
    pub radius: f64,
    /// Circular orbit radius in m
    pub orbit_radius: f64,
    /// Plane the orbit lies in
    #[serde(default)]
    pub plane: OrbitPlane,
    /// Starting angle around the orbit in radians
    #[serde(default)]
    pub phase: f64,
}

fn default_satellite_radius() -> f64 {
    units::EARTH_RADIUS_M
}

fn default_central_mass() -> f64 {
    units::SOLAR_MASS_KG
}

fn default_central_radius() -> f64 {
    units::SOLAR_RADIUS_M
}

/// Declarative description of a central body plus satellites.
///
/// Deserializable so a driver can load scenarios from configuration;
/// [`ScenarioConfig::build`] turns it into a live [`SystemState`] with
/// every satellite on its circular Keplerian orbit.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioConfig {
    /// Central mass in kg
    #[serde(default = "default_central_mass")]
    pub central_mass: f64,
    /// Central body radius in m
    #[serde(default = "default_central_radius")]
    pub central_radius: f64,
    /// Orbiting satellites
    #[serde(default)]
    pub satellites: Vec<SatelliteConfig>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            central_mass: default_central_mass(),
            central_radius: default_central_radius(),
            satellites: Vec::new(),
        }
    }
}

impl ScenarioConfig {
    /// Builds the system state this configuration describes.
    ///
    /// The central body sits at rest at the origin; each satellite gets
    /// its circular-orbit position and velocity. Fails if any mass is
    /// non-positive or non-finite.
    pub fn build(&self) -> Result<SystemState, BodyError> {
        let mut state = SystemState::new();
        state.add_body(
            self.central_mass,
            self.central_radius,
            Point3::origin(),
            Vector3::zeros(),
        )?;

        for satellite in &self.satellites {
            let (position, velocity) = circular_orbit_state(
                self.central_mass,
                satellite.orbit_radius,
                satellite.plane,
                satellite.phase,
            );
            state.add_body(satellite.mass, satellite.radius, position, velocity)?;
        }

        Ok(state)
    }
}

/// Deterministic reference scenario: a solar-mass central body with
/// four planet-scale satellites spread across all three orbit planes.
pub fn inner_system() -> Result<SystemState, BodyError> {
    use std::f64::consts::PI;

    let config = ScenarioConfig {
        central_mass: Mass::from_solar_masses(1.0).to_kg(),
        central_radius: Length::from_solar_radii(1.0).to_meters(),
        satellites: vec![
            SatelliteConfig {
                mass: Mass::from_earth_masses(0.055).to_kg(),
                radius: Length::from_earth_radii(0.38).to_meters(),
                orbit_radius: Length::from_au(0.387).to_meters(),
                plane: OrbitPlane::Xy,
                phase: 0.0,
            },
            SatelliteConfig {
                mass: Mass::from_earth_masses(0.815).to_kg(),
                radius: Length::from_earth_radii(0.95).to_meters(),
                orbit_radius: Length::from_au(0.723).to_meters(),
                plane: OrbitPlane::Xz,
                phase: PI / 3.0,
            },
            SatelliteConfig {
                mass: Mass::from_earth_masses(1.0).to_kg(),
                radius: Length::from_earth_radii(1.0).to_meters(),
                orbit_radius: Length::from_au(1.0).to_meters(),
                plane: OrbitPlane::Yz,
                phase: PI,
            },
            SatelliteConfig {
                mass: Mass::from_jupiter_masses(1.0).to_kg(),
                radius: Length::from_earth_radii(11.2).to_meters(),
                orbit_radius: Length::from_au(5.2).to_meters(),
                plane: OrbitPlane::Xy,
                phase: 3.0 * PI / 2.0,
            },
        ],
    };

    config.build()
}

/// Seeded random scenario around a solar-mass central body.
///
/// The same seed always yields the same system, so runs are
/// reproducible.
///
/// # Arguments
///
/// * `seed` - RNG seed
/// * `n_satellites` - Number of satellites to generate
pub fn random_system(seed: u64, n_satellites: usize) -> Result<SystemState, BodyError> {
    use std::f64::consts::TAU;

    let mut rng = ChaChaRng::seed_from_u64(seed);
    let planes = [OrbitPlane::Xy, OrbitPlane::Xz, OrbitPlane::Yz];

    let satellites = (0..n_satellites)
        .map(|_| SatelliteConfig {
            mass: Mass::from_earth_masses(rng.random_range(0.05..15.0)).to_kg(),
            radius: Length::from_earth_radii(rng.random_range(0.4..2.5)).to_meters(),
            orbit_radius: Length::from_au(rng.random_range(0.3..8.0)).to_meters(),
            plane: planes[rng.random_range(0..planes.len())],
            phase: rng.random_range(0.0..TAU),
        })
        .collect();

    let config = ScenarioConfig {
        central_mass: Mass::from_solar_masses(1.0).to_kg(),
        central_radius: Length::from_solar_radii(1.0).to_meters(),
        satellites,
    };

    config.build()
}
