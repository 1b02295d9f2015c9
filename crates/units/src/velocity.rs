use crate::length::AU_M;
use crate::time::SECONDS_PER_YEAR;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// Convert between AU/year and m/s
pub const AU_YEAR_TO_M_SEC: f64 = AU_M / SECONDS_PER_YEAR;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Velocity(f64); // Base unit: m/s

impl Velocity {
    pub fn from_meters_per_sec(value: f64) -> Self {
        Self(value)
    }

    pub fn from_km_per_sec(value: f64) -> Self {
        Self(value * 1000.0)
    }

    pub fn from_au_per_year(value: f64) -> Self {
        Self(value * AU_YEAR_TO_M_SEC)
    }

    pub fn to_meters_per_sec(&self) -> f64 {
        self.0
    }

    pub fn to_km_per_sec(&self) -> f64 {
        self.0 / 1000.0
    }

    pub fn to_au_per_year(&self) -> f64 {
        self.0 / AU_YEAR_TO_M_SEC
    }
}

impl Add for Velocity {
    type Output = Velocity;

    fn add(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 + rhs.0)
    }
}

impl Sub for Velocity {
    type Output = Velocity;

    fn sub(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 - rhs.0)
    }
}

impl Mul<f64> for Velocity {
    type Output = Velocity;

    fn mul(self, rhs: f64) -> Velocity {
        Velocity(self.0 * rhs)
    }
}

impl Div<f64> for Velocity {
    type Output = Velocity;

    fn div(self, rhs: f64) -> Velocity {
        Velocity(self.0 / rhs)
    }
}
