use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// A physical velocity quantity with meters per second as the base unit.
///
/// Radial velocities are computed in m/s and usually reported in km/s.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Velocity(f64); // Base unit: m/s

impl Velocity {
    /// Creates a new `Velocity` from a value in meters per second.
    pub fn from_meters_per_sec(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Velocity` from a value in kilometers per second.
    pub fn from_km_per_sec(value: f64) -> Self {
        Self(value * 1000.0)
    }

    /// Returns the velocity in meters per second.
    pub fn to_meters_per_sec(&self) -> f64 {
        self.0
    }

    /// Converts the velocity to kilometers per second.
    pub fn to_km_per_sec(&self) -> f64 {
        self.0 / 1000.0
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
