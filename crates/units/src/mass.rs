use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::constants::SUN_MASS_KG;

/// A physical mass quantity using f64 precision.
///
/// The `Mass` struct represents mass values with kilograms as the base unit.
/// Stellar masses are conventionally quoted in solar masses, while Kepler's
/// third law and the vis-viva equation want kilograms; this type holds the
/// conversion in one place.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let primary = Mass::from_solar_masses(1.2);
/// let secondary = Mass::from_solar_masses(3.5);
///
/// let total_kg = (primary + secondary).to_kg();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: kilograms

impl Mass {
    /// Creates a new `Mass` from a value in kilograms.
    pub fn from_kg(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Mass` from a value in solar masses.
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value * SUN_MASS_KG)
    }

    /// Returns the mass in kilograms.
    pub fn to_kg(&self) -> f64 {
        self.0
    }

    /// Converts the mass to solar masses.
    pub fn to_solar_masses(&self) -> f64 {
        self.0 / SUN_MASS_KG
    }
}

impl Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Mass) -> Mass {
        Mass(self.0 + rhs.0)
    }
}

impl Sub for Mass {
    type Output = Mass;

    fn sub(self, rhs: Mass) -> Mass {
        Mass(self.0 - rhs.0)
    }
}

impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, rhs: f64) -> Mass {
        Mass(self.0 * rhs)
    }
}

impl Div<f64> for Mass {
    type Output = Mass;

    fn div(self, rhs: f64) -> Mass {
        Mass(self.0 / rhs)
    }
}

/// Division of Mass by Mass returns a dimensionless ratio
impl Div for Mass {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}
