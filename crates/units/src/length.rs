use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::constants::{AU_M, PARSEC_M, SUN_RADIUS_M};

/// A physical length quantity using f64 precision.
///
/// The `Length` struct represents length values with meters as the base unit.
/// Binary-orbit separations arrive in meters, stellar radii in solar radii,
/// and system distances in parsecs; this type carries all three without the
/// caller tracking scale factors by hand.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// // Create lengths using different units
/// let separation = Length::from_meters(2e12);
/// let radius = Length::from_solar_radii(1.2);
/// let distance = Length::from_parsecs(342.5);
///
/// // Convert between units
/// let separation_au = separation.to_au();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: meters

impl Length {
    /// Creates a new `Length` from a value in meters.
    pub fn from_meters(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(value * AU_M)
    }

    /// Creates a new `Length` from a value in solar radii.
    pub fn from_solar_radii(value: f64) -> Self {
        Self(value * SUN_RADIUS_M)
    }

    /// Creates a new `Length` from a value in parsecs.
    pub fn from_parsecs(value: f64) -> Self {
        Self(value * PARSEC_M)
    }

    /// Returns the length in meters.
    pub fn to_m(&self) -> f64 {
        self.0
    }

    /// Converts the length to astronomical units.
    pub fn to_au(&self) -> f64 {
        self.0 / AU_M
    }

    /// Converts the length to solar radii.
    pub fn to_solar_radii(&self) -> f64 {
        self.0 / SUN_RADIUS_M
    }

    /// Converts the length to parsecs.
    pub fn to_parsecs(&self) -> f64 {
        self.0 / PARSEC_M
    }

    /// Returns the minimum of two lengths.
    pub fn min(self, other: Self) -> Self {
        if self.0 < other.0 {
            self
        } else {
            other
        }
    }

    /// Returns the maximum of two lengths.
    pub fn max(self, other: Self) -> Self {
        if self.0 > other.0 {
            self
        } else {
            other
        }
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Length (commutative multiplication)
impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}
