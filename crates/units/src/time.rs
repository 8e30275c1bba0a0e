use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::constants::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// A physical time quantity with seconds as the base unit.
///
/// Orbital periods of wide binaries run to thousands of days while the
/// solver works in seconds, so the common conversions live here.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: seconds

impl Time {
    /// Creates a new `Time` from a value in seconds.
    pub fn from_seconds(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Time` from a value in minutes.
    pub fn from_minutes(value: f64) -> Self {
        Self(value * SECONDS_PER_MINUTE)
    }

    /// Creates a new `Time` from a value in hours.
    pub fn from_hours(value: f64) -> Self {
        Self(value * SECONDS_PER_HOUR)
    }

    /// Creates a new `Time` from a value in days.
    pub fn from_days(value: f64) -> Self {
        Self(value * SECONDS_PER_DAY)
    }

    /// Returns the time in seconds.
    pub fn to_seconds(&self) -> f64 {
        self.0
    }

    /// Converts the time to minutes.
    pub fn to_minutes(&self) -> f64 {
        self.0 / SECONDS_PER_MINUTE
    }

    /// Converts the time to hours.
    pub fn to_hours(&self) -> f64 {
        self.0 / SECONDS_PER_HOUR
    }

    /// Converts the time to days.
    pub fn to_days(&self) -> f64 {
        self.0 / SECONDS_PER_DAY
    }
}

impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Time {
        Time(self.0 + rhs.0)
    }
}

impl Sub for Time {
    type Output = Time;

    fn sub(self, rhs: Time) -> Time {
        Time(self.0 - rhs.0)
    }
}

impl Mul<f64> for Time {
    type Output = Time;

    fn mul(self, rhs: f64) -> Time {
        Time(self.0 * rhs)
    }
}

impl Div<f64> for Time {
    type Output = Time;

    fn div(self, rhs: f64) -> Time {
        Time(self.0 / rhs)
    }
}

/// Division of Time by Time returns a dimensionless ratio
impl Div for Time {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}
