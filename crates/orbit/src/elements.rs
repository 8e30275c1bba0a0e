use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use units::constants::G;
use units::Mass;

use crate::error::OrbitError;

/// Static description of one component's orbit in a binary system.
///
/// Masses are in solar masses, the separation sum in meters and the
/// periastron epoch in seconds, matching the conventions of published
/// binary-orbit solutions. The described component is the one with
/// `first_mass`; it orbits the barycenter on an ellipse whose size is set
/// by the companion's share of the total mass.
///
/// # Examples
///
/// ```rust
/// use orbit::OrbitalElements;
///
/// let elements = OrbitalElements::new(1.2, 3.5, 2e12, 0.57, 0.0).unwrap();
/// assert!(elements.period() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// Mass of the described component (M☉)
    first_mass: f64,
    /// Mass of the companion (M☉)
    second_mass: f64,
    /// Sum of both semi-major axes (m)
    sum_semi_major_axes: f64,
    /// Eccentricity, in [0, 1)
    eccentricity: f64,
    /// Epoch of periastron passage (s)
    periastron_passage: f64,
}

impl OrbitalElements {
    /// Validates and builds a set of orbital elements.
    ///
    /// Masses and the separation sum must be positive and the eccentricity
    /// must lie in `[0, 1)`; parabolic and hyperbolic orbits are rejected.
    pub fn new(
        first_mass: f64,
        second_mass: f64,
        sum_semi_major_axes: f64,
        eccentricity: f64,
        periastron_passage: f64,
    ) -> Result<Self, OrbitError> {
        if !(first_mass > 0.0) || !(second_mass > 0.0) {
            return Err(OrbitError::InvalidElements(format!(
                "masses must be positive, got {} and {}",
                first_mass, second_mass
            )));
        }
        if !(sum_semi_major_axes > 0.0) {
            return Err(OrbitError::InvalidElements(format!(
                "sum of semi-major axes must be positive, got {}",
                sum_semi_major_axes
            )));
        }
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(OrbitError::InvalidElements(format!(
                "eccentricity must be in [0, 1), got {}",
                eccentricity
            )));
        }

        Ok(Self {
            first_mass,
            second_mass,
            sum_semi_major_axes,
            eccentricity,
            periastron_passage,
        })
    }

    /// Elements of the companion star: same orbit geometry, masses swapped.
    pub fn companion(&self) -> Self {
        Self {
            first_mass: self.second_mass,
            second_mass: self.first_mass,
            ..*self
        }
    }

    /// Mass of the described component in solar masses.
    pub fn first_mass(&self) -> f64 {
        self.first_mass
    }

    /// Mass of the companion in solar masses.
    pub fn second_mass(&self) -> f64 {
        self.second_mass
    }

    /// Sum of both semi-major axes in meters.
    pub fn sum_semi_major_axes(&self) -> f64 {
        self.sum_semi_major_axes
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Epoch of periastron passage in seconds.
    pub fn periastron_passage(&self) -> f64 {
        self.periastron_passage
    }

    /// Total mass of the pair in kilograms.
    pub fn total_mass_kg(&self) -> f64 {
        Mass::from_solar_masses(self.first_mass + self.second_mass).to_kg()
    }

    /// Semi-major axis of this component's orbit around the barycenter (m).
    ///
    /// The component's ellipse scales with the companion's share of the
    /// total mass: `a = a_sum * m2 / (m1 + m2)`.
    pub fn semi_major_axis(&self) -> f64 {
        self.sum_semi_major_axes * self.second_mass / (self.first_mass + self.second_mass)
    }

    /// Orbital period in seconds, from Kepler's third law applied to the
    /// relative orbit (`a_sum`, total mass).
    pub fn period(&self) -> f64 {
        (4.0 * PI.powi(2) * self.sum_semi_major_axes.powi(3) / (G * self.total_mass_kg())).sqrt()
    }
}
