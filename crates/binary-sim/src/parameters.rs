use serde::{Deserialize, Serialize};

/// Input parameters for a binary-system simulation.
///
/// Pure data in the units observers actually quote: masses in solar
/// masses, radii in solar radii, distance in parsecs, angles in degrees.
/// All conversion to SI happens when [`crate::BinarySystem::new`] consumes
/// this record, never inside the physics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryParameters {
    /// Mass of the primary (M☉)
    pub first_mass: f64,
    /// Mass of the secondary (M☉)
    pub second_mass: f64,
    /// Effective temperature of the primary (K)
    pub first_temperature: f64,
    /// Effective temperature of the secondary (K)
    pub second_temperature: f64,
    /// Radius of the primary (R☉)
    pub first_radius: f64,
    /// Radius of the secondary (R☉)
    pub second_radius: f64,
    /// Distance to the system (pc)
    pub distance: f64,
    /// Sum of the two semi-major axes (m)
    pub sum_semi_major_axes: f64,
    /// Orbital eccentricity, in [0, 1)
    pub eccentricity: f64,
    /// Longitude of the ascending node (deg)
    pub longitude_node: f64,
    /// Orbital inclination (deg)
    pub inclination: f64,
    /// Argument of periastron of the primary (deg)
    pub periastron_argument: f64,
    /// Epoch of periastron passage (s)
    pub periastron_passage: f64,
    /// Passband code, one of U/B/V/I
    pub passband: String,
    /// Observation length as a multiple of the orbital period
    pub observation_periods: f64,
    /// Number of samples across the observation
    pub sample_count: usize,
    /// Baseline magnitude the brightness track is reported against
    pub zero_point: f64,
}
