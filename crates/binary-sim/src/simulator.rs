//! Orchestration of the orbit and beaming pipelines over a time grid.

use nalgebra::Point2;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use beaming::{binary_brightness, BeamingError, BeamingSource, Passband};
use orbit::{OrbitError, OrbitalElements, OrbitalState, Orientation, ProjectedState};
use units::Length;

use crate::parameters::BinaryParameters;

/// Errors surfaced while building or running a simulation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error(transparent)]
    Orbit(#[from] OrbitError),

    #[error(transparent)]
    Beaming(#[from] BeamingError),
}

/// One time-series entry of the binary's state and combined light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrightnessSample {
    /// Sample time (s)
    pub time: f64,
    /// Sky position of the primary (m)
    pub first_position: Point2<f64>,
    /// Sky position of the secondary (m)
    pub second_position: Point2<f64>,
    /// Radial velocity of the primary (m/s)
    pub first_radial_velocity: f64,
    /// Radial velocity of the secondary (m/s)
    pub second_radial_velocity: f64,
    /// Combined magnitude relative to the zero point
    pub magnitude: f64,
}

/// Column-oriented output of a simulation run, ordered by time.
///
/// This is the data contract consumed by plotting and fitting tools:
/// one time track, two position tracks, two radial-velocity tracks and
/// one magnitude track, all the same length.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LightCurve {
    /// Sample times (s)
    pub times: Vec<f64>,
    /// Sky positions of the primary (m)
    pub first_positions: Vec<Point2<f64>>,
    /// Sky positions of the secondary (m)
    pub second_positions: Vec<Point2<f64>>,
    /// Radial velocities of the primary (m/s)
    pub first_radial_velocities: Vec<f64>,
    /// Radial velocities of the secondary (m/s)
    pub second_radial_velocities: Vec<f64>,
    /// Combined magnitudes
    pub magnitudes: Vec<f64>,
}

impl LightCurve {
    /// Number of samples in the curve.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// True when the curve holds no samples.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    fn push(&mut self, sample: &BrightnessSample) {
        self.times.push(sample.time);
        self.first_positions.push(sample.first_position);
        self.second_positions.push(sample.second_position);
        self.first_radial_velocities.push(sample.first_radial_velocity);
        self.second_radial_velocities.push(sample.second_radial_velocity);
        self.magnitudes.push(sample.magnitude);
    }

    /// Collects per-sample rows into column tracks, preserving order.
    pub fn from_samples(samples: &[BrightnessSample]) -> Self {
        let mut curve = Self::default();
        for sample in samples {
            curve.push(sample);
        }

        curve
    }
}

/// A fully-assembled binary system ready to evaluate.
///
/// Holds both components' elements and orientations plus their photometric
/// sources. Every evaluation is a pure function of the stored inputs and
/// the sample time, so a system can be shared freely across threads.
///
/// # Examples
///
/// ```rust
/// use binary_sim::{BinaryParameters, BinarySystem};
///
/// let parameters = BinaryParameters {
///     first_mass: 6.0,
///     second_mass: 0.8,
///     first_temperature: 6920.0,
///     second_temperature: 5500.0,
///     first_radius: 1.2,
///     second_radius: 0.8,
///     distance: 342.5,
///     sum_semi_major_axes: 5e10,
///     eccentricity: 0.3,
///     longitude_node: 40.0,
///     inclination: 40.0,
///     periastron_argument: 30.0,
///     periastron_passage: 0.0,
///     passband: "V".to_string(),
///     observation_periods: 1.0,
///     sample_count: 100,
///     zero_point: 16.0,
/// };
///
/// let system = BinarySystem::new(&parameters).unwrap();
/// let curve = system.run().unwrap();
/// assert_eq!(curve.len(), 100);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BinarySystem {
    first_elements: OrbitalElements,
    second_elements: OrbitalElements,
    first_orientation: Orientation,
    second_orientation: Orientation,
    first_source: BeamingSource,
    second_source: BeamingSource,
    observation_periods: f64,
    sample_count: usize,
    zero_point: f64,
}

impl BinarySystem {
    /// Builds both components and their photometric sources from observer
    /// parameters, converting to SI here at the boundary.
    pub fn new(parameters: &BinaryParameters) -> Result<Self, SimError> {
        let passband: Passband = parameters.passband.parse()?;

        let first_elements = OrbitalElements::new(
            parameters.first_mass,
            parameters.second_mass,
            parameters.sum_semi_major_axes,
            parameters.eccentricity,
            parameters.periastron_passage,
        )?;
        let second_elements = first_elements.companion();

        let first_orientation = Orientation::from_degrees(
            parameters.longitude_node,
            parameters.inclination,
            parameters.periastron_argument,
        );
        let second_orientation = first_orientation.companion();

        let distance = Length::from_parsecs(parameters.distance).to_m();
        let first_source = BeamingSource::new(
            distance,
            Length::from_solar_radii(parameters.first_radius).to_m(),
            parameters.first_temperature,
            passband,
        );
        let second_source = BeamingSource::new(
            distance,
            Length::from_solar_radii(parameters.second_radius).to_m(),
            parameters.second_temperature,
            passband,
        );

        Ok(Self {
            first_elements,
            second_elements,
            first_orientation,
            second_orientation,
            first_source,
            second_source,
            observation_periods: parameters.observation_periods,
            sample_count: parameters.sample_count,
            zero_point: parameters.zero_point,
        })
    }

    /// Orbital period of the pair in seconds.
    pub fn period(&self) -> f64 {
        self.first_elements.period()
    }

    /// Evenly spaced sample times covering `observation_periods` orbital
    /// periods, starting at t = 0 and excluding the endpoint.
    pub fn time_grid(&self) -> Vec<f64> {
        let span = self.observation_periods * self.period();
        let count = self.sample_count;

        (0..count).map(|i| span * i as f64 / count as f64).collect()
    }

    /// Evaluates the full pipeline at one time: both orbits, both sky
    /// projections, both Doppler coefficients, combined brightness.
    pub fn sample(&self, time: f64) -> Result<BrightnessSample, SimError> {
        let first_state = OrbitalState::at(&self.first_elements, time)?;
        let second_state = OrbitalState::at(&self.second_elements, time)?;

        let first_sky =
            ProjectedState::project(&first_state, &self.first_elements, &self.first_orientation);
        let second_sky = ProjectedState::project(
            &second_state,
            &self.second_elements,
            &self.second_orientation,
        );

        let magnitude = binary_brightness(
            &self.first_source,
            &self.second_source,
            first_sky.radial_velocity,
            second_sky.radial_velocity,
            self.zero_point,
        )?;

        Ok(BrightnessSample {
            time,
            first_position: first_sky.position,
            second_position: second_sky.position,
            first_radial_velocity: first_sky.radial_velocity,
            second_radial_velocity: second_sky.radial_velocity,
            magnitude,
        })
    }

    /// Runs the pipeline over an arbitrary time grid.
    ///
    /// Samples are independent pure evaluations, so they are mapped in
    /// parallel; the collected curve keeps the caller's time order.
    pub fn simulate(&self, times: &[f64]) -> Result<LightCurve, SimError> {
        let samples: Vec<BrightnessSample> = times
            .par_iter()
            .map(|&time| self.sample(time))
            .collect::<Result<_, _>>()?;

        Ok(LightCurve::from_samples(&samples))
    }

    /// Runs the pipeline over the system's own [`BinarySystem::time_grid`].
    pub fn run(&self) -> Result<LightCurve, SimError> {
        self.simulate(&self.time_grid())
    }
}
