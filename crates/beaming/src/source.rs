//! Per-star photometry and the combined binary brightness.

use serde::{Deserialize, Serialize};

use units::constants::{
    BOLTZMANN_CONSTANT, LIGHT_SPEED, PLANCK_CONSTANT, STEFAN_BOLTZMANN_CONSTANT,
};

use crate::error::BeamingError;
use crate::passband::Passband;

/// Below this effective temperature a component's beaming contribution is
/// treated as zero. The star is not physically dark; its modulated flux is
/// negligible next to a hotter companion, and the model drops it outright.
pub const FLUX_TEMPERATURE_FLOOR: f64 = 5000.0;

/// Spectral index α of a blackbody at `temperature` observed at `frequency`:
/// `α = 3 − x·eˣ/(eˣ − 1)` with `x = hν/(kT)`.
///
/// α is the logarithmic slope of the spectrum and sets how strongly Doppler
/// motion modulates the observed flux.
pub fn spectral_index(temperature: f64, frequency: f64) -> f64 {
    let x = PLANCK_CONSTANT * frequency / (BOLTZMANN_CONSTANT * temperature);
    let exp_x = x.exp();

    3.0 - x * exp_x / (exp_x - 1.0)
}

/// Photometric description of one component of the binary.
///
/// The stationary flux and spectral index are fixed by the stellar
/// parameters and the passband, so both are computed once at construction;
/// only the Doppler coefficient varies along the orbit.
///
/// # Examples
///
/// ```rust
/// use beaming::{BeamingSource, Passband};
/// use units::Length;
///
/// let source = BeamingSource::new(
///     Length::from_parsecs(763.3).to_m(),
///     Length::from_solar_radii(1.2).to_m(),
///     6750.0,
///     Passband::B,
/// );
/// assert!(source.flux() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamingSource {
    /// Distance to the system (m)
    distance: f64,
    /// Stellar radius (m)
    radius: f64,
    /// Effective temperature (K)
    temperature: f64,
    /// Observed frequency from the passband (Hz)
    frequency: f64,
    /// Stationary bolometric-scaled flux, zero below the temperature floor
    flux: f64,
    /// Spectral index at the observed frequency
    alpha: f64,
}

impl BeamingSource {
    /// Builds a source from SI stellar parameters and a passband.
    pub fn new(distance: f64, radius: f64, temperature: f64, passband: Passband) -> Self {
        let frequency = passband.frequency();
        let alpha = spectral_index(temperature, frequency);
        let flux = if temperature > FLUX_TEMPERATURE_FLOOR {
            STEFAN_BOLTZMANN_CONSTANT * (radius / distance).powi(2) * temperature.powi(4)
        } else {
            0.0
        };

        Self {
            distance,
            radius,
            temperature,
            frequency,
            flux,
            alpha,
        }
    }

    /// Stationary flux of the star (W/m²), zero at or below the floor.
    pub fn flux(&self) -> f64 {
        self.flux
    }

    /// Spectral index α at the observed frequency.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Effective temperature in Kelvin.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Observed frequency in Hz.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Multiplicative Doppler flux factor for the given radial velocity
    /// (m/s): `1 + (3 − α)·v_r/c`.
    pub fn doppler_coefficient(&self, radial_velocity: f64) -> f64 {
        1.0 + (3.0 - self.alpha) * radial_velocity / LIGHT_SPEED
    }
}

/// Combined apparent magnitude of the binary at one orbital phase.
///
/// Sums each star's beamed flux, compares against the stationary total and
/// reports the ratio in magnitudes offset from the caller's `zero_point`
/// baseline. Fails with [`BeamingError::DegenerateSystem`] when both stars
/// sit below the temperature floor, rather than taking `log10` of zero.
pub fn binary_brightness(
    first: &BeamingSource,
    second: &BeamingSource,
    first_radial_velocity: f64,
    second_radial_velocity: f64,
    zero_point: f64,
) -> Result<f64, BeamingError> {
    let stationary = first.flux() + second.flux();
    if stationary <= 0.0 {
        return Err(BeamingError::DegenerateSystem);
    }

    let beamed = first.doppler_coefficient(first_radial_velocity) * first.flux()
        + second.doppler_coefficient(second_radial_velocity) * second.flux();

    Ok(zero_point + 2.5 * (beamed / stationary).log10())
}
