use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use units::constants::LIGHT_SPEED;

use crate::error::BeamingError;

/// Photometric passband of the observation.
///
/// Each band is represented by its effective wavelength; the beaming model
/// only needs the corresponding frequency.
///
/// # Examples
///
/// ```rust
/// use beaming::Passband;
///
/// let band: Passband = "V".parse().unwrap();
/// assert_eq!(band, Passband::V);
/// assert!("X".parse::<Passband>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Passband {
    U,
    B,
    V,
    I,
}

impl Passband {
    /// Effective wavelength of the band in meters.
    pub fn wavelength(&self) -> f64 {
        match self {
            Passband::U => 3.6e-7,
            Passband::B => 4.4e-7,
            Passband::V => 5.5e-7,
            Passband::I => 9.0e-7,
        }
    }

    /// Observed frequency of the band in Hz.
    pub fn frequency(&self) -> f64 {
        LIGHT_SPEED / self.wavelength()
    }
}

impl FromStr for Passband {
    type Err = BeamingError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "U" => Ok(Passband::U),
            "B" => Ok(Passband::B),
            "V" => Ok(Passband::V),
            "I" => Ok(Passband::I),
            other => Err(BeamingError::InvalidPassband(other.to_string())),
        }
    }
}

impl fmt::Display for Passband {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Passband::U => "U",
            Passband::B => "B",
            Passband::V => "V",
            Passband::I => "I",
        };
        write!(f, "{}", code)
    }
}
