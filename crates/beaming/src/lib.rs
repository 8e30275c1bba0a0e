//! Relativistic Doppler-beaming photometry for binary stars.
//!
//! A star moving along the line of sight is slightly brightened or dimmed
//! by Doppler beaming. The modulation strength depends on the logarithmic
//! slope of the star's spectrum at the observed frequency (the spectral
//! index α), so the model combines blackbody spectral theory with the
//! orbital radial velocity supplied by the `orbit` crate.

pub mod error;
pub mod passband;
pub mod source;

#[cfg(test)]
mod passband_test;

pub use error::BeamingError;
pub use passband::Passband;
pub use source::{binary_brightness, spectral_index, BeamingSource, FLUX_TEMPERATURE_FLOOR};
