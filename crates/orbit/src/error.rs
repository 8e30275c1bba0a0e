//! Error types for orbital calculations

use thiserror::Error;

/// Errors that can occur while constructing or evaluating an orbit
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrbitError {
    /// Orbital elements outside their physical domain.
    #[error("invalid orbital elements: {0}")]
    InvalidElements(String),

    /// The Kepler-equation root finder hit its iteration cap.
    #[error("Kepler solver did not converge (M = {mean_anomaly}, e = {eccentricity})")]
    NonConvergence { mean_anomaly: f64, eccentricity: f64 },
}
