//! Projection of the in-plane orbit onto the plane of the sky.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::elements::OrbitalElements;
use crate::kepler::OrbitalState;
use crate::orientation::Orientation;

/// Sky-plane view of an [`OrbitalState`]: projected position plus the
/// line-of-sight velocity. Derived purely from the state and the
/// orientation; it carries no state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedState {
    /// Projected position on the sky (m, West/North frame)
    pub position: Point2<f64>,
    /// Radial velocity along the line of sight (m/s)
    pub radial_velocity: f64,
}

impl ProjectedState {
    /// Projects an in-plane state onto the sky.
    ///
    /// The position is rotated by the argument of periastron, foreshortened
    /// along y by `cos i` (the tilt of the orbital plane), then rotated by
    /// the node longitude. The radial velocity follows the spectroscopic
    /// orbit formula `v_r = K·(cos(ω + ν) + e·cos ω)` with semi-amplitude
    /// `K = 2πa·sin i / (T·√(1 − e²))`.
    pub fn project(
        state: &OrbitalState,
        elements: &OrbitalElements,
        orientation: &Orientation,
    ) -> Self {
        let (x, y) = (state.position.x, state.position.y);
        let (x_rot, y_rot) = rotate_frame(x, y, orientation.periastron_argument());
        let (x_sky, y_sky) = rotate_frame(
            x_rot,
            y_rot * orientation.inclination().cos(),
            orientation.longitude_node(),
        );

        Self {
            position: Point2::new(x_sky, y_sky),
            radial_velocity: radial_velocity(state, elements, orientation),
        }
    }
}

/// Rotates the coordinate frame by `angle` (the vector itself turns the
/// other way), matching the node/periastron sign convention.
fn rotate_frame(x: f64, y: f64, angle: f64) -> (f64, f64) {
    let x_rotated = x * (-angle).cos() + y * (-angle).sin();
    let y_rotated = -x * (-angle).sin() + y * (-angle).cos();

    (x_rotated, y_rotated)
}

fn radial_velocity(
    state: &OrbitalState,
    elements: &OrbitalElements,
    orientation: &Orientation,
) -> f64 {
    let eccentricity = elements.eccentricity();
    let semi_amplitude = TAU * elements.semi_major_axis() * orientation.inclination().sin()
        / (elements.period() * (1.0 - eccentricity.powi(2)).sqrt());

    semi_amplitude
        * ((orientation.periastron_argument() + state.true_anomaly).cos()
            + eccentricity * orientation.periastron_argument().cos())
}
