//! Kepler's-equation solver and the instantaneous in-plane orbit state.

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

use units::constants::G;

use crate::elements::OrbitalElements;
use crate::error::OrbitError;

/// Residual tolerance for the Kepler-equation root finder.
pub const KEPLER_TOLERANCE: f64 = 1e-10;

/// Iteration cap for the Kepler-equation root finder.
pub const KEPLER_MAX_ITERATIONS: u32 = 100;

/// Solves Kepler's equation `M = E − e·sin E` for the eccentric anomaly.
///
/// Newton–Raphson seeded at `E = 0`; if Newton stalls (it can cycle for
/// eccentricities close to 1), the solver falls back to bisection on the
/// bracket `|E − M| ≤ e`, where the residual changes sign. Both passes
/// share the residual tolerance and iteration cap, so malformed input
/// cannot loop forever.
///
/// # Examples
///
/// ```rust
/// use orbit::solve_kepler;
///
/// let ecc_anomaly = solve_kepler(0.0077282498691574, 0.57).unwrap();
/// assert!((ecc_anomaly - 0.0179713918036).abs() < 1e-9);
/// ```
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> Result<f64, OrbitError> {
    let residual = |ecc_anomaly: f64| {
        ecc_anomaly - eccentricity * ecc_anomaly.sin() - mean_anomaly
    };

    let mut ecc_anomaly = 0.0_f64;
    for _ in 0..KEPLER_MAX_ITERATIONS {
        let current = residual(ecc_anomaly);
        if current.abs() < KEPLER_TOLERANCE {
            return Ok(ecc_anomaly);
        }
        ecc_anomaly -= current / (1.0 - eccentricity * ecc_anomaly.cos());
    }

    // Bisection fallback. For 0 <= e < 1 the residual is increasing in E
    // and changes sign inside [M - e, M + e].
    let mut low = mean_anomaly - eccentricity;
    let mut high = mean_anomaly + eccentricity;
    for _ in 0..KEPLER_MAX_ITERATIONS {
        let midpoint = 0.5 * (low + high);
        let current = residual(midpoint);
        if current.abs() < KEPLER_TOLERANCE {
            return Ok(midpoint);
        }
        if current > 0.0 {
            high = midpoint;
        } else {
            low = midpoint;
        }
    }

    Err(OrbitError::NonConvergence {
        mean_anomaly,
        eccentricity,
    })
}

/// Instantaneous kinematic snapshot of one component, in the orbital plane.
///
/// Produced by [`OrbitalState::at`]; the x axis points toward periastron
/// and all values are SI (meters, m/s, radians).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalState {
    /// Evaluation time (s)
    pub time: f64,
    /// Mean anomaly (rad). Grows without bound for large `time`; see
    /// the note on [`OrbitalState::at`].
    pub mean_anomaly: f64,
    /// Eccentric anomaly (rad)
    pub eccentric_anomaly: f64,
    /// True anomaly, normalized to [0, 2π)
    pub true_anomaly: f64,
    /// Distance from the barycenter (m)
    pub distance: f64,
    /// In-plane position (m)
    pub position: Point2<f64>,
    /// In-plane velocity (m/s)
    pub velocity: Vector2<f64>,
}

impl OrbitalState {
    /// Computes the full in-plane state at time `time` (seconds).
    ///
    /// Pure and idempotent: identical inputs produce bitwise-identical
    /// snapshots. The mean anomaly is *not* wrapped modulo 2π; it grows
    /// linearly with time, matching long-standing observable behavior.
    /// The periodic anomalies downstream are unaffected.
    pub fn at(elements: &OrbitalElements, time: f64) -> Result<Self, OrbitError> {
        let eccentricity = elements.eccentricity();
        let semi_major_axis = elements.semi_major_axis();

        let mean_anomaly = TAU * (time - elements.periastron_passage()) / elements.period();
        let eccentric_anomaly = solve_kepler(mean_anomaly, eccentricity)?;
        let true_anomaly = true_anomaly_from_eccentric(eccentric_anomaly, eccentricity);

        let semilatus_rectum = semi_major_axis * (1.0 - eccentricity.powi(2));
        let distance = semilatus_rectum / (1.0 + eccentricity * true_anomaly.cos());

        let position = Point2::new(
            distance * true_anomaly.cos(),
            distance * true_anomaly.sin(),
        );

        let speed = vis_viva_speed(elements, distance);
        let angle = velocity_angle(semi_major_axis, eccentricity, distance, true_anomaly);
        let velocity = Vector2::new(speed * angle.cos(), speed * angle.sin());

        Ok(Self {
            time,
            mean_anomaly,
            eccentric_anomaly,
            true_anomaly,
            distance,
            position,
            velocity,
        })
    }
}

/// True anomaly from the eccentric anomaly via the half-angle form,
/// which keeps the quadrant right for all `E` without branch tables.
fn true_anomaly_from_eccentric(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    let half = 0.5 * eccentric_anomaly;
    let true_anomaly = 2.0 * f64::atan2(
        (1.0 + eccentricity).sqrt() * half.sin(),
        (1.0 - eccentricity).sqrt() * half.cos(),
    );

    if true_anomaly < 0.0 {
        true_anomaly + TAU
    } else {
        true_anomaly
    }
}

/// Orbital speed from the vis-viva equation, `v² = GM(2/r − 1/a)`.
fn vis_viva_speed(elements: &OrbitalElements, distance: f64) -> f64 {
    let speed_squared = (2.0 / distance - 1.0 / elements.semi_major_axis())
        * G
        * elements.total_mass_kg();

    speed_squared.sqrt()
}

/// Direction of the velocity vector in the orbital plane.
///
/// The flight-path construction yields `sin²(angle)` from the ellipse
/// geometry; round-off can push the value past 1, so it is clamped
/// before `asin`. The branch selects the outbound or inbound half of
/// the orbit by where the true anomaly sits in its period.
fn velocity_angle(
    semi_major_axis: f64,
    eccentricity: f64,
    distance: f64,
    true_anomaly: f64,
) -> f64 {
    let focal_offset = eccentricity * semi_major_axis;
    let sin_angle = ((semi_major_axis.powi(2) - focal_offset.powi(2))
        / (distance * (2.0 * semi_major_axis - distance)))
        .sqrt()
        .clamp(-1.0, 1.0);

    if true_anomaly.rem_euclid(TAU) <= PI {
        sin_angle.asin() + true_anomaly
    } else {
        PI - sin_angle.asin() + true_anomaly
    }
}
