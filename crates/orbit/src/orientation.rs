use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

/// 3D placement of an orbit on the plane of the sky.
///
/// Built from the observer's angles in degrees. The stored node longitude
/// carries a quarter-turn offset that moves the reference direction from
/// the +x axis to west, so projected tracks land in the usual West/North
/// sky frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    /// Longitude of the ascending node (rad, sky frame)
    longitude_node: f64,
    /// Orbital inclination (rad)
    inclination: f64,
    /// Argument of periastron (rad)
    periastron_argument: f64,
    /// Longitude of periapsis (rad)
    longitude_periapsis: f64,
}

impl Orientation {
    /// Builds an orientation from angles in degrees.
    ///
    /// For inclination below 90° the object moves in the direction of
    /// increasing position angle and the longitude of periapsis is
    /// `Ω + ω`; at or above 90° the motion is retrograde on the sky and
    /// the periapsis longitude becomes `Ω − ω`. The 90° boundary is a
    /// hard branch, not a continuous blend.
    pub fn from_degrees(longitude_node: f64, inclination: f64, periastron_argument: f64) -> Self {
        // XY to West/North sky frame
        let longitude_node = (longitude_node + 90.0).to_radians();
        let inclination = inclination.to_radians();
        let periastron_argument = periastron_argument.to_radians();

        Self::from_radians(longitude_node, inclination, periastron_argument)
    }

    fn from_radians(longitude_node: f64, inclination: f64, periastron_argument: f64) -> Self {
        let longitude_periapsis = if inclination < FRAC_PI_2 {
            longitude_node + periastron_argument
        } else {
            longitude_node - periastron_argument
        };

        Self {
            longitude_node,
            inclination,
            periastron_argument,
            longitude_periapsis,
        }
    }

    /// Orientation of the companion star's orbit: same node and
    /// inclination, argument of periastron rotated by half a turn.
    pub fn companion(&self) -> Self {
        Self::from_radians(
            self.longitude_node,
            self.inclination,
            self.periastron_argument + PI,
        )
    }

    /// Longitude of the ascending node in radians, sky frame.
    pub fn longitude_node(&self) -> f64 {
        self.longitude_node
    }

    /// Orbital inclination in radians.
    pub fn inclination(&self) -> f64 {
        self.inclination
    }

    /// Argument of periastron in radians.
    pub fn periastron_argument(&self) -> f64 {
        self.periastron_argument
    }

    /// Longitude of periapsis in radians.
    pub fn longitude_periapsis(&self) -> f64 {
        self.longitude_periapsis
    }
}
