//! Two-body orbital mechanics for binary-star systems.
//!
//! [`OrbitalElements`] describes an orbit, [`OrbitalState::at`] solves
//! Kepler's equation to produce the in-plane kinematics at a given time,
//! and [`ProjectedState::project`] maps that state onto the plane of the
//! sky for a given [`Orientation`], including the spectroscopic radial
//! velocity. Every evaluation is a pure function of its inputs; callers
//! hold snapshots, nothing mutates in place.

pub mod elements;
pub mod error;
pub mod kepler;
pub mod orientation;
pub mod projection;

#[cfg(test)]
mod elements_test;
#[cfg(test)]
mod projection_test;

pub use elements::OrbitalElements;
pub use error::OrbitError;
pub use kepler::{solve_kepler, OrbitalState};
pub use orientation::Orientation;
pub use projection::ProjectedState;
