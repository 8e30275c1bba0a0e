//! Binary-star light-curve simulation.
//!
//! Drives two complementary orbits (the companion swaps the masses and
//! turns the argument of periastron by half a turn) and two photometric
//! sources across a time grid, producing synchronized tracks of sky
//! position, radial velocity and Doppler-beamed system brightness.
//! Plotting and configuration parsing live downstream and upstream of
//! this crate; it only turns parameters into numbers.

pub mod parameters;
pub mod simulator;


pub use parameters::BinaryParameters;
pub use simulator::{BinarySystem, BrightnessSample, LightCurve, SimError};
