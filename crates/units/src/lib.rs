//! Physical constants and unit quantities for binary-star calculations.
//!
//! All quantities store their value in SI base units (kilograms, meters,
//! seconds, meters per second) and convert to astronomical units at the
//! boundaries. The physics crates work in SI throughout and only touch
//! the converters when talking to callers.

pub mod constants;
pub mod length;
pub mod mass;
pub mod time;
pub mod velocity;

#[cfg(test)]
mod mass_test;
#[cfg(test)]
mod time_test;
#[cfg(test)]
mod velocity_test;

pub use length::Length;
pub use mass::Mass;
pub use time::Time;
pub use velocity::Velocity;
