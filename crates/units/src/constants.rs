//! Physical constants, all expressed in SI units.

/// Gravitational constant (m³ kg⁻¹ s⁻²)
pub const G: f64 = 6.67408e-11;

/// Speed of light in vacuum (m/s)
pub const LIGHT_SPEED: f64 = 2.99792458e8;

/// Planck constant (J s)
pub const PLANCK_CONSTANT: f64 = 6.62606979e-34;

/// Boltzmann constant (J/K)
pub const BOLTZMANN_CONSTANT: f64 = 1.38064852e-23;

/// Stefan–Boltzmann constant (W m⁻² K⁻⁴)
pub const STEFAN_BOLTZMANN_CONSTANT: f64 = 5.670367e-8;

/// Mass of the Sun (kg)
pub const SUN_MASS_KG: f64 = 1.9884e30;

/// Radius of the Sun (m)
pub const SUN_RADIUS_M: f64 = 6.957e8;

/// Astronomical unit (m)
pub const AU_M: f64 = 1.49597e11;

/// Parsec (m)
pub const PARSEC_M: f64 = 3.086e16;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Seconds per hour
pub const SECONDS_PER_HOUR: f64 = SECONDS_PER_MINUTE * SECONDS_PER_MINUTE;
