//! Mathematical and physical constants, SI units.

pub const PI: f64 = std::f64::consts::PI;

/// Euler's number.
pub const E: f64 = std::f64::consts::E;

/// Speed of light in vacuum, m/s.
pub const SPEED_OF_LIGHT: f64 = 299792458.0;

/// Planck constant, J·s.
pub const PLANCK_CONSTANT: f64 = 6.62607015e-34;

/// Boltzmann constant, J/K.
pub const BOLTZMANN_CONSTANT: f64 = 1.380649e-23;

/// Standard acceleration of gravity, m/s².
pub const STANDARD_GRAVITY: f64 = 9.80665;

pub const C: f64 = SPEED_OF_LIGHT;
pub const H: f64 = PLANCK_CONSTANT;
pub const K: f64 = BOLTZMANN_CONSTANT;
pub const G: f64 = STANDARD_GRAVITY;
