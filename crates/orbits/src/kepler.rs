//! Closed-form two-body relations between apsides, semi-major axis, and period.

use std::f64::consts::TAU;

use deploy_core::math::cube_root;

/// Semi-major axis of an ellipse with the given center-relative apsides.
pub fn semi_major_axis(apoapsis: f64, periapsis: f64) -> f64 {
    (apoapsis + periapsis) / 2.0
}

/// Orbital period from Kepler's third law.
///
/// Non-finite when `semi_major_axis` or `mu` is not positive; validate upstream.
pub fn orbital_period(semi_major_axis: f64, mu: f64) -> f64 {
    (semi_major_axis.powi(3) / mu).sqrt() * TAU
}

/// Periapsis of the orbit with period `period` that keeps `apoapsis` fixed.
///
/// Inverts [`orbital_period`] for the semi-major axis and solves
/// `a = (ap + pe) / 2` for periapsis. Short periods can yield a periapsis below
/// the body's surface or even a negative value; the result is not clamped.
pub fn periapsis_from_period(apoapsis: f64, mu: f64, period: f64) -> f64 {
    let semi_major_axis = cube_root(mu * (period / TAU).powi(2));
    2.0 * semi_major_axis - apoapsis
}
