//! Core constants, math, and shared primitives for the deployment orbit calculator workspace.

/// Defaults and reference values. Distances are in whatever unit the caller uses
/// consistently with GM (metres and m³/s² for the Earth values below).
pub mod constants {
    /// Satellites released when no count is supplied.
    pub const DEFAULT_SATELLITE_COUNT: u32 = 3;
    /// Fewest satellites a deployment orbit makes sense for.
    pub const MIN_SATELLITE_COUNT: u32 = 2;
    /// Zero means apoapsis/periapsis are already measured from the body center.
    pub const DEFAULT_BODY_RADIUS: f64 = 0.0;
    /// Earth's standard gravitational parameter (m³/s²).
    pub const EARTH_MU_M3_S2: f64 = 3.986e14;
    /// Earth's mean radius (m).
    pub const EARTH_RADIUS_M: f64 = 6_371_000.0;
}

/// Scalar helpers.
pub mod math {
    /// Real cube root via exponentiation. Callers only pass non-negative values.
    #[inline]
    pub fn cube_root(x: f64) -> f64 {
        x.powf(1.0 / 3.0)
    }
}

/// Conversions between surface-relative and center-relative distances.
pub mod frame {
    /// Surface-relative altitude to distance from the body center.
    #[inline]
    pub fn to_center_relative(altitude: f64, body_radius: f64) -> f64 {
        altitude + body_radius
    }

    /// Distance from the body center back to a surface-relative altitude.
    #[inline]
    pub fn to_surface_relative(distance: f64, body_radius: f64) -> f64 {
        distance - body_radius
    }
}
