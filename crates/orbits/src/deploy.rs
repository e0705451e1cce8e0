//! Deployment orbit calculator.

use deploy_core::constants::{DEFAULT_BODY_RADIUS, DEFAULT_SATELLITE_COUNT, MIN_SATELLITE_COUNT};
use deploy_core::frame::{to_center_relative, to_surface_relative};
use thiserror::Error;
use tracing::{debug, warn};

use crate::kepler::{orbital_period, periapsis_from_period, semi_major_axis};

/// How the deployment period is derived from the target period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeploymentPolicy {
    /// Period factor `1 - 1/n`. Satellites end up in the reverse of release
    /// order and the carrier pays for raising their periapsis.
    #[default]
    ReverseOrder,
    /// Period factor `1/n`. Release order is kept, but each satellite must
    /// raise its own periapsis, which may lie below the surface.
    PreserveOrder,
}

impl DeploymentPolicy {
    /// Fraction of the target period spent per deployment revolution.
    pub fn factor(self, satellite_count: u32) -> f64 {
        let n = f64::from(satellite_count);
        match self {
            DeploymentPolicy::ReverseOrder => 1.0 - 1.0 / n,
            DeploymentPolicy::PreserveOrder => 1.0 / n,
        }
    }

    pub fn from_preserve_order(preserve_order: bool) -> Self {
        if preserve_order {
            DeploymentPolicy::PreserveOrder
        } else {
            DeploymentPolicy::ReverseOrder
        }
    }
}

/// Deployment period for `satellite_count` evenly spaced releases.
pub fn deployment_period(target_period: f64, satellite_count: u32, policy: DeploymentPolicy) -> f64 {
    target_period * policy.factor(satellite_count)
}

/// Tunables that have sensible defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeploySettings {
    /// Added to surface-relative apsides; zero when they are center-relative.
    pub body_radius: f64,
    pub satellite_count: u32,
    pub policy: DeploymentPolicy,
}

impl Default for DeploySettings {
    fn default() -> Self {
        Self {
            body_radius: DEFAULT_BODY_RADIUS,
            satellite_count: DEFAULT_SATELLITE_COUNT,
            policy: DeploymentPolicy::default(),
        }
    }
}

/// Target orbit description handed to [`compute_deploy_orbit`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeployRequest {
    pub apoapsis: f64,
    pub periapsis: f64,
    pub gm: f64,
    pub settings: DeploySettings,
}

impl DeployRequest {
    pub fn new(apoapsis: f64, periapsis: f64, gm: f64) -> Self {
        Self {
            apoapsis,
            periapsis,
            gm,
            settings: DeploySettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: DeploySettings) -> Self {
        self.settings = settings;
        self
    }

    /// Check every precondition of the calculator.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        let radius = self.settings.body_radius;
        for (name, value) in [
            ("apoapsis", self.apoapsis),
            ("periapsis", self.periapsis),
            ("GM", self.gm),
            ("radius", radius),
        ] {
            if !value.is_finite() {
                return Err(InvalidInput::NotFinite { name, value });
            }
        }
        if self.apoapsis < self.periapsis {
            return Err(InvalidInput::ApoapsisBelowPeriapsis {
                apoapsis: self.apoapsis,
                periapsis: self.periapsis,
            });
        }
        if self.apoapsis <= 0.0 || self.periapsis <= 0.0 {
            return Err(InvalidInput::NonPositiveApsis {
                apoapsis: self.apoapsis,
                periapsis: self.periapsis,
            });
        }
        if self.gm <= 0.0 {
            return Err(InvalidInput::NonPositiveGm(self.gm));
        }
        // zero radius means "not supplied"
        if radius != DEFAULT_BODY_RADIUS && radius <= 0.0 {
            return Err(InvalidInput::NonPositiveRadius(radius));
        }
        if self.settings.satellite_count < MIN_SATELLITE_COUNT {
            return Err(InvalidInput::TooFewSatellites(self.settings.satellite_count));
        }
        Ok(())
    }
}

/// Rejected calculator input. Raised before any output is produced.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidInput {
    #[error("{name} must be a finite number (got {value})")]
    NotFinite { name: &'static str, value: f64 },
    #[error("apoapsis cannot be lower than periapsis (Ap = {apoapsis}, Pe = {periapsis})")]
    ApoapsisBelowPeriapsis { apoapsis: f64, periapsis: f64 },
    #[error("apoapsis and periapsis must be greater than 0 (Ap = {apoapsis}, Pe = {periapsis})")]
    NonPositiveApsis { apoapsis: f64, periapsis: f64 },
    #[error("GM must be greater than 0 (got {0})")]
    NonPositiveGm(f64),
    #[error("radius must be greater than 0 (got {0})")]
    NonPositiveRadius(f64),
    #[error("at least 2 satellites are required (got {0})")]
    TooFewSatellites(u32),
    #[error("{name} overflows for these inputs (got {value})")]
    NonFiniteResult { name: &'static str, value: f64 },
}

/// Deployment orbit and the target orbit it phases into, surface-relative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeployOrbit {
    pub apoapsis: f64,
    pub periapsis: f64,
    pub period: f64,
    pub target_apoapsis: f64,
    pub target_periapsis: f64,
    pub target_period: f64,
}

impl DeployOrbit {
    /// Deployment period divided by target period.
    pub fn period_fraction(&self) -> f64 {
        self.period / self.target_period
    }

    /// True when the deployment periapsis is negative in the caller's frame:
    /// under the surface when a radius was given, otherwise past the center.
    pub fn periapsis_below_surface(&self) -> bool {
        self.periapsis < 0.0
    }
}

/// Warning for an impractical deployment periapsis, if any.
fn periapsis_warning(periapsis: f64, body_radius: f64) -> Option<&'static str> {
    if periapsis >= 0.0 {
        None
    } else if body_radius == DEFAULT_BODY_RADIUS {
        Some("deployment periapsis is negative")
    } else {
        Some("deployment periapsis lies below the body's surface")
    }
}

fn ensure_finite(name: &'static str, value: f64) -> Result<f64, InvalidInput> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InvalidInput::NonFiniteResult { name, value })
    }
}

/// Compute the deployment orbit for `request`, validating it first.
pub fn compute_deploy_orbit(request: &DeployRequest) -> Result<DeployOrbit, InvalidInput> {
    request.validate()?;

    let DeploySettings {
        body_radius,
        satellite_count,
        policy,
    } = request.settings;

    let apoapsis = to_center_relative(request.apoapsis, body_radius);
    let periapsis = to_center_relative(request.periapsis, body_radius);

    let target_a = semi_major_axis(apoapsis, periapsis);
    let target_period = ensure_finite("target period", orbital_period(target_a, request.gm))?;
    let period = deployment_period(target_period, satellite_count, policy);
    let deploy_periapsis = to_surface_relative(
        periapsis_from_period(apoapsis, request.gm, period),
        body_radius,
    );
    let deploy_periapsis = ensure_finite("deployment periapsis", deploy_periapsis)?;

    debug!(
        target_a,
        target_period,
        deploy_period = period,
        ?policy,
        satellite_count,
        "derived deployment orbit"
    );

    // The target apsides are echoed back so a circular orbit stays exact.
    let orbit = DeployOrbit {
        apoapsis: request.apoapsis,
        periapsis: deploy_periapsis,
        period,
        target_apoapsis: request.apoapsis,
        target_periapsis: request.periapsis,
        target_period,
    };

    if let Some(message) = periapsis_warning(orbit.periapsis, body_radius) {
        warn!(periapsis = orbit.periapsis, ?policy, "{message}");
    }

    Ok(orbit)
}
