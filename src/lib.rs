//! Satellite deployment orbit calculator.
//!
//! Given a target orbit and the orbited body's GM, computes a deployment orbit
//! sharing the target's apoapsis whose period is a fixed fraction of the target
//! period, so satellites released at each apoapsis pass end up evenly spaced.
//! The workspace crates are re-exported here so front-ends depend on one crate.

pub use deploy_config as config;
pub use deploy_core as common;
pub use deploy_export as export;
pub use deploy_orbits as orbits;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
