//! Orbit helpers for phasing a satellite deployment.
//!
//! A carrier in the deployment orbit passes the shared apoapsis once per
//! deployment period. Choosing that period as a fraction of the target period
//! spaces successive releases evenly around the target orbit.

pub mod deploy;
pub mod kepler;

pub use deploy::{
    DeployOrbit, DeployRequest, DeploySettings, DeploymentPolicy, InvalidInput,
    compute_deploy_orbit, deployment_period,
};
pub use kepler::{orbital_period, periapsis_from_period, semi_major_axis};
