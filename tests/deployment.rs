use std::f64::consts::TAU;

use deploy_orbit_calculator::common::constants::{EARTH_MU_M3_S2, EARTH_RADIUS_M};
use deploy_orbit_calculator::config::load_defaults;
use deploy_orbit_calculator::export::{DeployReport, to_json_string};
use deploy_orbit_calculator::orbits::{
    DeployRequest, DeploySettings, DeploymentPolicy, InvalidInput, compute_deploy_orbit,
    deployment_period, orbital_period, periapsis_from_period, semi_major_axis,
};

fn earth_settings(satellite_count: u32, policy: DeploymentPolicy) -> DeploySettings {
    DeploySettings {
        body_radius: EARTH_RADIUS_M,
        satellite_count,
        policy,
    }
}

#[test]
fn circular_leo_end_to_end() {
    let request = DeployRequest::new(200_000.0, 200_000.0, EARTH_MU_M3_S2)
        .with_settings(earth_settings(3, DeploymentPolicy::ReverseOrder));
    let orbit = compute_deploy_orbit(&request).expect("valid LEO request");

    let a: f64 = (200_000.0 + 6_371_000.0 + 200_000.0 + 6_371_000.0) / 2.0;
    let expected_period = TAU * (a.powi(3) / 3.986e14).sqrt();
    assert!(
        (orbit.target_period - expected_period).abs() < 1e-9,
        "target period = {}",
        orbit.target_period
    );
    assert!(orbit.period < orbit.target_period);
    assert_eq!(orbit.target_apoapsis, 200_000.0);
    assert_eq!(orbit.target_periapsis, 200_000.0);
    assert_eq!(orbit.apoapsis, orbit.target_apoapsis);
}

#[test]
fn circular_orbit_survives_radius_round_trip() {
    for (altitude, radius) in [(0.1, 0.7), (35_786_000.3, 6_378_137.1), (1.0e-3, 1.0e9)] {
        let request = DeployRequest::new(altitude, altitude, EARTH_MU_M3_S2).with_settings(
            DeploySettings {
                body_radius: radius,
                ..DeploySettings::default()
            },
        );
        let orbit = compute_deploy_orbit(&request).expect("valid request");
        assert_eq!(orbit.target_apoapsis, altitude);
        assert_eq!(orbit.target_periapsis, altitude);
    }
}

#[test]
fn deployment_orbit_repeats_after_target_orbits() {
    // After n deployment revolutions the carrier has lagged one full target period.
    let request = DeployRequest::new(36_000_000.0, 35_500_000.0, EARTH_MU_M3_S2)
        .with_settings(earth_settings(4, DeploymentPolicy::ReverseOrder));
    let orbit = compute_deploy_orbit(&request).expect("valid request");
    let lag = 4.0 * (orbit.target_period - orbit.period);
    assert!((lag - orbit.target_period).abs() < 1e-6);
    assert!(!orbit.periapsis_below_surface());
    assert!(orbit.periapsis < orbit.target_periapsis);
}

#[test]
fn deployment_period_recovers_through_periapsis() {
    let request = DeployRequest::new(36_000_000.0, 35_500_000.0, EARTH_MU_M3_S2)
        .with_settings(earth_settings(6, DeploymentPolicy::ReverseOrder));
    let orbit = compute_deploy_orbit(&request).expect("valid request");

    let ap = orbit.apoapsis + EARTH_RADIUS_M;
    let pe = orbit.periapsis + EARTH_RADIUS_M;
    let period = orbital_period(semi_major_axis(ap, pe), EARTH_MU_M3_S2);
    assert!((period - orbit.period).abs() / orbit.period < 1e-12);
}

#[test]
fn period_inversion_round_trip() {
    for (a, mu) in [(7.0e6, 3.986e14), (4.2e7, 3.986e14), (1.5e11, 1.327e20), (700.0, 3.5)] {
        let pe_original = 0.8 * a;
        let ap = 2.0 * a - pe_original;
        let period = orbital_period(a, mu);
        let pe = periapsis_from_period(ap, mu, period);
        assert!(
            ((pe + ap) / 2.0 - a).abs() / a < 1e-12,
            "a = {a}, recovered = {}",
            (pe + ap) / 2.0
        );
    }
}

#[test]
fn policy_factors_at_two_satellites_coincide() {
    let reverse = deployment_period(100.0, 2, DeploymentPolicy::ReverseOrder);
    let preserve = deployment_period(100.0, 2, DeploymentPolicy::PreserveOrder);
    assert_eq!(reverse, 50.0);
    assert_eq!(preserve, 50.0);
}

#[test]
fn invalid_inputs_are_rejected_before_computation() {
    let cases = [
        DeployRequest::new(5.0, 10.0, EARTH_MU_M3_S2),
        DeployRequest::new(0.0, 1.0, EARTH_MU_M3_S2),
        DeployRequest::new(10.0, 5.0, -1.0),
        DeployRequest::new(10.0, 5.0, EARTH_MU_M3_S2).with_settings(DeploySettings {
            satellite_count: 1,
            ..DeploySettings::default()
        }),
    ];
    for request in cases {
        let err = compute_deploy_orbit(&request).expect_err("should be rejected");
        assert!(!err.to_string().is_empty());
    }
    assert!(matches!(
        compute_deploy_orbit(&DeployRequest::new(0.0, 1.0, EARTH_MU_M3_S2)),
        Err(InvalidInput::ApoapsisBelowPeriapsis { .. })
    ));
}

#[test]
fn overflowing_inputs_produce_no_orbit() {
    for request in [
        DeployRequest::new(1e110, 1e110, EARTH_MU_M3_S2),
        DeployRequest::new(7_000_000.0, 6_800_000.0, 1e-300),
    ] {
        let err = compute_deploy_orbit(&request).expect_err("derived values overflow");
        assert!(matches!(err, InvalidInput::NonFiniteResult { .. }), "{err:?}");
    }
}

#[test]
fn defaults_file_feeds_settings() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("earth.toml");
    std::fs::write(&path, "body_radius = 6371000.0\nsatellite_count = 5\n").expect("write");
    let defaults = load_defaults(&path).expect("defaults");

    let settings = DeploySettings {
        body_radius: defaults.body_radius.unwrap_or(0.0),
        satellite_count: defaults.satellite_count.unwrap_or(3),
        policy: DeploymentPolicy::from_preserve_order(defaults.preserve_order.unwrap_or(false)),
    };
    let orbit = compute_deploy_orbit(
        &DeployRequest::new(20_000_000.0, 20_000_000.0, EARTH_MU_M3_S2).with_settings(settings),
    )
    .expect("valid request");
    assert!((orbit.period_fraction() - 0.8).abs() < 1e-12);
}

#[test]
fn report_json_has_expected_keys() {
    let orbit = compute_deploy_orbit(&DeployRequest::new(
        7_000_000.0,
        6_800_000.0,
        EARTH_MU_M3_S2,
    ))
    .expect("valid request");
    let json = to_json_string(&DeployReport::from(&orbit)).expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
    let object = value.as_object().expect("object");
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["Ap", "Pe", "T", "Target Ap", "Target Pe", "Target T"]);
}

#[test]
fn version_is_exposed() {
    assert!(!deploy_orbit_calculator::version().is_empty());
}
