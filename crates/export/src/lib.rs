//! Export helpers for deployment reports.

use std::io::{self, Write};

use deploy_orbits::DeployOrbit;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

const INDENT: &[u8] = b"    ";

/// Report emitted on stdout, keyed the way downstream scripts expect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeployReport {
    #[serde(rename = "Ap")]
    pub apoapsis: f64,
    #[serde(rename = "Pe")]
    pub periapsis: f64,
    #[serde(rename = "T")]
    pub period: f64,
    #[serde(rename = "Target Ap")]
    pub target_apoapsis: f64,
    #[serde(rename = "Target Pe")]
    pub target_periapsis: f64,
    #[serde(rename = "Target T")]
    pub target_period: f64,
}

impl From<&DeployOrbit> for DeployReport {
    fn from(orbit: &DeployOrbit) -> Self {
        Self {
            apoapsis: orbit.apoapsis,
            periapsis: orbit.periapsis,
            period: orbit.period,
            target_apoapsis: orbit.target_apoapsis,
            target_periapsis: orbit.target_periapsis,
            target_period: orbit.target_period,
        }
    }
}

/// Pretty-print the report as JSON with four-space indentation.
pub fn write_json<W: Write>(writer: W, report: &DeployReport) -> io::Result<()> {
    let mut serializer = Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    report.serialize(&mut serializer)?;
    Ok(())
}

/// Render the report to a JSON string.
pub fn to_json_string(report: &DeployReport) -> io::Result<String> {
    let mut buffer = Vec::new();
    write_json(&mut buffer, report)?;
    String::from_utf8(buffer).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}
