//! Seed fleet definitions.
//!
//! The tracked constellation (four nano-satellites) and the initial
//! debris catalog, with the orbital parameters the dashboard starts from.

use std::f64::consts::PI;

use crate::types::{BodyKind, OrbitingBody, SatelliteStatus, ThreatLevel};

/// Identifiers of the tracked satellites, in selection order.
pub const SATELLITE_IDS: [&str; 4] = ["NS-001", "NS-002", "NS-003", "NS-004"];

/// Satellite selected by default when the telemetry feed starts.
pub const DEFAULT_SATELLITE: &str = "NS-001";

/// Debris object targeted by default in the maneuver planner.
pub const DEFAULT_MANEUVER_TARGET: &str = "D-003";

/// The tracked satellite constellation.
pub fn satellites() -> Vec<OrbitingBody> {
    vec![
        OrbitingBody::new(
            "NS-001",
            0.0,
            8.0,
            0.01,
            BodyKind::Satellite {
                status: SatelliteStatus::Active,
            },
        ),
        OrbitingBody::new(
            "NS-002",
            PI / 2.0,
            8.0,
            0.01,
            BodyKind::Satellite {
                status: SatelliteStatus::Coordinating,
            },
        ),
        OrbitingBody::new(
            "NS-003",
            PI,
            10.0,
            0.008,
            BodyKind::Satellite {
                status: SatelliteStatus::Tracking,
            },
        ),
        OrbitingBody::new(
            "NS-004",
            3.0 * PI / 2.0,
            10.0,
            0.008,
            BodyKind::Satellite {
                status: SatelliteStatus::Active,
            },
        ),
    ]
}

/// The initial debris catalog.
pub fn debris() -> Vec<OrbitingBody> {
    vec![
        OrbitingBody::new(
            "D-001",
            0.5,
            9.0,
            0.012,
            BodyKind::Debris {
                size: 0.15,
                threat: ThreatLevel::Low,
            },
        ),
        OrbitingBody::new(
            "D-002",
            2.0,
            11.0,
            0.009,
            BodyKind::Debris {
                size: 0.25,
                threat: ThreatLevel::Medium,
            },
        ),
        OrbitingBody::new(
            "D-003",
            4.0,
            12.0,
            0.007,
            BodyKind::Debris {
                size: 0.4,
                threat: ThreatLevel::High,
            },
        ),
        OrbitingBody::new(
            "D-004",
            3.0,
            8.5,
            0.011,
            BodyKind::Debris {
                size: 0.12,
                threat: ThreatLevel::Low,
            },
        ),
        OrbitingBody::new(
            "D-005",
            5.0,
            10.5,
            0.008,
            BodyKind::Debris {
                size: 0.2,
                threat: ThreatLevel::Medium,
            },
        ),
    ]
}

/// All bodies the scene starts with, satellites first.
pub fn fleet() -> Vec<OrbitingBody> {
    let mut bodies = satellites();
    bodies.extend(debris());
    bodies
}

/// Whether `id` names a tracked satellite.
pub fn is_known_satellite(id: &str) -> bool {
    SATELLITE_IDS.contains(&id)
}
