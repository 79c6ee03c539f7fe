//! Test utilities for the simulation tests.
//!
//! Provides fixtures for building orbiting bodies with known parameters.

use crate::types::{BodyKind, OrbitingBody, SatelliteStatus, ThreatLevel};

/// Fixtures for creating test bodies.
pub mod fixtures {
    use super::*;

    /// A satellite with the given phase and a known slow orbit.
    pub fn satellite(id: &str, angle: f64) -> OrbitingBody {
        OrbitingBody::new(
            id,
            angle,
            8.0,
            0.005,
            BodyKind::Satellite {
                status: SatelliteStatus::Active,
            },
        )
    }

    /// A debris object with the given phase, size, and threat level.
    pub fn debris(id: &str, angle: f64, size: f64, threat: ThreatLevel) -> OrbitingBody {
        OrbitingBody::new(id, angle, 10.0, 0.007, BodyKind::Debris { size, threat })
    }
}
