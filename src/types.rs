//! Core types and constants for the mission-control simulation.

use bevy::prelude::*;
use std::f64::consts::TAU;

/// Simulation tick rate. Orbital angular speeds are expressed in radians
/// per tick, so one tick corresponds to one frame at the nominal 60 Hz
/// animation cadence regardless of the actual frame rate.
pub const TICK_RATE: f64 = 60.0;

/// Render radius of the central body (Earth) in scene units.
pub const EARTH_RADIUS: f32 = 5.0;

/// Render radius of the atmosphere glow shell.
pub const ATMOSPHERE_RADIUS: f32 = 5.2;

/// Orbit ring radii drawn behind the fleet, in scene units.
pub const ORBIT_RING_RADII: [f64; 3] = [8.0, 10.0, 12.0];

/// Earth self-rotation in radians per tick.
pub const EARTH_SPIN_RATE: f64 = 0.001;

/// Operational status of a satellite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SatelliteStatus {
    Active,
    Coordinating,
    Tracking,
}

impl SatelliteStatus {
    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            SatelliteStatus::Active => "ACTIVE",
            SatelliteStatus::Coordinating => "COORDINATING",
            SatelliteStatus::Tracking => "TRACKING",
        }
    }
}

/// Coarse debris risk classification driving color-coding and alerting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ThreatLevel {
    Low,
    Medium,
    High,
}

impl ThreatLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ThreatLevel::Low => "LOW",
            ThreatLevel::Medium => "MEDIUM",
            ThreatLevel::High => "HIGH",
        }
    }
}

/// Kind-specific payload of an orbiting body.
///
/// Satellites and debris share the motion fields on [`OrbitingBody`];
/// everything kind-specific lives here as a tagged variant so read sites
/// match on the kind instead of probing fields.
#[derive(Clone, Debug, PartialEq)]
pub enum BodyKind {
    Satellite {
        status: SatelliteStatus,
    },
    Debris {
        /// Visual/physical scale in scene units.
        size: f64,
        threat: ThreatLevel,
    },
}

impl BodyKind {
    pub fn is_satellite(&self) -> bool {
        matches!(self, BodyKind::Satellite { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            BodyKind::Satellite { .. } => "SATELLITE",
            BodyKind::Debris { .. } => "DEBRIS",
        }
    }
}

/// A body on a circular orbit around the central body.
///
/// `angle` is the orbital phase in radians and is canonicalized into
/// `[0, 2π)` on every write; consumers may read it without applying a
/// modulo of their own.
#[derive(Component, Clone, Debug)]
pub struct OrbitingBody {
    /// Stable identifier (e.g. "NS-001", "D-003").
    pub id: String,
    /// Orbital phase in radians, always in `[0, 2π)`.
    pub angle: f64,
    /// Orbital distance from the central body, positive.
    pub radius: f64,
    /// Radians advanced per simulation tick, positive.
    pub angular_speed: f64,
    pub kind: BodyKind,
}

impl OrbitingBody {
    pub fn new(id: &str, angle: f64, radius: f64, angular_speed: f64, kind: BodyKind) -> Self {
        Self {
            id: id.to_string(),
            angle: angle.rem_euclid(TAU),
            radius,
            angular_speed,
            kind,
        }
    }
}

/// Global pause state for the scene.
///
/// Pausing freezes orbital motion and camera auto-advance. The telemetry,
/// alert, and metrics timers are owned by their feeds and are unaffected.
#[derive(Resource, Default)]
pub struct SimulationState {
    pub paused: bool,
}

impl SimulationState {
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }
}

/// Current wall-clock time as Unix seconds.
pub fn current_unix_seconds() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

/// Format Unix seconds as a "HH:MM:SS" clock string (UTC).
///
/// Display-only; ignores leap seconds.
pub fn format_clock(unix_seconds: f64) -> String {
    let secs = unix_seconds.max(0.0) as u64;
    let time_of_day = secs % 86400;
    let hours = time_of_day / 3600;
    let minutes = (time_of_day % 3600) / 60;
    let seconds = time_of_day % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_body_canonicalizes_angle() {
        let body = OrbitingBody::new(
            "NS-TEST",
            3.0 * TAU + 0.5,
            8.0,
            0.01,
            BodyKind::Satellite {
                status: SatelliteStatus::Active,
            },
        );
        assert!((body.angle - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_new_body_handles_negative_angle() {
        let body = OrbitingBody::new(
            "D-TEST",
            -0.25,
            9.0,
            0.012,
            BodyKind::Debris {
                size: 0.15,
                threat: ThreatLevel::Low,
            },
        );
        assert!(body.angle >= 0.0 && body.angle < TAU);
        assert!((body.angle - (TAU - 0.25)).abs() < 1e-12);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0.0), "00:00:00");
        // 12:34:15 UTC on an arbitrary day
        assert_eq!(
            format_clock(86400.0 + 12.0 * 3600.0 + 34.0 * 60.0 + 15.0),
            "12:34:15"
        );
    }

    #[test]
    fn test_kind_labels() {
        let sat = BodyKind::Satellite {
            status: SatelliteStatus::Tracking,
        };
        assert!(sat.is_satellite());
        assert_eq!(sat.label(), "SATELLITE");

        let debris = BodyKind::Debris {
            size: 0.4,
            threat: ThreatLevel::High,
        };
        assert!(!debris.is_satellite());
        assert_eq!(debris.label(), "DEBRIS");
    }

    #[test]
    fn test_pause_resume() {
        let mut state = SimulationState::default();
        assert!(!state.paused);
        state.pause();
        state.pause();
        assert!(state.paused);
        state.resume();
        assert!(!state.paused);
    }
}
