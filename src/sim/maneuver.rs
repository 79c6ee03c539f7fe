//! Maneuver planning and estimation.
//!
//! The planner stores only the operator's inputs (target, thrust,
//! duration, burn angle); every derived figure is recomputed on demand
//! through the pure [`estimate`] function so the model stays trivially
//! testable.

use bevy::prelude::*;

use crate::fleet::DEFAULT_MANEUVER_TARGET;
use crate::types::current_unix_seconds;

/// Thrust slider range, Newtons.
pub const THRUST_MIN: f64 = 0.005;
pub const THRUST_MAX: f64 = 0.05;

/// Burn duration slider range, seconds.
pub const DURATION_MIN: f64 = 60.0;
pub const DURATION_MAX: f64 = 300.0;

/// Burn angle range, degrees.
pub const BURN_ANGLE_MIN: f64 = 0.0;
pub const BURN_ANGLE_MAX: f64 = 360.0;

/// Kind of planned burn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ManeuverKind {
    /// Low-thrust burn lowering a debris orbit toward atmospheric decay.
    #[default]
    Nudge,
    /// Emergency escape burn away from an imminent conjunction.
    Avoidance,
}

impl ManeuverKind {
    pub fn label(&self) -> &'static str {
        match self {
            ManeuverKind::Nudge => "DECAY NUDGE",
            ManeuverKind::Avoidance => "COLLISION AVOID",
        }
    }
}

/// Derived figures for a planned burn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ManeuverEstimate {
    /// m/s
    pub delta_v: f64,
    /// kg
    pub fuel_cost: f64,
    /// `[0, 0.99]`
    pub success_probability: f64,
}

/// Estimate the outcome of a burn.
///
/// Pure function of the inputs. The burn angle is tracked by the planner
/// but does not yet feed a directional efficiency model, so it is
/// accepted and ignored here. Inputs are assumed pre-clamped to the
/// slider ranges; no validation happens at this level.
pub fn estimate(thrust: f64, duration_secs: f64, _burn_angle_deg: f64) -> ManeuverEstimate {
    ManeuverEstimate {
        delta_v: thrust * duration_secs * 0.025,
        fuel_cost: thrust * duration_secs * 0.0007,
        success_probability: (0.7 + thrust * 10.0).min(0.99),
    }
}

/// Acknowledgement returned by simulated command execution.
#[derive(Clone, Debug, PartialEq)]
pub struct ManeuverAck {
    pub message: String,
    /// Unix seconds.
    pub timestamp: f64,
}

/// Mutable maneuver inputs plus the last command acknowledgement.
#[derive(Resource)]
pub struct ManeuverPlanner {
    target_id: String,
    kind: ManeuverKind,
    thrust: f64,
    duration_secs: f64,
    burn_angle_deg: f64,
    /// Most recent execute/simulate acknowledgement, for display.
    pub last_ack: Option<ManeuverAck>,
}

impl Default for ManeuverPlanner {
    fn default() -> Self {
        Self {
            target_id: DEFAULT_MANEUVER_TARGET.to_string(),
            kind: ManeuverKind::Nudge,
            thrust: 0.025,
            duration_secs: 180.0,
            burn_angle_deg: 45.0,
            last_ack: None,
        }
    }
}

impl ManeuverPlanner {
    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    pub fn set_target(&mut self, id: &str) {
        self.target_id = id.to_string();
    }

    pub fn kind(&self) -> ManeuverKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: ManeuverKind) {
        self.kind = kind;
    }

    pub fn thrust(&self) -> f64 {
        self.thrust
    }

    /// Set the thrust level, clamping silently to the slider range.
    pub fn set_thrust(&mut self, thrust: f64) {
        let clamped = thrust.clamp(THRUST_MIN, THRUST_MAX);
        if clamped != thrust {
            debug!("Thrust {thrust} out of range, clamped to {clamped}");
        }
        self.thrust = clamped;
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    /// Set the burn duration, clamping silently to the slider range.
    pub fn set_duration(&mut self, secs: f64) {
        let clamped = secs.clamp(DURATION_MIN, DURATION_MAX);
        if clamped != secs {
            debug!("Duration {secs}s out of range, clamped to {clamped}s");
        }
        self.duration_secs = clamped;
    }

    pub fn burn_angle_deg(&self) -> f64 {
        self.burn_angle_deg
    }

    /// Set the burn angle, wrapping into `[0, 360)`.
    pub fn set_burn_angle(&mut self, degrees: f64) {
        self.burn_angle_deg = degrees.rem_euclid(BURN_ANGLE_MAX);
    }

    /// Current derived estimate for the stored inputs.
    pub fn estimate(&self) -> ManeuverEstimate {
        estimate(self.thrust, self.duration_secs, self.burn_angle_deg)
    }

    /// Execute the planned maneuver. Simulated: returns an immediate
    /// success acknowledgement and performs no orbital change.
    pub fn execute(&mut self) -> ManeuverAck {
        let ack = ManeuverAck {
            message: format!(
                "{} maneuver for {} started successfully",
                match self.kind {
                    ManeuverKind::Nudge => "Nudge",
                    ManeuverKind::Avoidance => "Avoidance",
                },
                self.target_id
            ),
            timestamp: current_unix_seconds(),
        };
        info!("{}", ack.message);
        self.last_ack = Some(ack.clone());
        ack
    }

    /// Placeholder for trajectory simulation; acknowledges and does
    /// nothing else.
    pub fn simulate(&mut self) -> ManeuverAck {
        let ack = ManeuverAck {
            message: "Computing trajectory predictions...".to_string(),
            timestamp: current_unix_seconds(),
        };
        self.last_ack = Some(ack.clone());
        ack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_estimate() {
        let est = estimate(0.025, 180.0, 45.0);
        assert_relative_eq!(est.delta_v, 0.1125);
        assert_relative_eq!(est.fuel_cost, 0.00315);
        assert_relative_eq!(est.success_probability, 0.95);
    }

    #[test]
    fn test_success_probability_is_capped() {
        let est = estimate(THRUST_MAX, 300.0, 0.0);
        assert_relative_eq!(est.success_probability, 0.99);
    }

    #[test]
    fn test_burn_angle_does_not_affect_estimate() {
        let a = estimate(0.01, 120.0, 0.0);
        let b = estimate(0.01, 120.0, 270.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_setters_clamp_to_slider_ranges() {
        let mut planner = ManeuverPlanner::default();

        planner.set_thrust(1.0);
        assert_relative_eq!(planner.thrust(), THRUST_MAX);
        planner.set_thrust(0.0);
        assert_relative_eq!(planner.thrust(), THRUST_MIN);

        planner.set_duration(10.0);
        assert_relative_eq!(planner.duration_secs(), DURATION_MIN);
        planner.set_duration(9999.0);
        assert_relative_eq!(planner.duration_secs(), DURATION_MAX);

        planner.set_burn_angle(405.0);
        assert_relative_eq!(planner.burn_angle_deg(), 45.0);
        planner.set_burn_angle(-90.0);
        assert_relative_eq!(planner.burn_angle_deg(), 270.0);
    }

    #[test]
    fn test_estimate_tracks_inputs() {
        let mut planner = ManeuverPlanner::default();
        planner.set_thrust(0.01);
        planner.set_duration(100.0);
        let est = planner.estimate();
        assert_relative_eq!(est.delta_v, 0.01 * 100.0 * 0.025);
        assert_relative_eq!(est.fuel_cost, 0.01 * 100.0 * 0.0007);
    }

    #[test]
    fn test_execute_acknowledges_immediately() {
        let mut planner = ManeuverPlanner::default();
        let ack = planner.execute();
        assert!(ack.message.contains("Nudge maneuver for D-003"));
        assert_eq!(planner.last_ack.as_ref(), Some(&ack));

        planner.set_kind(ManeuverKind::Avoidance);
        planner.set_target("D-001");
        let ack = planner.execute();
        assert!(ack.message.contains("Avoidance maneuver for D-001"));
    }

    #[test]
    fn test_simulate_is_placeholder() {
        let mut planner = ManeuverPlanner::default();
        let before = planner.estimate();
        let ack = planner.simulate();
        assert!(ack.message.contains("Computing"));
        assert_eq!(planner.estimate(), before);
    }
}
