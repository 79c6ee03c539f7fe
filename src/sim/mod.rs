//! Simulation subsystems: orbital motion, telemetry, alerts, metrics,
//! and maneuver planning.
//!
//! Each feed owns its timer as a resource with idempotent start/stop;
//! the systems here only forward the frame clock into them. Nothing in
//! this module touches rendering.

pub mod alerts;
pub mod maneuver;
pub mod metrics;
pub mod motion;
pub mod telemetry;

#[cfg(test)]
mod proptest_sim;

use bevy::prelude::*;

pub use alerts::{Alert, AlertFeed, AlertKind, Severity};
pub use maneuver::{ManeuverEstimate, ManeuverKind, ManeuverPlanner};
pub use metrics::{SystemMetrics, SystemStatus};
pub use telemetry::{TelemetryFeed, TelemetrySample};

use crate::types::SimulationState;

/// Plugin providing all simulation state and timer-driven updates.
pub struct SimPlugin;

impl Plugin for SimPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationState>()
            .init_resource::<TelemetryFeed>()
            .init_resource::<AlertFeed>()
            .init_resource::<SystemMetrics>()
            .init_resource::<ManeuverPlanner>()
            .add_systems(Startup, telemetry::seed_telemetry)
            .add_systems(
                Update,
                (
                    motion::advance_bodies,
                    telemetry::sample_telemetry,
                    alerts::generate_alerts,
                    metrics::update_metrics,
                ),
            );
    }
}
