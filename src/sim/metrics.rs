//! Fleet-wide system metrics.
//!
//! Bounded random walks over the dashboard vitals (ground-segment CPU,
//! memory, link latency, debris count) plus a sampled fleet threat
//! level, on the same start/stop timer model as the other feeds.

use std::time::Duration;

use bevy::prelude::*;

use crate::rng::SimRng;
use crate::types::ThreatLevel;

/// Seconds between metric updates.
pub const METRICS_INTERVAL_SECS: f64 = 3.0;

/// Overall system health derived from the fleet threat level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SystemStatus {
    Operational,
    Warning,
    Critical,
}

impl SystemStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SystemStatus::Operational => "OPERATIONAL",
            SystemStatus::Warning => "WARNING",
            SystemStatus::Critical => "CRITICAL",
        }
    }
}

/// Fleet-wide vitals shown in the status strip.
#[derive(Resource)]
pub struct SystemMetrics {
    pub active_satellites: u32,
    pub debris_tracked: i64,
    pub threat_level: ThreatLevel,
    /// Percent, clamped to `[20, 95]`.
    pub cpu_usage: f64,
    /// Percent, clamped to `[30, 90]`.
    pub memory_usage: f64,
    /// Milliseconds, clamped to `[10, 100]`.
    pub network_latency: f64,
    timer: Timer,
    running: bool,
}

impl Default for SystemMetrics {
    fn default() -> Self {
        Self {
            active_satellites: 4,
            debris_tracked: 247,
            threat_level: ThreatLevel::Low,
            cpu_usage: 45.0,
            memory_usage: 62.0,
            network_latency: 23.0,
            timer: Timer::from_seconds(METRICS_INTERVAL_SECS as f32, TimerMode::Repeating),
            running: true,
        }
    }
}

impl SystemMetrics {
    pub fn system_status(&self) -> SystemStatus {
        match self.threat_level {
            ThreatLevel::Low => SystemStatus::Operational,
            ThreatLevel::Medium => SystemStatus::Warning,
            ThreatLevel::High => SystemStatus::Critical,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start (or restart) the metrics timer. Idempotent.
    pub fn start(&mut self) {
        if !self.running {
            self.timer.reset();
            self.running = true;
        }
    }

    /// Stop the metrics timer. Idempotent.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// One random-walk update of every metric.
    fn step(&mut self, rng: &mut SimRng) {
        self.debris_tracked += rng.uniform(-1.0, 2.0).floor() as i64;
        self.cpu_usage = (self.cpu_usage + rng.step(5.0)).clamp(20.0, 95.0);
        self.memory_usage = (self.memory_usage + rng.step(2.5)).clamp(30.0, 90.0);
        self.network_latency = (self.network_latency + rng.step(7.5)).clamp(10.0, 100.0);

        let roll = rng.uniform(0.0, 1.0);
        self.threat_level = if roll > 0.95 {
            ThreatLevel::High
        } else if roll > 0.8 {
            ThreatLevel::Medium
        } else {
            ThreatLevel::Low
        };
    }

    /// Advance the metrics timer, stepping once per elapsed interval.
    pub fn advance(&mut self, delta: Duration, rng: &mut SimRng) -> usize {
        if !self.running {
            return 0;
        }
        self.timer.tick(delta);
        let steps = self.timer.times_finished_this_tick() as usize;
        for _ in 0..steps {
            self.step(rng);
        }
        steps
    }
}

/// Drive the metrics timer from the frame clock.
pub fn update_metrics(time: Res<Time>, mut metrics: ResMut<SystemMetrics>, mut rng: ResMut<SimRng>) {
    metrics.advance(time.delta(), &mut rng);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_stay_in_bounds() {
        let mut rng = SimRng::seeded(31);
        let mut metrics = SystemMetrics::default();
        for _ in 0..5_000 {
            metrics.advance(Duration::from_secs(3), &mut rng);
            assert!((20.0..=95.0).contains(&metrics.cpu_usage));
            assert!((30.0..=90.0).contains(&metrics.memory_usage));
            assert!((10.0..=100.0).contains(&metrics.network_latency));
        }
    }

    #[test]
    fn test_status_tracks_threat_level() {
        let mut metrics = SystemMetrics::default();
        metrics.threat_level = ThreatLevel::Low;
        assert_eq!(metrics.system_status(), SystemStatus::Operational);
        metrics.threat_level = ThreatLevel::Medium;
        assert_eq!(metrics.system_status(), SystemStatus::Warning);
        metrics.threat_level = ThreatLevel::High;
        assert_eq!(metrics.system_status(), SystemStatus::Critical);
    }

    #[test]
    fn test_stopped_metrics_freeze() {
        let mut rng = SimRng::seeded(31);
        let mut metrics = SystemMetrics::default();
        metrics.stop();
        let cpu = metrics.cpu_usage;
        let debris = metrics.debris_tracked;
        assert_eq!(metrics.advance(Duration::from_secs(300), &mut rng), 0);
        assert_eq!(metrics.cpu_usage, cpu);
        assert_eq!(metrics.debris_tracked, debris);
    }

    #[test]
    fn test_advance_steps_once_per_interval() {
        let mut rng = SimRng::seeded(31);
        let mut metrics = SystemMetrics::default();
        assert_eq!(metrics.advance(Duration::from_secs(1), &mut rng), 0);
        assert_eq!(metrics.advance(Duration::from_secs(2), &mut rng), 1);
        assert_eq!(metrics.advance(Duration::from_secs(9), &mut rng), 3);
    }
}
