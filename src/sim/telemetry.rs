//! Telemetry simulator.
//!
//! Produces a bounded rolling series of satellite vitals via bounded
//! random-walk updates on a fixed 3-second cadence. The feed owns its
//! timer; `start`/`stop` are idempotent.

use std::collections::VecDeque;
use std::time::Duration;

use bevy::prelude::*;

use crate::fleet::{self, DEFAULT_SATELLITE};
use crate::rng::SimRng;
use crate::types::current_unix_seconds;

/// Capacity of the rolling sample series.
pub const SERIES_CAPACITY: usize = 21;

/// Seconds between samples (and between synthetic seed samples).
pub const SAMPLE_INTERVAL_SECS: f64 = 3.0;

/// Per-channel random-walk step bounds.
pub const BATTERY_STEP: f64 = 0.25;
pub const TEMPERATURE_STEP: f64 = 0.5;
pub const VELOCITY_STEP: f64 = 0.025;
pub const ALTITUDE_STEP: f64 = 0.25;
pub const THRUST_STEP: f64 = 0.01;
pub const SIGNAL_STEP: f64 = 1.0;

/// One telemetry reading for the selected satellite.
#[derive(Clone, Debug, PartialEq)]
pub struct TelemetrySample {
    /// Unix seconds.
    pub timestamp: f64,
    /// Percent, clamped to `[0, 100]`.
    pub battery: f64,
    /// Degrees Celsius, unclamped.
    pub temperature: f64,
    /// km/s, non-negative.
    pub velocity: f64,
    /// km, non-negative.
    pub altitude: f64,
    /// Newtons, non-negative.
    pub thrust: f64,
    /// Percent, clamped to `[0, 100]`.
    pub signal_strength: f64,
}

/// Evolve one sample into the next by a bounded random walk.
///
/// Each channel moves by a uniform step within its bound, then is
/// clamped back into its valid range. Temperature is intentionally
/// unclamped.
pub fn step_sample(prev: &TelemetrySample, timestamp: f64, rng: &mut SimRng) -> TelemetrySample {
    TelemetrySample {
        timestamp,
        battery: (prev.battery + rng.step(BATTERY_STEP)).clamp(0.0, 100.0),
        temperature: prev.temperature + rng.step(TEMPERATURE_STEP),
        velocity: (prev.velocity + rng.step(VELOCITY_STEP)).max(0.0),
        altitude: (prev.altitude + rng.step(ALTITUDE_STEP)).max(0.0),
        thrust: (prev.thrust + rng.step(THRUST_STEP)).max(0.0),
        signal_strength: (prev.signal_strength + rng.step(SIGNAL_STEP)).clamp(0.0, 100.0),
    }
}

/// One synthetic sample for seeding a fresh subscription.
fn seed_sample(timestamp: f64, rng: &mut SimRng) -> TelemetrySample {
    TelemetrySample {
        timestamp,
        battery: 85.0 + rng.uniform(0.0, 5.0),
        temperature: 20.0 + rng.uniform(0.0, 5.0),
        velocity: 7.7 + rng.uniform(0.0, 0.2),
        altitude: 418.0 + rng.uniform(0.0, 4.0),
        thrust: 0.1 + rng.uniform(0.0, 0.05),
        signal_strength: 90.0 + rng.uniform(0.0, 10.0),
    }
}

/// Build a full synthetic history ending at `now`, oldest first.
pub fn seed_history(now: f64, rng: &mut SimRng) -> VecDeque<TelemetrySample> {
    let mut series = VecDeque::with_capacity(SERIES_CAPACITY);
    for i in (0..SERIES_CAPACITY).rev() {
        let timestamp = now - i as f64 * SAMPLE_INTERVAL_SECS;
        series.push_back(seed_sample(timestamp, rng));
    }
    series
}

/// Selecting a satellite outside the tracked constellation.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown satellite id `{0}`")]
pub struct UnknownSatelliteError(pub String);

/// The rolling telemetry feed for the currently selected satellite.
#[derive(Resource)]
pub struct TelemetryFeed {
    satellite_id: String,
    series: VecDeque<TelemetrySample>,
    timer: Timer,
    running: bool,
}

impl Default for TelemetryFeed {
    fn default() -> Self {
        Self {
            satellite_id: DEFAULT_SATELLITE.to_string(),
            series: VecDeque::with_capacity(SERIES_CAPACITY),
            timer: Timer::from_seconds(SAMPLE_INTERVAL_SECS as f32, TimerMode::Repeating),
            running: true,
        }
    }
}

impl TelemetryFeed {
    /// Currently selected satellite id.
    pub fn satellite_id(&self) -> &str {
        &self.satellite_id
    }

    /// Latest sample, if the feed has been seeded.
    pub fn latest(&self) -> Option<&TelemetrySample> {
        self.series.back()
    }

    /// Full rolling series, oldest first.
    pub fn series(&self) -> impl Iterator<Item = &TelemetrySample> {
        self.series.iter()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Replace the series with a fresh synthetic history.
    pub fn reseed(&mut self, now: f64, rng: &mut SimRng) {
        self.series = seed_history(now, rng);
    }

    /// Switch the feed to another satellite, discarding the current
    /// series and reseeding it, modeling a fresh subscription.
    ///
    /// Unknown ids leave the feed untouched.
    pub fn select_satellite(
        &mut self,
        id: &str,
        now: f64,
        rng: &mut SimRng,
    ) -> Result<(), UnknownSatelliteError> {
        if !fleet::is_known_satellite(id) {
            return Err(UnknownSatelliteError(id.to_string()));
        }
        if id != self.satellite_id {
            self.satellite_id = id.to_string();
            self.reseed(now, rng);
            self.timer.reset();
        }
        Ok(())
    }

    /// Append a sample, evicting the oldest beyond capacity.
    pub fn push(&mut self, sample: TelemetrySample) {
        if self.series.len() == SERIES_CAPACITY {
            self.series.pop_front();
        }
        self.series.push_back(sample);
    }

    /// Start (or restart) the feed timer. Idempotent.
    pub fn start(&mut self) {
        if !self.running {
            self.timer.reset();
            self.running = true;
        }
    }

    /// Stop the feed timer. Idempotent; stopping a stopped feed is a no-op.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Advance the feed's timer by `delta`, appending one new sample per
    /// elapsed interval. Returns the number of samples appended.
    pub fn advance(&mut self, delta: Duration, now: f64, rng: &mut SimRng) -> usize {
        if !self.running {
            return 0;
        }
        self.timer.tick(delta);
        let mut appended = 0;
        for _ in 0..self.timer.times_finished_this_tick() {
            let next = match self.latest() {
                Some(prev) => step_sample(prev, now, rng),
                None => seed_sample(now, rng),
            };
            self.push(next);
            appended += 1;
        }
        appended
    }
}

/// Seed the feed with a synthetic history at startup.
pub fn seed_telemetry(mut feed: ResMut<TelemetryFeed>, mut rng: ResMut<SimRng>) {
    feed.reseed(current_unix_seconds(), &mut rng);
    info!(
        "Telemetry feed seeded for {} ({} samples)",
        feed.satellite_id(),
        feed.len()
    );
}

/// Drive the telemetry timer from the frame clock.
pub fn sample_telemetry(time: Res<Time>, mut feed: ResMut<TelemetryFeed>, mut rng: ResMut<SimRng>) {
    feed.advance(time.delta(), current_unix_seconds(), &mut rng);
}
