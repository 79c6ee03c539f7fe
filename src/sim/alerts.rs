//! Alert/event generator.
//!
//! Probabilistically emits timestamped alerts into a bounded,
//! most-recent-first feed on a fixed cadence, and exposes the operator
//! commands: acknowledge, dismiss, clear, filter.

use std::time::Duration;

use bevy::prelude::*;

use crate::rng::SimRng;
use crate::types::current_unix_seconds;

/// Maximum entries kept in the feed; oldest are dropped beyond this.
pub const FEED_CAPACITY: usize = 10;

/// Default seconds between generator rolls.
pub const ALERT_INTERVAL_SECS: f64 = 3.0;

/// Probability that a roll emits an alert.
pub const EMIT_PROBABILITY: f64 = 0.3;

/// Message pool the generator draws from.
pub const MESSAGE_POOL: [&str; 6] = [
    "Debris trajectory updated",
    "Satellite handoff completed",
    "AI model confidence increased",
    "Collision avoidance protocol initiated",
    "New micro-debris cluster detected",
    "Orbital decay progression nominal",
];

/// Event category of an alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Detection,
    Maneuver,
    System,
    Collision,
}

impl AlertKind {
    pub const ALL: [AlertKind; 4] = [
        AlertKind::Detection,
        AlertKind::Maneuver,
        AlertKind::System,
        AlertKind::Collision,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AlertKind::Detection => "DETECTION",
            AlertKind::Maneuver => "MANEUVER",
            AlertKind::System => "SYSTEM",
            AlertKind::Collision => "COLLISION",
        }
    }
}

/// Severity of an alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Info, Severity::Warning, Severity::Critical];

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
        }
    }
}

/// Operator acknowledgment attached to an alert.
#[derive(Clone, Debug, PartialEq)]
pub struct Acknowledgment {
    pub acknowledged_by: String,
    pub acknowledged_at: f64,
    pub notes: String,
}

/// One feed entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    /// Monotonically increasing, unique within the feed's lifetime.
    pub id: u64,
    pub kind: AlertKind,
    pub severity: Severity,
    pub message: String,
    /// Unix seconds.
    pub timestamp: f64,
    pub acknowledgment: Option<Acknowledgment>,
}

/// The bounded alert feed.
///
/// The internal timer is the only generator of new entries; operator
/// commands (acknowledge/dismiss/clear) are the only external mutators.
/// Surviving entries never reorder.
#[derive(Resource)]
pub struct AlertFeed {
    entries: Vec<Alert>,
    next_id: u64,
    filter: Option<AlertKind>,
    timer: Timer,
    running: bool,
}

impl Default for AlertFeed {
    fn default() -> Self {
        let mut feed = Self::empty();

        // Historical entries the dashboard opens with.
        let now = current_unix_seconds();
        feed.push(
            AlertKind::Maneuver,
            Severity::Info,
            "NS-003 completed decay nudge maneuver",
            now - 300.0,
        );
        feed.push(
            AlertKind::Detection,
            Severity::Warning,
            "New debris detected in LEO sector 7",
            now - 120.0,
        );
        feed
    }
}

impl AlertFeed {
    /// An empty feed without the seed entries (test setup).
    pub fn empty() -> Self {
        Self::with_interval(ALERT_INTERVAL_SECS)
    }

    /// An empty feed rolling the generator every `interval_secs`.
    pub fn with_interval(interval_secs: f64) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            filter: None,
            timer: Timer::from_seconds(interval_secs as f32, TimerMode::Repeating),
            running: true,
        }
    }

    /// Prepend a new alert and truncate to capacity. Returns its id.
    pub fn push(
        &mut self,
        kind: AlertKind,
        severity: Severity,
        message: &str,
        timestamp: f64,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.insert(
            0,
            Alert {
                id,
                kind,
                severity,
                message: message.to_string(),
                timestamp,
                acknowledgment: None,
            },
        );
        self.entries.truncate(FEED_CAPACITY);
        id
    }

    /// All surviving entries, most recent first.
    pub fn entries(&self) -> &[Alert] {
        &self.entries
    }

    /// Read-side view honoring the current kind filter. Does not mutate
    /// the underlying feed.
    pub fn filtered(&self) -> impl Iterator<Item = &Alert> {
        self.entries
            .iter()
            .filter(move |a| self.filter.is_none_or(|kind| a.kind == kind))
    }

    pub fn filter(&self) -> Option<AlertKind> {
        self.filter
    }

    pub fn set_filter(&mut self, filter: Option<AlertKind>) {
        self.filter = filter;
    }

    /// Remove one alert by id. No-op if absent.
    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|a| a.id != id);
    }

    /// Empty the feed.
    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    /// Attach (or revise) the acknowledgment record on an alert.
    ///
    /// Silent no-op on an unknown id. Acknowledging twice overwrites the
    /// record with the latest values so an operator can revise notes.
    pub fn acknowledge(&mut self, id: u64, by: &str, notes: &str, at: f64) {
        if let Some(alert) = self.entries.iter_mut().find(|a| a.id == id) {
            alert.acknowledgment = Some(Acknowledgment {
                acknowledged_by: by.to_string(),
                acknowledged_at: at,
                notes: notes.to_string(),
            });
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start (or restart) the generator timer. Idempotent.
    pub fn start(&mut self) {
        if !self.running {
            self.timer.reset();
            self.running = true;
        }
    }

    /// Stop the generator. Idempotent; commands still work while stopped.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Advance the generator timer, rolling once per elapsed interval.
    /// Returns the number of alerts emitted.
    pub fn advance(&mut self, delta: Duration, now: f64, rng: &mut SimRng) -> usize {
        if !self.running {
            return 0;
        }
        self.timer.tick(delta);
        let mut emitted = 0;
        for _ in 0..self.timer.times_finished_this_tick() {
            if rng.chance(EMIT_PROBABILITY) {
                let kind = *rng.pick(&AlertKind::ALL);
                let severity = *rng.pick(&Severity::ALL);
                let message = *rng.pick(&MESSAGE_POOL);
                self.push(kind, severity, message, now);
                emitted += 1;
            }
        }
        emitted
    }
}

/// Drive the alert generator from the frame clock.
pub fn generate_alerts(time: Res<Time>, mut feed: ResMut<AlertFeed>, mut rng: ResMut<SimRng>) {
    feed.advance(time.delta(), current_unix_seconds(), &mut rng);
}
