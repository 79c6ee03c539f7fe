//! Property-based tests for the simulation invariants using proptest.
//!
//! These verify the bounded-range guarantees across arbitrary seeds and
//! input trajectories, not just the hand-picked cases in the unit tests.

use proptest::prelude::*;
use std::f64::consts::TAU;
use std::time::Duration;

use crate::camera::{DEFAULT_POSITION, MAX_DISTANCE, MIN_DISTANCE, zoom_along_view};
use crate::rng::SimRng;
use crate::sim::alerts::{AlertFeed, FEED_CAPACITY};
use crate::sim::motion::advance_angle;
use crate::sim::telemetry::{seed_history, step_sample, SERIES_CAPACITY, TelemetryFeed};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Repeated advancement never leaves the canonical angle range.
    #[test]
    fn prop_angle_stays_canonical(
        start_normalized in 0.0f64..1.0,
        angular_speed in 1e-6f64..0.1,
        dt_ticks in 0.0f64..10.0,
        steps in 1usize..500,
    ) {
        let mut angle = start_normalized * TAU;
        for _ in 0..steps {
            angle = advance_angle(angle, angular_speed, dt_ticks);
            prop_assert!((0.0..TAU).contains(&angle));
        }
    }

    /// Bounded telemetry channels stay bounded from any seed.
    #[test]
    fn prop_telemetry_channels_bounded(seed in any::<u64>(), steps in 1usize..500) {
        let mut rng = SimRng::seeded(seed);
        let mut sample = seed_history(0.0, &mut rng).back().unwrap().clone();
        for i in 0..steps {
            sample = step_sample(&sample, i as f64, &mut rng);
            prop_assert!((0.0..=100.0).contains(&sample.battery));
            prop_assert!((0.0..=100.0).contains(&sample.signal_strength));
            prop_assert!(sample.velocity >= 0.0);
            prop_assert!(sample.altitude >= 0.0);
            prop_assert!(sample.thrust >= 0.0);
        }
    }

    /// The rolling series never exceeds its capacity and keeps the most
    /// recent samples in append order.
    #[test]
    fn prop_series_window_semantics(seed in any::<u64>(), appends in 1usize..100) {
        let mut rng = SimRng::seeded(seed);
        let mut feed = TelemetryFeed::default();
        feed.reseed(0.0, &mut rng);

        for i in 0..appends {
            let now = (i + 1) as f64 * 3.0;
            feed.advance(Duration::from_secs(3), now, &mut rng);
            prop_assert!(feed.len() <= SERIES_CAPACITY);
            prop_assert_eq!(feed.latest().unwrap().timestamp, now);
        }

        let timestamps: Vec<f64> = feed.series().map(|s| s.timestamp).collect();
        for pair in timestamps.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    /// The alert feed never exceeds its capacity regardless of how many
    /// generator intervals elapse.
    #[test]
    fn prop_alert_feed_bounded(seed in any::<u64>(), intervals in 1usize..300) {
        let mut rng = SimRng::seeded(seed);
        let mut feed = AlertFeed::empty();
        for i in 0..intervals {
            feed.advance(Duration::from_secs(3), i as f64, &mut rng);
            prop_assert!(feed.entries().len() <= FEED_CAPACITY);
        }

        // Most-recent-first: ids strictly decrease down the feed.
        let ids: Vec<u64> = feed.entries().iter().map(|a| a.id).collect();
        for pair in ids.windows(2) {
            prop_assert!(pair[0] > pair[1]);
        }
    }

    /// Any sequence of wheel events keeps the camera inside its
    /// distance band.
    #[test]
    fn prop_zoom_stays_in_band(scrolls in proptest::collection::vec(-100.0f32..100.0, 1..100)) {
        let mut pos = DEFAULT_POSITION;
        for scroll in scrolls {
            pos = zoom_along_view(pos, scroll);
            let dist = pos.length();
            prop_assert!(dist >= MIN_DISTANCE - 1e-3 && dist <= MAX_DISTANCE + 1e-3);
        }
    }
}
