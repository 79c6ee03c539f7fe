//! Orbital motion model.
//!
//! Circular-orbit phase advancement, kept pure and separate from
//! rendering so the motion contract is testable on its own.

use bevy::prelude::*;
use std::f64::consts::TAU;

use crate::types::{OrbitingBody, SimulationState, TICK_RATE};

/// Advance an orbital phase by `dt_ticks` ticks.
///
/// Deterministic: `angle' = (angle + angular_speed * dt_ticks) mod 2π`,
/// with the result always reduced into `[0, 2π)`.
pub fn advance_angle(angle: f64, angular_speed: f64, dt_ticks: f64) -> f64 {
    (angle + angular_speed * dt_ticks).rem_euclid(TAU)
}

/// Position of a body in the orbital (XZ) plane.
pub fn orbital_position(angle: f64, radius: f64) -> Vec3 {
    Vec3::new(
        (radius * angle.cos()) as f32,
        0.0,
        (radius * angle.sin()) as f32,
    )
}

/// Advance every body's orbital phase.
///
/// Runs every frame; hidden bodies advance too (visibility only
/// suppresses rendering). Paused simulations freeze all phases.
pub fn advance_bodies(
    state: Res<SimulationState>,
    time: Res<Time>,
    mut bodies: Query<&mut OrbitingBody>,
) {
    if state.paused {
        return;
    }

    let dt_ticks = time.delta_secs_f64() * TICK_RATE;
    for mut body in bodies.iter_mut() {
        body.angle = advance_angle(body.angle, body.angular_speed, dt_ticks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_advance_is_deterministic() {
        assert_relative_eq!(advance_angle(1.0, 0.01, 1.0), 1.01);
        assert_relative_eq!(advance_angle(1.0, 0.01, 2.5), 1.025);
    }

    #[test]
    fn test_advance_wraps_at_tau() {
        let near_wrap = TAU - 0.005;
        let advanced = advance_angle(near_wrap, 0.01, 1.0);
        assert!(advanced >= 0.0 && advanced < TAU);
        assert_relative_eq!(advanced, 0.005, epsilon = 1e-12);
    }

    #[test]
    fn test_repeated_advance_stays_canonical() {
        let mut angle = 0.0;
        for _ in 0..100_000 {
            angle = advance_angle(angle, 0.012, 1.0);
            assert!(angle >= 0.0 && angle < TAU);
        }
    }

    #[test]
    fn test_zero_ticks_is_identity() {
        assert_relative_eq!(advance_angle(2.5, 0.01, 0.0), 2.5);
    }

    #[test]
    fn test_orbital_position_cardinal_points() {
        let p0 = orbital_position(0.0, 8.0);
        assert_relative_eq!(p0.x, 8.0);
        assert_relative_eq!(p0.y, 0.0);
        assert_relative_eq!(p0.z, 0.0, epsilon = 1e-6);

        let p90 = orbital_position(std::f64::consts::FRAC_PI_2, 8.0);
        assert_relative_eq!(p90.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p90.z, 8.0);
    }

    #[test]
    fn test_orbital_position_stays_on_circle() {
        for i in 0..64 {
            let angle = i as f64 / 64.0 * TAU;
            let p = orbital_position(angle, 10.5);
            assert_relative_eq!(p.length(), 10.5, epsilon = 1e-4);
        }
    }
}
