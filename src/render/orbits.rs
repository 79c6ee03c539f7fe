//! Orbit ring rendering using Bevy Gizmos.

use bevy::prelude::*;
use std::f64::consts::TAU;

use crate::render::VisibilityFlags;
use crate::sim::motion::orbital_position;
use crate::types::ORBIT_RING_RADII;

/// Segments per ring (higher = smoother).
const RING_SEGMENTS: u32 = 128;

/// Draw the reference orbit rings in the XZ plane.
pub fn draw_orbit_rings(mut gizmos: Gizmos, flags: Res<VisibilityFlags>) {
    if !flags.orbits {
        return;
    }

    let color = Color::srgba(0.357, 0.725, 1.0, 0.3);
    for &radius in &ORBIT_RING_RADII {
        let mut prev: Option<Vec3> = None;
        for i in 0..=RING_SEGMENTS {
            let angle = (i as f64 / RING_SEGMENTS as f64) * TAU;
            let point = orbital_position(angle, radius);
            if let Some(p0) = prev {
                gizmos.line(p0, point, color);
            }
            prev = Some(point);
        }
    }
}
