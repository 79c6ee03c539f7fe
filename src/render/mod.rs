//! Rendering systems for the orbital view.
//!
//! Visual representation of the central body, the fleet, and the orbit
//! rings. Rendering only reads simulation state; the motion model is the
//! sole writer of orbital phases.

pub mod bodies;
mod orbits;

use bevy::prelude::*;

use self::bodies::{apply_visibility, spawn_scene, spin_meshes, sync_body_positions};
use self::orbits::draw_orbit_rings;
use crate::sim::motion::advance_bodies;

pub use self::bodies::{status_color, threat_color};

/// Per-category visibility flags.
///
/// Hidden categories are suppressed from rendering and picking only;
/// their bodies keep advancing in the simulation.
#[derive(Resource)]
pub struct VisibilityFlags {
    pub satellites: bool,
    pub debris: bool,
    pub orbits: bool,
}

impl Default for VisibilityFlags {
    fn default() -> Self {
        Self {
            satellites: true,
            debris: true,
            orbits: true,
        }
    }
}

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<VisibilityFlags>()
            .add_systems(Startup, spawn_scene)
            // Positions sync after the motion model has advanced phases.
            .add_systems(
                Update,
                (
                    sync_body_positions.after(advance_bodies),
                    spin_meshes,
                    apply_visibility,
                    draw_orbit_rings,
                ),
            );
    }
}
