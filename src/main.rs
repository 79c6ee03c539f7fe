//! Orbitwatch - Mission Control Dashboard
//!
//! A desktop application for monitoring a simulated nano-satellite
//! constellation and the orbital debris it tracks.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use orbitwatch::camera::CameraPlugin;
use orbitwatch::picking::PickingPlugin;
use orbitwatch::render::RenderPlugin;
use orbitwatch::rng::SimRng;
use orbitwatch::sim::SimPlugin;
use orbitwatch::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orbitwatch Mission Control".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(SimRng::default())
        .add_plugins((CameraPlugin, SimPlugin, RenderPlugin, PickingPlugin, UiPlugin))
        .run();
}
