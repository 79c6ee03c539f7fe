//! UI module providing the egui-based mission console.
//!
//! A bottom dock carries the primary controls, a floating card inspects
//! the selected body, and operations panels cover telemetry, alerts, and
//! maneuver planning.

mod alerts_panel;
mod dock;
pub mod icons;
mod inspector;
mod maneuver_panel;
mod telemetry_panel;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use alerts_panel::AlertPanelState;
pub use maneuver_panel::ManeuverPanelState;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<icons::FontsInitialized>()
            .init_resource::<AlertPanelState>()
            .init_resource::<ManeuverPanelState>()
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    dock::dock_system,
                    telemetry_panel::telemetry_panel_system,
                    alerts_panel::alerts_panel_system,
                    maneuver_panel::maneuver_panel_system,
                    inspector::inspector_system,
                )
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}

/// Shared colors for the console chrome.
pub(crate) mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(26, 26, 36, 240);
    pub const BORDER: Color32 = Color32::from_rgb(60, 60, 80);
    pub const TEXT: Color32 = Color32::from_rgb(220, 220, 230);
    pub const DIM: Color32 = Color32::from_rgb(130, 135, 150);
    pub const ACCENT: Color32 = Color32::from_rgb(91, 185, 255);
    pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
    pub const WARNING: Color32 = Color32::from_rgb(234, 179, 8);
    pub const DANGER: Color32 = Color32::from_rgb(239, 68, 68);
    pub const PLAY_ICON: Color32 = Color32::from_rgb(85, 221, 136);
    pub const PAUSE_ICON: Color32 = Color32::from_rgb(221, 170, 85);
}
