//! Phosphor icon definitions for the UI.
//!
//! Icons are initialized via `setup_fonts` when the app starts.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// System to initialize Phosphor icon fonts.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

// Re-export commonly used icons with semantic names for our app.

/// Play icon (resume simulation)
pub const PLAY: &str = egui_phosphor::regular::PLAY;
/// Pause icon
pub const PAUSE: &str = egui_phosphor::regular::PAUSE;
/// Reset view icon (circular arrow)
pub const RESET: &str = egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE;
/// Close/X icon
pub const CLOSE: &str = egui_phosphor::regular::X;
/// Acknowledge/check icon
pub const ACK: &str = egui_phosphor::regular::CHECK;
/// Dismiss/trash icon
pub const DISMISS: &str = egui_phosphor::regular::TRASH;
/// Alert bell icon
pub const ALERTS: &str = egui_phosphor::regular::BELL;
/// Maneuver/rocket icon
pub const MANEUVER: &str = egui_phosphor::regular::ROCKET;
/// Telemetry chart icon
pub const TELEMETRY: &str = egui_phosphor::regular::CHART_LINE;
/// Target crosshair icon
pub const TARGET: &str = egui_phosphor::regular::CROSSHAIR;
