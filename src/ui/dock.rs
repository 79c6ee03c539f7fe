//! Unified dock (bottom bar) for primary mission controls.
//!
//! The dock provides a single horizontal strip with:
//! - Play/Pause toggle for the simulation
//! - Mission clock
//! - Layer visibility toggles (satellites, debris, orbit rings)
//! - Reset view button
//! - System status readout on the right

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::camera::{CameraRig, MainCamera, reset_view};
use crate::render::VisibilityFlags;
use crate::sim::{SystemMetrics, SystemStatus};
use crate::types::{SimulationState, current_unix_seconds, format_clock};
use crate::ui::{colors, icons};

const DOCK_HEIGHT: f32 = 56.0;

/// System that renders the unified dock at the bottom.
#[allow(clippy::too_many_arguments)]
pub fn dock_system(
    mut contexts: EguiContexts,
    mut sim_state: ResMut<SimulationState>,
    mut flags: ResMut<VisibilityFlags>,
    metrics: Res<SystemMetrics>,
    mut rig: ResMut<CameraRig>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::TopBottomPanel::bottom("dock")
        .exact_height(DOCK_HEIGHT)
        .frame(
            egui::Frame::none()
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::symmetric(20, 10)),
        )
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.spacing_mut().item_spacing.x = 16.0;

                render_play_pause(ui, &mut sim_state);

                ui.separator();

                render_clock(ui);

                ui.separator();

                render_layer_toggles(ui, &mut flags);

                ui.separator();

                render_reset_view(ui, &mut rig, &mut camera_query);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.spacing_mut().item_spacing.x = 12.0;
                    render_status_strip(ui, &metrics);
                });
            });
        });
}

/// Render the play/pause toggle button.
fn render_play_pause(ui: &mut egui::Ui, sim_state: &mut SimulationState) {
    let (icon, color, tooltip) = if sim_state.paused {
        (icons::PLAY, colors::PLAY_ICON, "Resume simulation")
    } else {
        (icons::PAUSE, colors::PAUSE_ICON, "Pause simulation")
    };

    let button = egui::Button::new(egui::RichText::new(icon).size(22.0).color(color))
        .min_size(egui::vec2(40.0, 36.0));

    if ui.add(button).on_hover_text(tooltip).clicked() {
        if sim_state.paused {
            sim_state.resume();
        } else {
            sim_state.pause();
        }
    }
}

/// Render the mission clock.
fn render_clock(ui: &mut egui::Ui) {
    let clock = format_clock(current_unix_seconds());
    ui.label(
        egui::RichText::new(clock)
            .monospace()
            .size(14.0)
            .color(colors::TEXT),
    );
}

/// Render the layer visibility toggles.
fn render_layer_toggles(ui: &mut egui::Ui, flags: &mut VisibilityFlags) {
    layer_toggle(ui, &mut flags.satellites, "SATS", "Show satellites");
    layer_toggle(ui, &mut flags.debris, "DEBRIS", "Show debris");
    layer_toggle(ui, &mut flags.orbits, "ORBITS", "Show orbit rings");
}

fn layer_toggle(ui: &mut egui::Ui, value: &mut bool, label: &str, tooltip: &str) {
    let color = if *value { colors::ACCENT } else { colors::DIM };
    let text = egui::RichText::new(label).size(12.0).color(color);
    if ui
        .add(egui::Button::new(text).min_size(egui::vec2(56.0, 28.0)))
        .on_hover_text(tooltip)
        .clicked()
    {
        *value = !*value;
    }
}

/// Render the reset-view button.
fn render_reset_view(
    ui: &mut egui::Ui,
    rig: &mut CameraRig,
    camera_query: &mut Query<&mut Transform, With<MainCamera>>,
) {
    let button = egui::Button::new(
        egui::RichText::new(format!("{} RESET VIEW", icons::RESET))
            .size(13.0)
            .color(colors::TEXT),
    )
    .min_size(egui::vec2(100.0, 28.0));

    if ui
        .add(button)
        .on_hover_text("Return camera to the default auto-orbit")
        .clicked()
    {
        if let Ok(mut transform) = camera_query.single_mut() {
            reset_view(rig, &mut transform);
        }
    }
}

/// Render the system status readout on the right side of the dock.
fn render_status_strip(ui: &mut egui::Ui, metrics: &SystemMetrics) {
    let (status_label, status_color) = match metrics.system_status() {
        SystemStatus::Operational => ("OPERATIONAL", colors::SUCCESS),
        SystemStatus::Warning => ("ELEVATED", colors::WARNING),
        SystemStatus::Critical => ("CRITICAL", colors::DANGER),
    };

    ui.label(
        egui::RichText::new(status_label)
            .monospace()
            .size(12.0)
            .color(status_color),
    );

    ui.separator();

    metric_readout(ui, "CPU", format!("{:.0}%", metrics.cpu_usage));
    metric_readout(ui, "MEM", format!("{:.0}%", metrics.memory_usage));
    metric_readout(ui, "LAT", format!("{:.0}ms", metrics.network_latency));
    metric_readout(ui, "TRACKED", format!("{}", metrics.debris_tracked));
}

fn metric_readout(ui: &mut egui::Ui, label: &str, value: String) {
    ui.label(
        egui::RichText::new(format!("{label} {value}"))
            .monospace()
            .size(12.0)
            .color(colors::DIM),
    );
}
