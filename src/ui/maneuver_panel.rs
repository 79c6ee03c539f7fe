//! Maneuver planning window.
//!
//! Burn parameter sliders, live outcome estimates, and the execute and
//! simulate commands. Executing a plan also drops a confirmation entry
//! into the alert feed.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::fleet;
use crate::sim::maneuver::{
    BURN_ANGLE_MAX, BURN_ANGLE_MIN, DURATION_MAX, DURATION_MIN, THRUST_MAX, THRUST_MIN,
};
use crate::sim::{AlertFeed, AlertKind, ManeuverKind, ManeuverPlanner, Severity};
use crate::types::format_clock;
use crate::ui::{colors, icons};

/// Window open/closed state.
#[derive(Resource)]
pub struct ManeuverPanelState {
    pub open: bool,
}

impl Default for ManeuverPanelState {
    fn default() -> Self {
        Self { open: true }
    }
}

/// System that renders the maneuver planning window.
pub fn maneuver_panel_system(
    mut contexts: EguiContexts,
    mut state: ResMut<ManeuverPanelState>,
    mut planner: ResMut<ManeuverPlanner>,
    mut alerts: ResMut<AlertFeed>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut open = state.open;

    egui::Window::new(format!("{} MANEUVER PLANNING", icons::MANEUVER))
        .id(egui::Id::new("maneuver_planning"))
        .open(&mut open)
        .default_pos(egui::pos2(16.0, 420.0))
        .default_width(300.0)
        .frame(
            egui::Frame::window(&ctx.style())
                .fill(colors::PANEL_BG)
                .stroke(egui::Stroke::new(1.0, colors::BORDER)),
        )
        .show(ctx, |ui| {
            render_target_selector(ui, &mut planner);
            render_kind_tabs(ui, &mut planner);

            ui.add_space(6.0);

            render_sliders(ui, &mut planner);

            ui.separator();

            render_estimates(ui, &planner);

            ui.separator();

            render_commands(ui, &mut planner, &mut alerts);

            if let Some(ack) = &planner.last_ack {
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(format!(
                        "{} {}",
                        format_clock(ack.timestamp),
                        ack.message
                    ))
                    .monospace()
                    .size(10.0)
                    .color(colors::SUCCESS),
                );
            }
        });

    state.open = open;
}

fn render_target_selector(ui: &mut egui::Ui, planner: &mut ManeuverPlanner) {
    let mut target = planner.target_id().to_string();
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Target").size(12.0).color(colors::DIM));
        egui::ComboBox::from_id_salt("maneuver_target")
            .width(120.0)
            .selected_text(target.clone())
            .show_ui(ui, |ui| {
                for body in fleet::debris() {
                    ui.selectable_value(&mut target, body.id.clone(), &body.id);
                }
            });
    });
    if target != planner.target_id() {
        planner.set_target(&target);
    }
}

fn render_kind_tabs(ui: &mut egui::Ui, planner: &mut ManeuverPlanner) {
    let mut kind = planner.kind();
    ui.horizontal(|ui| {
        for option in [ManeuverKind::Nudge, ManeuverKind::Avoidance] {
            ui.selectable_value(&mut kind, option, option.label());
        }
    });
    if kind != planner.kind() {
        planner.set_kind(kind);
    }
}

fn render_sliders(ui: &mut egui::Ui, planner: &mut ManeuverPlanner) {
    let mut thrust = planner.thrust();
    if ui
        .add(
            egui::Slider::new(&mut thrust, THRUST_MIN..=THRUST_MAX)
                .text("Thrust (N)")
                .step_by(0.001),
        )
        .changed()
    {
        planner.set_thrust(thrust);
    }

    let mut duration = planner.duration_secs();
    if ui
        .add(
            egui::Slider::new(&mut duration, DURATION_MIN..=DURATION_MAX)
                .text("Duration (s)")
                .step_by(1.0),
        )
        .changed()
    {
        planner.set_duration(duration);
    }

    let mut burn_angle = planner.burn_angle_deg();
    if ui
        .add(
            egui::Slider::new(&mut burn_angle, BURN_ANGLE_MIN..=BURN_ANGLE_MAX)
                .text("Burn angle")
                .suffix("°"),
        )
        .changed()
    {
        planner.set_burn_angle(burn_angle);
    }
}

fn render_estimates(ui: &mut egui::Ui, planner: &ManeuverPlanner) {
    let estimate = planner.estimate();

    estimate_row(ui, "Delta-v", format!("{:.4} m/s", estimate.delta_v), colors::TEXT);
    estimate_row(ui, "Fuel cost", format!("{:.5} kg", estimate.fuel_cost), colors::TEXT);

    let p = estimate.success_probability;
    let (confidence, color) = if p >= 0.8 {
        ("HIGH", colors::SUCCESS)
    } else if p >= 0.6 {
        ("MEDIUM", colors::WARNING)
    } else {
        ("LOW", colors::DANGER)
    };
    estimate_row(
        ui,
        "Success",
        format!("{:.0}% ({confidence})", p * 100.0),
        color,
    );
}

fn estimate_row(ui: &mut egui::Ui, label: &str, value: String, color: egui::Color32) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).size(12.0).color(colors::DIM));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(value).monospace().size(12.0).color(color));
        });
    });
}

fn render_commands(ui: &mut egui::Ui, planner: &mut ManeuverPlanner, alerts: &mut AlertFeed) {
    ui.horizontal(|ui| {
        let execute = egui::Button::new(
            egui::RichText::new("EXECUTE").size(12.0).color(colors::SUCCESS),
        )
        .min_size(egui::vec2(90.0, 28.0));
        if ui.add(execute).clicked() {
            let ack = planner.execute();
            alerts.push(AlertKind::Maneuver, Severity::Info, &ack.message, ack.timestamp);
        }

        let simulate = egui::Button::new(
            egui::RichText::new("SIMULATE").size(12.0).color(colors::ACCENT),
        )
        .min_size(egui::vec2(90.0, 28.0));
        if ui.add(simulate).clicked() {
            planner.simulate();
        }
    });
}
