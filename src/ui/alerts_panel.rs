//! Alert feed window.
//!
//! Filtered list of recent alerts with acknowledge, dismiss, and
//! clear-all operator commands.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::sim::{Alert, AlertFeed, AlertKind, Severity};
use crate::types::{current_unix_seconds, format_clock};
use crate::ui::{colors, icons};

/// Operator identity stamped onto acknowledgments.
const OPERATOR: &str = "FLIGHT";

/// Window open/closed state.
#[derive(Resource)]
pub struct AlertPanelState {
    pub open: bool,
}

impl Default for AlertPanelState {
    fn default() -> Self {
        Self { open: true }
    }
}

fn severity_color(severity: Severity) -> egui::Color32 {
    match severity {
        Severity::Info => colors::ACCENT,
        Severity::Warning => colors::WARNING,
        Severity::Critical => colors::DANGER,
    }
}

/// Deferred operator commands collected while rendering the list.
#[derive(Default)]
struct PendingOps {
    acknowledge: Vec<u64>,
    dismiss: Vec<u64>,
    clear_all: bool,
}

/// System that renders the alert feed window.
pub fn alerts_panel_system(
    mut contexts: EguiContexts,
    mut state: ResMut<AlertPanelState>,
    mut feed: ResMut<AlertFeed>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut open = state.open;
    let mut ops = PendingOps::default();

    egui::Window::new(format!("{} ALERT FEED", icons::ALERTS))
        .id(egui::Id::new("alert_feed"))
        .open(&mut open)
        .default_pos(egui::pos2(16.0, 16.0))
        .default_width(320.0)
        .frame(
            egui::Frame::window(&ctx.style())
                .fill(colors::PANEL_BG)
                .stroke(egui::Stroke::new(1.0, colors::BORDER)),
        )
        .show(ctx, |ui| {
            render_header(ui, &mut feed, &mut ops);
            ui.separator();

            let snapshot: Vec<Alert> = feed.filtered().cloned().collect();
            if snapshot.is_empty() {
                ui.label(
                    egui::RichText::new("NO ACTIVE ALERTS")
                        .monospace()
                        .color(colors::DIM),
                );
            }

            egui::ScrollArea::vertical().max_height(300.0).show(ui, |ui| {
                for alert in &snapshot {
                    render_alert_row(ui, alert, &mut ops);
                }
            });
        });

    state.open = open;

    let now = current_unix_seconds();
    for id in ops.acknowledge {
        feed.acknowledge(id, OPERATOR, "Acknowledged from console", now);
    }
    for id in ops.dismiss {
        feed.dismiss(id);
    }
    if ops.clear_all {
        feed.clear_all();
    }
}

/// Kind filter, generator toggle, and the clear-all command.
fn render_header(ui: &mut egui::Ui, feed: &mut AlertFeed, ops: &mut PendingOps) {
    ui.horizontal(|ui| {
        let mut filter = feed.filter();
        egui::ComboBox::from_id_salt("alert_filter")
            .width(110.0)
            .selected_text(filter.map_or("ALL", |k| k.label()))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut filter, None, "ALL");
                for kind in AlertKind::ALL {
                    ui.selectable_value(&mut filter, Some(kind), kind.label());
                }
            });
        if filter != feed.filter() {
            feed.set_filter(filter);
        }

        let (label, color) = if feed.is_running() {
            ("LIVE", colors::SUCCESS)
        } else {
            ("HOLD", colors::WARNING)
        };
        if ui
            .add(egui::Button::new(
                egui::RichText::new(label).size(11.0).color(color),
            ))
            .on_hover_text("Toggle the alert generator")
            .clicked()
        {
            if feed.is_running() {
                feed.stop();
            } else {
                feed.start();
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button(egui::RichText::new("CLEAR ALL").size(11.0).color(colors::DIM))
                .clicked()
            {
                ops.clear_all = true;
            }
        });
    });
}

fn render_alert_row(ui: &mut egui::Ui, alert: &Alert, ops: &mut PendingOps) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(alert.severity.label())
                .monospace()
                .size(10.0)
                .color(severity_color(alert.severity)),
        );
        ui.label(
            egui::RichText::new(format_clock(alert.timestamp))
                .monospace()
                .size(10.0)
                .color(colors::DIM),
        );
        ui.label(
            egui::RichText::new(alert.kind.label())
                .size(10.0)
                .color(colors::DIM),
        );
    });
    ui.label(
        egui::RichText::new(&alert.message)
            .size(12.0)
            .color(colors::TEXT),
    );
    ui.horizontal(|ui| {
        match &alert.acknowledgment {
            Some(ack) => {
                ui.label(
                    egui::RichText::new(format!(
                        "{} ack by {} at {}",
                        icons::ACK,
                        ack.acknowledged_by,
                        format_clock(ack.acknowledged_at)
                    ))
                    .size(10.0)
                    .color(colors::SUCCESS),
                );
            }
            None => {
                if ui
                    .button(egui::RichText::new(format!("{} ACK", icons::ACK)).size(10.0))
                    .clicked()
                {
                    ops.acknowledge.push(alert.id);
                }
            }
        }
        if ui
            .button(egui::RichText::new(icons::DISMISS).size(10.0))
            .on_hover_text("Dismiss alert")
            .clicked()
        {
            ops.dismiss.push(alert.id);
        }
    });
    ui.separator();
}
