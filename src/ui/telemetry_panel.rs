//! Telemetry side panel.
//!
//! Satellite selector, live channel readouts, and sparklines over the
//! rolling sample window.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::fleet::SATELLITE_IDS;
use crate::rng::SimRng;
use crate::sim::{TelemetryFeed, TelemetrySample};
use crate::types::current_unix_seconds;
use crate::ui::{colors, icons};

const PANEL_WIDTH: f32 = 250.0;
const SPARKLINE_HEIGHT: f32 = 36.0;

/// System that renders the telemetry panel on the right edge.
pub fn telemetry_panel_system(
    mut contexts: EguiContexts,
    mut feed: ResMut<TelemetryFeed>,
    mut rng: ResMut<SimRng>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::SidePanel::right("telemetry_panel")
        .exact_width(PANEL_WIDTH)
        .frame(
            egui::Frame::none()
                .fill(colors::PANEL_BG)
                .inner_margin(12.0),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("{} TELEMETRY", icons::TELEMETRY))
                        .size(14.0)
                        .color(colors::TEXT),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    render_feed_toggle(ui, &mut feed);
                });
            });

            ui.separator();

            render_satellite_selector(ui, &mut feed, &mut rng);

            ui.add_space(8.0);

            if let Some(latest) = feed.latest().cloned() {
                channel_row(ui, "Battery", format!("{:.1}%", latest.battery));
                sparkline(ui, &series_of(&feed, |s| s.battery), colors::SUCCESS);

                channel_row(ui, "Signal", format!("{:.1}%", latest.signal_strength));
                sparkline(ui, &series_of(&feed, |s| s.signal_strength), colors::ACCENT);

                channel_row(ui, "Temperature", format!("{:.1} C", latest.temperature));
                sparkline(ui, &series_of(&feed, |s| s.temperature), colors::WARNING);

                channel_row(ui, "Velocity", format!("{:.2} km/s", latest.velocity));
                channel_row(ui, "Altitude", format!("{:.1} km", latest.altitude));
                channel_row(ui, "Thrust", format!("{:.3} N", latest.thrust));
            } else {
                ui.label(
                    egui::RichText::new("NO SAMPLES")
                        .monospace()
                        .color(colors::DIM),
                );
            }
        });
}

/// LIVE/HOLD toggle for the sampling timer.
fn render_feed_toggle(ui: &mut egui::Ui, feed: &mut TelemetryFeed) {
    let (label, color) = if feed.is_running() {
        ("LIVE", colors::SUCCESS)
    } else {
        ("HOLD", colors::WARNING)
    };
    if ui
        .add(egui::Button::new(
            egui::RichText::new(label).size(11.0).color(color),
        ))
        .on_hover_text("Toggle live sampling")
        .clicked()
    {
        if feed.is_running() {
            feed.stop();
        } else {
            feed.start();
        }
    }
}

/// Combo box over the known fleet. Switching reseeds the series.
fn render_satellite_selector(ui: &mut egui::Ui, feed: &mut TelemetryFeed, rng: &mut SimRng) {
    let mut selected = feed.satellite_id().to_string();
    egui::ComboBox::from_id_salt("telemetry_satellite")
        .width(PANEL_WIDTH - 40.0)
        .selected_text(selected.clone())
        .show_ui(ui, |ui| {
            for id in SATELLITE_IDS {
                ui.selectable_value(&mut selected, id.to_string(), id);
            }
        });

    if selected != feed.satellite_id() {
        let now = current_unix_seconds();
        if let Err(err) = feed.select_satellite(&selected, now, rng) {
            warn!("telemetry selector rejected: {err}");
        }
    }
}

fn channel_row(ui: &mut egui::Ui, label: &str, value: String) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).size(12.0).color(colors::DIM));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(value)
                    .monospace()
                    .size(12.0)
                    .color(colors::TEXT),
            );
        });
    });
}

fn series_of(feed: &TelemetryFeed, channel: impl Fn(&TelemetrySample) -> f64) -> Vec<f32> {
    feed.series().map(|s| channel(s) as f32).collect()
}

/// Minimal polyline plot of one channel, normalized to its own range.
fn sparkline(ui: &mut egui::Ui, values: &[f32], color: egui::Color32) {
    let (rect, _response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), SPARKLINE_HEIGHT),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 2.0, egui::Color32::from_rgba_premultiplied(0, 0, 0, 60));

    if values.len() < 2 {
        return;
    }

    let min = values.iter().copied().fold(f32::INFINITY, f32::min);
    let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let span = (max - min).max(1e-6);

    let points: Vec<egui::Pos2> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = rect.left()
                + rect.width() * (i as f32 / (values.len() - 1) as f32);
            let y = rect.bottom() - 4.0 - (rect.height() - 8.0) * ((v - min) / span);
            egui::pos2(x, y)
        })
        .collect();

    painter.add(egui::Shape::line(points, egui::Stroke::new(1.5, color)));
    ui.add_space(6.0);
}
