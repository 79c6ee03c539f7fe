//! Inspector card for the selected body.
//!
//! A floating card anchored near the selected object's screen position.
//! The card re-reads the live body every frame, so its orbital phase and
//! position keep updating while the card is open.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::camera::MainCamera;
use crate::picking::SelectedBody;
use crate::types::{BodyKind, OrbitingBody, SatelliteStatus, ThreatLevel};
use crate::ui::{colors, icons};

const CARD_WIDTH: f32 = 220.0;
const CARD_MARGIN: f32 = 20.0;

fn status_badge(status: SatelliteStatus) -> (&'static str, egui::Color32) {
    match status {
        SatelliteStatus::Active => ("ACTIVE", colors::ACCENT),
        SatelliteStatus::Coordinating => ("COORDINATING", egui::Color32::from_rgb(99, 102, 241)),
        SatelliteStatus::Tracking => ("TRACKING", colors::SUCCESS),
    }
}

fn threat_badge(threat: ThreatLevel) -> (&'static str, egui::Color32) {
    match threat {
        ThreatLevel::Low => ("LOW THREAT", colors::SUCCESS),
        ThreatLevel::Medium => ("MEDIUM THREAT", colors::WARNING),
        ThreatLevel::High => ("HIGH THREAT", colors::DANGER),
    }
}

/// System to render the inspector card near the selected body.
pub fn inspector_system(
    mut contexts: EguiContexts,
    mut selected: ResMut<SelectedBody>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    bodies: Query<(&OrbitingBody, &Transform)>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let Some(entity) = selected.entity else {
        return;
    };

    // Selection can outlive the entity; drop it quietly.
    let Ok((body, transform)) = bodies.get(entity) else {
        selected.entity = None;
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Ok(screen_pos) = camera.world_to_viewport(camera_transform, transform.translation) else {
        return;
    };

    let anchor = card_position(ctx, screen_pos);
    let mut close = false;

    egui::Area::new(egui::Id::new("inspector_card"))
        .fixed_pos(anchor)
        .show(ctx, |ui| {
            egui::Frame::none()
                .fill(colors::PANEL_BG)
                .stroke(egui::Stroke::new(1.0, colors::BORDER))
                .rounding(6.0)
                .inner_margin(12.0)
                .show(ui, |ui| {
                    ui.set_width(CARD_WIDTH);

                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(format!("{} {}", icons::TARGET, body.id))
                                .monospace()
                                .size(15.0)
                                .color(colors::TEXT),
                        );
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui
                                    .button(egui::RichText::new(icons::CLOSE).size(13.0))
                                    .clicked()
                                {
                                    close = true;
                                }
                            },
                        );
                    });

                    let (badge, badge_color) = match body.kind {
                        BodyKind::Satellite { status } => status_badge(status),
                        BodyKind::Debris { threat, .. } => threat_badge(threat),
                    };
                    ui.label(
                        egui::RichText::new(format!("{} | {}", body.kind.label(), badge))
                            .size(11.0)
                            .color(badge_color),
                    );

                    ui.separator();

                    field(ui, "Orbit radius", format!("{:.1}", body.radius));
                    field(ui, "Phase", format!("{:.1}°", body.angle.to_degrees()));
                    field(ui, "Angular rate", format!("{:.4} rad/tick", body.angular_speed));

                    if let BodyKind::Debris { size, .. } = body.kind {
                        field(ui, "Size", format!("{size:.2}"));
                    }

                    let pos = transform.translation;
                    field(
                        ui,
                        "Position",
                        format!("({:.1}, {:.1}, {:.1})", pos.x, pos.y, pos.z),
                    );
                });
        });

    if close {
        selected.entity = None;
    }
}

fn field(ui: &mut egui::Ui, label: &str, value: String) {
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

/// Place the card beside the body, keeping it on screen.
fn card_position(ctx: &egui::Context, screen_pos: Vec2) -> egui::Pos2 {
    let screen_rect = ctx.screen_rect();
    let space_right = screen_rect.right() - screen_pos.x;

    let offset_x = if space_right > CARD_WIDTH + CARD_MARGIN * 2.0 {
        CARD_MARGIN
    } else {
        -(CARD_WIDTH + CARD_MARGIN)
    };

    let x = screen_pos.x + offset_x;
    let min_y = screen_rect.top() + CARD_MARGIN;
    let max_y = (screen_rect.bottom() - 240.0).max(min_y);
    egui::pos2(x, (screen_pos.y - 60.0).clamp(min_y, max_y))
}
