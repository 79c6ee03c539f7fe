//! Object picking for the orbital view.
//!
//! Casts a ray from the camera through the pointer position and selects
//! the nearest intersected body. Hidden categories are not pickable.
//! The selection feeds the detail inspector, which re-reads the live
//! body each frame.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::camera::MainCamera;
use crate::render::VisibilityFlags;
use crate::types::{BodyKind, OrbitingBody};

/// Pointer travel (pixels) below which a press-release counts as a
/// click rather than a camera drag.
const CLICK_SLOP: f32 = 4.0;

/// Minimum pick radius so small debris stays clickable.
const MIN_PICK_RADIUS: f32 = 0.3;

/// Resource tracking the currently selected body.
#[derive(Resource, Default)]
pub struct SelectedBody {
    pub entity: Option<Entity>,
}

/// Resource tracking an in-flight click.
#[derive(Resource, Default)]
pub struct PickState {
    press_position: Option<Vec2>,
}

/// Plugin providing click-to-select picking.
pub struct PickingPlugin;

impl Plugin for PickingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectedBody>()
            .init_resource::<PickState>()
            .add_systems(Update, pick_on_click);
    }
}

/// Distance along a ray to the surface of a sphere, if the ray hits it.
///
/// Returns the nearest non-negative intersection parameter. `dir` must
/// be normalized.
pub fn ray_sphere_intersection(
    origin: Vec3,
    dir: Vec3,
    center: Vec3,
    radius: f32,
) -> Option<f32> {
    let to_center = center - origin;
    let proj = to_center.dot(dir);
    let closest_sq = to_center.length_squared() - proj * proj;
    let radius_sq = radius * radius;
    if closest_sq > radius_sq {
        return None;
    }
    let half_chord = (radius_sq - closest_sq).sqrt();
    let near = proj - half_chord;
    if near >= 0.0 {
        Some(near)
    } else {
        let far = proj + half_chord;
        // Origin inside the sphere still counts as a hit.
        (far >= 0.0).then_some(far)
    }
}

/// Index and hit distance of the nearest sphere intersected by the ray.
pub fn pick_nearest(origin: Vec3, dir: Vec3, targets: &[(Vec3, f32)]) -> Option<(usize, f32)> {
    targets
        .iter()
        .enumerate()
        .filter_map(|(idx, &(center, radius))| {
            ray_sphere_intersection(origin, dir, center, radius).map(|t| (idx, t))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

/// Generous hit radius for a body, scaled to its rendered size.
fn pick_radius(body: &OrbitingBody) -> f32 {
    match body.kind {
        // Satellite bus is a 0.3x0.3x0.6 box with panels either side.
        BodyKind::Satellite { .. } => 0.8,
        BodyKind::Debris { size, .. } => ((size as f32) * 1.5).max(MIN_PICK_RADIUS),
    }
}

/// Select the body under the pointer on click; clear on empty space.
fn pick_on_click(
    mouse: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    bodies: Query<(Entity, &OrbitingBody, &Transform)>,
    visibility: Res<VisibilityFlags>,
    mut pick_state: ResMut<PickState>,
    mut selected: ResMut<SelectedBody>,
    mut contexts: EguiContexts,
) {
    if let Ok(ctx) = contexts.ctx_mut() {
        if ctx.wants_pointer_input() {
            pick_state.press_position = None;
            return;
        }
    }

    let Ok(window) = window_query.single() else {
        return;
    };
    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };

    if mouse.just_pressed(MouseButton::Left) {
        pick_state.press_position = Some(cursor_pos);
    }

    if !mouse.just_released(MouseButton::Left) {
        return;
    }
    let Some(press_pos) = pick_state.press_position.take() else {
        return;
    };
    if (cursor_pos - press_pos).length() > CLICK_SLOP {
        // It was a camera drag, not a click.
        return;
    }

    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    // Fails while the surface has no size; skip rather than divide by zero.
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor_pos) else {
        return;
    };

    let candidates: Vec<(Entity, Vec3, f32)> = bodies
        .iter()
        .filter(|(_, body, _)| match body.kind {
            BodyKind::Satellite { .. } => visibility.satellites,
            BodyKind::Debris { .. } => visibility.debris,
        })
        .map(|(entity, body, transform)| (entity, transform.translation, pick_radius(body)))
        .collect();

    let spheres: Vec<(Vec3, f32)> = candidates.iter().map(|&(_, c, r)| (c, r)).collect();
    selected.entity =
        pick_nearest(ray.origin, *ray.direction, &spheres).map(|(idx, _)| candidates[idx].0);
}
