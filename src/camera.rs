//! Camera system for the orbital view.
//!
//! Two modes: auto-rotate (default) revolves the camera around the scene
//! origin at constant rate; manual mode, entered on any pointer drag,
//! rotates the camera with the mouse and zooms with the wheel. A reset
//! command restores the default pose and returns to auto mode.

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
};
use bevy_egui::EguiContexts;

use crate::types::SimulationState;

/// Closest the camera may get to the origin (prevents clipping through
/// the central body).
pub const MIN_DISTANCE: f32 = 10.0;

/// Furthest the camera may drift from the origin.
pub const MAX_DISTANCE: f32 = 40.0;

/// Default camera position, looking at the origin.
pub const DEFAULT_POSITION: Vec3 = Vec3::new(15.0, 15.0, 15.0);

/// Radius of the auto-rotate circle in the XZ plane.
pub const AUTO_ORBIT_RADIUS: f32 = 20.0;

/// Auto-rotate rate in radians per second (0.002 rad per frame at 60 Hz).
pub const AUTO_ROTATE_RATE: f32 = 0.12;

/// Drag sensitivity in radians per pixel of pointer motion.
pub const DRAG_SENSITIVITY: f32 = 0.005;

/// Scene units travelled along the view direction per scroll line.
pub const ZOOM_SPEED: f32 = 1.0;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Camera control mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CameraMode {
    /// Revolve around the origin at constant angular rate.
    #[default]
    Auto,
    /// Pointer-driven rotation; auto-advance frozen.
    Manual,
}

/// Resource tracking camera interaction state.
#[derive(Resource)]
pub struct CameraRig {
    pub mode: CameraMode,
    /// Phase of the auto-rotate circle, radians.
    pub auto_angle: f32,
    /// Whether a pointer drag is in progress.
    pub dragging: bool,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            mode: CameraMode::Auto,
            auto_angle: DEFAULT_POSITION.z.atan2(DEFAULT_POSITION.x),
            dragging: false,
        }
    }
}

impl CameraRig {
    /// Switch between auto-orbit and manual control.
    pub fn set_mode(&mut self, mode: CameraMode) {
        self.mode = mode;
    }
}

/// Plugin providing camera spawning and interaction.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraRig>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, (camera_drag, camera_zoom, camera_auto_rotate));
    }
}

/// The default camera pose.
pub fn default_camera_transform() -> Transform {
    Transform::from_translation(DEFAULT_POSITION).looking_at(Vec3::ZERO, Vec3::Y)
}

/// Restore the default pose and return to auto mode.
pub fn reset_view(rig: &mut CameraRig, transform: &mut Transform) {
    *rig = CameraRig::default();
    *transform = default_camera_transform();
}

/// Clamp a camera position to the allowed distance band from the origin.
pub fn clamp_distance(pos: Vec3) -> Vec3 {
    let dist = pos.length();
    if !dist.is_finite() || dist < f32::EPSILON {
        return DEFAULT_POSITION;
    }
    pos / dist * dist.clamp(MIN_DISTANCE, MAX_DISTANCE)
}

/// Rotate a camera position around the origin from a pointer drag delta.
///
/// Horizontal motion yaws around +Y; vertical motion tilts around the
/// camera's right axis. Pure axis-angle rotation of the position vector,
/// so the distance from the origin is preserved.
pub fn rotate_around_origin(pos: Vec3, delta: Vec2) -> Vec3 {
    let yawed = Quat::from_axis_angle(Vec3::Y, delta.x * DRAG_SENSITIVITY) * pos;

    let view_dir = (-yawed).normalize_or_zero();
    let right = view_dir.cross(Vec3::Y);
    if right.length_squared() < f32::EPSILON {
        // Looking straight down the Y axis; skip the tilt this frame.
        return yawed;
    }
    Quat::from_axis_angle(right.normalize(), delta.y * DRAG_SENSITIVITY) * yawed
}

/// Move a camera position along its view direction by `scroll` lines,
/// clamped to the allowed distance band. Positive scroll zooms in.
pub fn zoom_along_view(pos: Vec3, scroll: f32) -> Vec3 {
    let view_dir = (-pos).normalize_or_zero();
    clamp_distance(pos + view_dir * (scroll * ZOOM_SPEED))
}

/// Spawn the main camera at the default pose.
fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        default_camera_transform(),
        MainCamera,
        AmbientLight {
            color: Color::WHITE,
            brightness: 400.0,
            ..default()
        },
    ));
}

/// Advance the auto-rotate circle while in auto mode.
///
/// Paused simulations freeze the camera too, so resuming continues from
/// the frozen pose without a jump.
pub fn camera_auto_rotate(
    state: Res<SimulationState>,
    time: Res<Time>,
    mut rig: ResMut<CameraRig>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    if state.paused || rig.mode != CameraMode::Auto {
        return;
    }

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    rig.auto_angle =
        (rig.auto_angle + AUTO_ROTATE_RATE * time.delta_secs()).rem_euclid(std::f32::consts::TAU);
    let y = transform.translation.y;
    transform.translation = Vec3::new(
        rig.auto_angle.cos() * AUTO_ORBIT_RADIUS,
        y,
        rig.auto_angle.sin() * AUTO_ORBIT_RADIUS,
    );
    transform.look_at(Vec3::ZERO, Vec3::Y);
}

/// Handle pointer drags: any drag start forces manual mode.
fn camera_drag(
    mouse: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mut rig: ResMut<CameraRig>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
    mut contexts: EguiContexts,
) {
    // Only check egui when NOT already dragging; once a drag is active,
    // passing over a panel must not interrupt it.
    if !rig.dragging {
        if let Ok(ctx) = contexts.ctx_mut() {
            if ctx.wants_pointer_input() {
                return;
            }
        }
    }

    if mouse.just_pressed(MouseButton::Left) {
        rig.set_mode(CameraMode::Manual);
        rig.dragging = true;
    }

    if mouse.pressed(MouseButton::Left) && rig.dragging && mouse_motion.delta != Vec2::ZERO {
        let Ok(mut transform) = camera_query.single_mut() else {
            return;
        };
        transform.translation = rotate_around_origin(transform.translation, mouse_motion.delta);
        transform.look_at(Vec3::ZERO, Vec3::Y);
    }

    if mouse.just_released(MouseButton::Left) {
        rig.dragging = false;
    }
}

/// Handle mouse wheel zoom along the view direction.
fn camera_zoom(
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
    mut contexts: EguiContexts,
) {
    if mouse_scroll.delta.y == 0.0 {
        return;
    }

    if let Ok(ctx) = contexts.ctx_mut() {
        if ctx.wants_pointer_input() {
            return;
        }
    }

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    transform.translation = zoom_along_view(transform.translation, mouse_scroll.delta.y);
    transform.look_at(Vec3::ZERO, Vec3::Y);
}
