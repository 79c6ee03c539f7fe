//! Camera rig behavior over simulated interaction sessions.

use approx::assert_relative_eq;
use bevy::prelude::*;

use orbitwatch::camera::{
    CameraRig, DEFAULT_POSITION, MAX_DISTANCE, MIN_DISTANCE, default_camera_transform, reset_view,
    rotate_around_origin, zoom_along_view,
};

/// A session interleaving drags and zooms must keep the camera inside
/// the distance band the whole way through.
#[test]
fn test_interleaved_drag_zoom_session_stays_in_band() {
    let mut pos = DEFAULT_POSITION;
    let session: [(Vec2, f32); 6] = [
        (Vec2::new(40.0, -10.0), 6.0),
        (Vec2::new(-120.0, 30.0), -18.0),
        (Vec2::new(0.0, 90.0), 3.0),
        (Vec2::new(15.0, -200.0), 45.0),
        (Vec2::new(-5.0, 5.0), -45.0),
        (Vec2::new(300.0, 0.0), 10.0),
    ];

    for &(drag, scroll) in &session {
        pos = rotate_around_origin(pos, drag);
        pos = zoom_along_view(pos, scroll);
        let dist = pos.length();
        assert!(
            (MIN_DISTANCE - 1e-3..=MAX_DISTANCE + 1e-3).contains(&dist),
            "distance {dist} escaped mid-session"
        );
        assert!(dist.is_finite());
    }
}

#[test]
fn test_session_then_reset_restores_defaults() {
    let mut rig = CameraRig::default();
    let mut transform = default_camera_transform();

    rig.dragging = true;
    transform.translation = rotate_around_origin(transform.translation, Vec2::new(50.0, -20.0));
    transform.translation = zoom_along_view(transform.translation, 8.0);
    transform.look_at(Vec3::ZERO, Vec3::Y);

    reset_view(&mut rig, &mut transform);

    assert!(!rig.dragging);
    assert_relative_eq!(
        transform.translation.distance(DEFAULT_POSITION),
        0.0,
        epsilon = 1e-6
    );
    let expected = default_camera_transform();
    assert_relative_eq!(
        transform.rotation.angle_between(expected.rotation),
        0.0,
        epsilon = 1e-5
    );
}
