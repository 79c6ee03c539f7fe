//! Scene spawning and per-frame visual sync for the fleet.

use bevy::prelude::*;

use crate::fleet;
use crate::render::VisibilityFlags;
use crate::sim::motion::orbital_position;
use crate::types::{
    ATMOSPHERE_RADIUS, BodyKind, EARTH_RADIUS, EARTH_SPIN_RATE, OrbitingBody, SatelliteStatus,
    SimulationState, ThreatLevel, TICK_RATE,
};

/// Marker component for the central body.
#[derive(Component)]
pub struct Earth;

/// Cosmetic self-rotation rates in radians per tick.
#[derive(Component)]
pub struct MeshSpin {
    pub x: f64,
    pub y: f64,
}

/// Status color for satellite rendering and UI badges.
pub fn status_color(status: SatelliteStatus) -> Color {
    match status {
        SatelliteStatus::Active => Color::srgb(0.357, 0.725, 1.0),
        SatelliteStatus::Coordinating => Color::srgb(0.388, 0.4, 0.945),
        SatelliteStatus::Tracking => Color::srgb(0.133, 0.773, 0.369),
    }
}

/// Threat color for debris rendering and UI badges.
pub fn threat_color(threat: ThreatLevel) -> Color {
    match threat {
        ThreatLevel::Low => Color::srgb(0.133, 0.773, 0.369),
        ThreatLevel::Medium => Color::srgb(0.918, 0.702, 0.031),
        ThreatLevel::High => Color::srgb(0.937, 0.267, 0.267),
    }
}

/// Spawn lights, the central body, and the seed fleet.
pub fn spawn_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Lighting (ambient light lives on the camera; see camera::setup_camera)
    commands.spawn((
        PointLight {
            intensity: 2_000_000.0,
            range: 100.0,
            ..default()
        },
        Transform::from_xyz(20.0, 20.0, 20.0),
    ));

    // Earth
    let earth_color = Color::srgb(0.255, 0.412, 0.882);
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(EARTH_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: earth_color,
            emissive: Color::srgb(0.047, 0.176, 0.369).to_linear(),
            ..default()
        })),
        Transform::default(),
        Earth,
        MeshSpin {
            x: 0.0,
            y: EARTH_SPIN_RATE,
        },
    ));

    // Atmosphere glow shell
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(ATMOSPHERE_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgba(0.357, 0.725, 1.0, 0.2),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        })),
        Transform::default(),
        MeshSpin {
            x: 0.0,
            y: EARTH_SPIN_RATE,
        },
    ));

    // Fleet
    let panel_mesh = meshes.add(Cuboid::new(0.8, 0.05, 0.4));
    let panel_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.118, 0.161, 0.231),
        emissive: Color::srgb(0.2, 0.255, 0.333).to_linear(),
        ..default()
    });
    let bus_mesh = meshes.add(Cuboid::new(0.3, 0.3, 0.6));

    for body in fleet::fleet() {
        let position = orbital_position(body.angle, body.radius);
        match body.kind {
            BodyKind::Satellite { status } => {
                let color = status_color(status);
                let entity = commands
                    .spawn((
                        Mesh3d(bus_mesh.clone()),
                        MeshMaterial3d(materials.add(StandardMaterial {
                            base_color: color,
                            emissive: color.to_linear() * 0.5,
                            ..default()
                        })),
                        Transform::from_translation(position),
                        MeshSpin { x: 0.0, y: 0.02 },
                        body,
                    ))
                    .id();

                // Solar panels either side of the bus.
                for x in [0.5, -0.5] {
                    let panel = commands
                        .spawn((
                            Mesh3d(panel_mesh.clone()),
                            MeshMaterial3d(panel_material.clone()),
                            Transform::from_xyz(x, 0.0, 0.0),
                        ))
                        .id();
                    commands.entity(entity).add_child(panel);
                }
            }
            BodyKind::Debris { size, threat } => {
                let color = threat_color(threat);
                let emissive_intensity = if threat == ThreatLevel::High { 0.6 } else { 0.3 };
                commands.spawn((
                    Mesh3d(meshes.add(Sphere::new(size as f32))),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: color,
                        emissive: color.to_linear() * emissive_intensity,
                        ..default()
                    })),
                    Transform::from_translation(position),
                    MeshSpin { x: 0.01, y: 0.01 },
                    body,
                ));
            }
        }
    }

    info!("Spawned central body and {} fleet objects", fleet::fleet().len());
}

/// Recompute each body's scene position from its orbital phase.
pub fn sync_body_positions(mut bodies: Query<(&OrbitingBody, &mut Transform)>) {
    for (body, mut transform) in bodies.iter_mut() {
        transform.translation = orbital_position(body.angle, body.radius);
    }
}

/// Apply cosmetic self-rotation, frozen while paused.
pub fn spin_meshes(
    state: Res<SimulationState>,
    time: Res<Time>,
    mut meshes: Query<(&MeshSpin, &mut Transform)>,
) {
    if state.paused {
        return;
    }
    let dt_ticks = time.delta_secs_f64() * TICK_RATE;
    for (spin, mut transform) in meshes.iter_mut() {
        transform.rotate_x((spin.x * dt_ticks) as f32);
        transform.rotate_y((spin.y * dt_ticks) as f32);
    }
}

/// Suppress rendering of hidden categories without despawning them.
pub fn apply_visibility(
    flags: Res<VisibilityFlags>,
    mut bodies: Query<(&OrbitingBody, &mut Visibility)>,
) {
    if !flags.is_changed() {
        return;
    }
    for (body, mut visibility) in bodies.iter_mut() {
        let shown = match body.kind {
            BodyKind::Satellite { .. } => flags.satellites,
            BodyKind::Debris { .. } => flags.debris,
        };
        *visibility = if shown {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}
