//! Common test utilities for integration tests.

use bevy::prelude::*;
use orbitwatch::fleet;
use orbitwatch::rng::SimRng;
use orbitwatch::sim::SimPlugin;
use orbitwatch::types::OrbitingBody;

/// Headless app with the simulation plugin and a deterministic RNG.
pub fn sim_app(seed: u64) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(SimRng::seeded(seed))
        .add_plugins(SimPlugin);
    app
}

/// Spawn the seed fleet into the world and return the entity count.
pub fn spawn_fleet(app: &mut App) -> usize {
    let bodies = fleet::fleet();
    let count = bodies.len();
    for body in bodies {
        app.world_mut().spawn(body);
    }
    count
}

/// Snapshot of all orbital phases, keyed by body id.
pub fn angle_snapshot(app: &mut App) -> Vec<(String, f64)> {
    let mut snapshot: Vec<(String, f64)> = app
        .world_mut()
        .query::<&OrbitingBody>()
        .iter(app.world())
        .map(|body| (body.id.clone(), body.angle))
        .collect();
    snapshot.sort_by(|a, b| a.0.cmp(&b.0));
    snapshot
}

/// Run a frame after a short real-time delay so `Time` has a nonzero delta.
pub fn update_with_delta(app: &mut App) {
    std::thread::sleep(std::time::Duration::from_millis(5));
    app.update();
}
