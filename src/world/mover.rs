//! Constant leftward scrolling and left-boundary cleanup.

use super::types::{Entity, World};

/// Scroll every entity left by `speed * dt` and despawn those past
/// `left_bound`. Returns the despawned entities. No pooling; a removed
/// entity is simply gone.
pub fn scroll(world: &mut World, speed: f64, dt: f64, left_bound: f64) -> Vec<Entity> {
    for entity in world.entities_mut() {
        entity.x -= speed * dt;
    }

    let mut despawned = Vec::new();
    world.retain(|e| {
        if e.x < left_bound {
            despawned.push(e.clone());
            false
        } else {
            true
        }
    });
    despawned
}
