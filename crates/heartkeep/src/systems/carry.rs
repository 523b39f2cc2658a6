//! Carry pass: places held entities on top of their carriers.

use glam::Vec2;

use crate::api::config::HeartConfig;
use crate::api::types::EntityId;
use crate::core::scene::Scene;

/// Snap every held entity onto its carrier's head and match its velocity.
///
/// A holder that no longer exists drops what it held, as if released.
pub fn carry_held(scene: &mut Scene, cfg: &HeartConfig) {
    let links: Vec<(EntityId, EntityId)> = scene
        .iter()
        .filter_map(|e| e.held_by().map(|holder| (e.id(), holder)))
        .collect();

    for (held, holder) in links {
        let Some(carrier) = scene.get(holder).map(|e| e.body().clone()) else {
            log::warn!("{:?} held by missing {:?}; dropping", held, holder);
            if let Some(heart) = scene.heart_mut(held) {
                let vel = heart.body.vel;
                heart.release(vel, cfg);
            }
            continue;
        };
        if let Some(entity) = scene.get_mut(held) {
            let body = entity.body_mut();
            body.pos = Vec2::new(
                carrier.center().x - body.size.x / 2.0,
                carrier.top() - body.size.y,
            );
            body.vel = carrier.vel;
        }
    }
}
