//! Entity-vs-entity collision pass.
//!
//! Pairs are visited in a fixed order (kind priority, then creation order) so
//! that contested pickups always resolve the same way.

use crate::api::types::{EntityId, WorldEvent};
use crate::core::scene::Scene;
use crate::entities::Entity;

/// How far above the lower body's top the upper body may have started and
/// still count as landing on it.
const CONTACT_SLOP: f32 = 0.01;

/// Entity ids in dispatch order.
pub fn dispatch_order(scene: &Scene) -> Vec<EntityId> {
    let mut order: Vec<(u8, EntityId)> = scene
        .iter()
        .map(|e| (e.kind().priority(), e.id()))
        .collect();
    order.sort_unstable();
    order.into_iter().map(|(_, id)| id).collect()
}

/// Visit every overlapping pair once: resolve resting contact, then run both
/// sides' `collide` reactions. Returns the events the reactions produced.
pub fn dispatch_collisions(scene: &mut Scene) -> Vec<WorldEvent> {
    let order = dispatch_order(scene);
    let mut events = Vec::new();

    for (i, &a_id) in order.iter().enumerate() {
        for &b_id in &order[i + 1..] {
            let Some((a, b)) = scene.pair_mut(a_id, b_id) else {
                continue;
            };
            if !a.body().overlaps(b.body()) {
                continue;
            }
            log::trace!("contact {:?} <-> {:?}", a_id, b_id);

            if !linked(a, b) {
                rest_on_top(a, b);
            }
            events.extend(a.collide(b));
            events.extend(b.collide(a));
        }
    }

    events
}

/// One carries the other.
fn linked(a: &Entity, b: &Entity) -> bool {
    a.held_by() == Some(b.id()) || b.held_by() == Some(a.id())
}

/// If one body came down onto the other from above, stand it on top.
fn rest_on_top(a: &mut Entity, b: &mut Entity) {
    if a.held_by().is_some() || b.held_by().is_some() {
        return;
    }
    let (upper, lower) = if a.body().center().y <= b.body().center().y {
        (a, b)
    } else {
        (b, a)
    };

    let lower_top = lower.body().top();
    let upper = upper.body_mut();
    let prev_bottom = upper.bottom() - upper.vel.y;
    if upper.vel.y >= 0.0 && prev_bottom <= lower_top + CONTACT_SLOP {
        upper.pos.y = lower_top - upper.size.y;
        upper.vel.y = 0.0;
        upper.landed_entity = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::WorldConfig;
    use crate::api::types::RoomId;
    use crate::assets::library::AnimationLibrary;
    use crate::entities::heart::Heart;
    use crate::entities::player::Player;
    use glam::Vec2;

    fn player(id: u32, pos: Vec2) -> Entity {
        let cfg = WorldConfig::default();
        Player::new(EntityId(id), RoomId(0), pos, &cfg.player, &AnimationLibrary::builtin())
            .unwrap()
            .into()
    }

    fn heart(id: u32, pos: Vec2) -> Entity {
        let cfg = WorldConfig::default();
        Heart::new(EntityId(id), RoomId(0), pos, &cfg.heart, &AnimationLibrary::builtin())
            .unwrap()
            .into()
    }

    #[test]
    fn players_come_first_then_creation_order() {
        let mut scene = Scene::new();
        scene.spawn(heart(1, Vec2::ZERO));
        scene.spawn(player(3, Vec2::ZERO));
        scene.spawn(player(2, Vec2::ZERO));
        assert_eq!(
            dispatch_order(&scene),
            vec![EntityId(2), EntityId(3), EntityId(1)]
        );
    }

    #[test]
    fn touching_a_heart_picks_it_up() {
        let mut scene = Scene::new();
        scene.spawn(player(1, Vec2::new(100.0, 100.0)));
        scene.spawn(heart(2, Vec2::new(110.0, 104.0)));

        let events = dispatch_collisions(&mut scene);
        assert_eq!(
            events,
            vec![WorldEvent::PickedUp { player: EntityId(1), heart: EntityId(2) }]
        );
        assert_eq!(scene.player(EntityId(1)).unwrap().held, Some(EntityId(2)));
        assert_eq!(scene.heart(EntityId(2)).unwrap().is_held_by, Some(EntityId(1)));
    }

    #[test]
    fn contested_heart_goes_to_earliest_player() {
        let mut scene = Scene::new();
        scene.spawn(heart(1, Vec2::new(100.0, 100.0)));
        scene.spawn(player(2, Vec2::new(95.0, 100.0)));
        scene.spawn(player(3, Vec2::new(105.0, 100.0)));

        dispatch_collisions(&mut scene);
        assert_eq!(scene.heart(EntityId(1)).unwrap().is_held_by, Some(EntityId(2)));
        assert!(scene.player(EntityId(3)).unwrap().held.is_none());

        // Later ticks do not change hands either.
        dispatch_collisions(&mut scene);
        assert_eq!(scene.heart(EntityId(1)).unwrap().is_held_by, Some(EntityId(2)));
        assert!(scene.player(EntityId(3)).unwrap().held.is_none());
    }

    #[test]
    fn falling_onto_an_entity_rests_on_top() {
        let mut scene = Scene::new();
        scene.spawn(player(1, Vec2::new(100.0, 100.0)));
        let mut upper = player(2, Vec2::new(102.0, 83.0));
        upper.body_mut().vel.y = 4.0;
        scene.spawn(upper);

        dispatch_collisions(&mut scene);
        let upper = scene.player(EntityId(2)).unwrap();
        assert_eq!(upper.body.bottom(), 100.0);
        assert_eq!(upper.body.vel.y, 0.0);
        assert!(upper.body.landed_entity);
        assert!(!scene.player(EntityId(1)).unwrap().body.landed_entity);
    }

    #[test]
    fn side_by_side_overlap_is_not_a_landing() {
        let mut scene = Scene::new();
        scene.spawn(player(1, Vec2::new(100.0, 100.0)));
        scene.spawn(player(2, Vec2::new(110.0, 100.0)));
        dispatch_collisions(&mut scene);
        assert!(!scene.player(EntityId(1)).unwrap().body.landed_entity);
        assert!(!scene.player(EntityId(2)).unwrap().body.landed_entity);
        assert_eq!(scene.player(EntityId(2)).unwrap().body.pos.y, 100.0);
    }

    #[test]
    fn apart_entities_do_nothing() {
        let mut scene = Scene::new();
        scene.spawn(player(1, Vec2::new(0.0, 0.0)));
        scene.spawn(heart(2, Vec2::new(200.0, 0.0)));
        assert!(dispatch_collisions(&mut scene).is_empty());
        assert!(scene.heart(EntityId(2)).unwrap().is_held_by.is_none());
    }
}
