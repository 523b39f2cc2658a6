use crate::entities::Entity;
use crate::renderer::instance::RenderBuffer;

/// Run the draw pass: every entity draws itself and advances its own
/// animation cursor. The buffer is cleared first.
pub fn draw_entities<'a>(entities: impl Iterator<Item = &'a mut Entity>, buffer: &mut RenderBuffer) {
    buffer.clear();
    for entity in entities {
        entity.draw(buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::WorldConfig;
    use crate::api::types::{EntityId, RoomId};
    use crate::assets::library::AnimationLibrary;
    use crate::entities::heart::Heart;
    use crate::entities::player::Player;
    use glam::Vec2;

    fn entities() -> Vec<Entity> {
        let cfg = WorldConfig::default();
        let lib = AnimationLibrary::builtin();
        vec![
            Player::new(EntityId(1), RoomId(0), Vec2::new(10.0, 20.0), &cfg.player, &lib).unwrap().into(),
            Heart::new(EntityId(2), RoomId(0), Vec2::new(30.0, 40.0), &cfg.heart, &lib).unwrap().into(),
        ]
    }

    #[test]
    fn one_instance_per_entity_in_order() {
        let mut entities = entities();
        let mut buffer = RenderBuffer::new();
        draw_entities(entities.iter_mut(), &mut buffer);

        assert_eq!(buffer.instance_count(), 2);
        assert_eq!((buffer.instances[0].x, buffer.instances[0].y), (10.0, 20.0));
        assert_eq!(buffer.instances[1].width, 16.0);
    }

    #[test]
    fn buffer_is_cleared_between_passes() {
        let mut entities = entities();
        let mut buffer = RenderBuffer::new();
        draw_entities(entities.iter_mut(), &mut buffer);
        draw_entities(entities.iter_mut(), &mut buffer);
        assert_eq!(buffer.instance_count(), 2);
    }
}
