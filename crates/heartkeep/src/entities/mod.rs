//! Concrete entity kinds and the tagged [`Entity`] that the world stores.

pub mod heart;
pub mod player;

use crate::api::config::WorldConfig;
use crate::api::types::{EntityId, EntityKind, WorldEvent};
use crate::components::body::Body;
use crate::core::room::Room;
use crate::renderer::instance::RenderBuffer;

use heart::Heart;
use player::Player;

/// Any simulated object: position, velocity and per-tick update/draw/collide.
#[derive(Debug, Clone)]
pub enum Entity {
    Player(Player),
    Heart(Heart),
}

impl Entity {
    pub fn id(&self) -> EntityId {
        match self {
            Entity::Player(p) => p.id,
            Entity::Heart(h) => h.id,
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Player(_) => EntityKind::Player,
            Entity::Heart(_) => EntityKind::Heart,
        }
    }

    pub fn body(&self) -> &Body {
        match self {
            Entity::Player(p) => &p.body,
            Entity::Heart(h) => &h.body,
        }
    }

    pub fn body_mut(&mut self) -> &mut Body {
        match self {
            Entity::Player(p) => &mut p.body,
            Entity::Heart(h) => &mut h.body,
        }
    }

    /// The entity carrying this one, if any.
    pub fn held_by(&self) -> Option<EntityId> {
        match self {
            Entity::Player(_) => None,
            Entity::Heart(h) => h.is_held_by,
        }
    }

    /// The entity this one is carrying, if any.
    pub fn holding(&self) -> Option<EntityId> {
        match self {
            Entity::Player(p) => p.held,
            Entity::Heart(_) => None,
        }
    }

    pub fn update(&mut self, room: &dyn Room, cfg: &WorldConfig) {
        match self {
            Entity::Player(p) => p.update(room, cfg),
            Entity::Heart(h) => h.update(room, cfg),
        }
    }

    pub fn draw(&mut self, ctx: &mut RenderBuffer) {
        match self {
            Entity::Player(p) => p.draw(ctx),
            Entity::Heart(h) => h.draw(ctx),
        }
    }

    /// React to touching `other`. Only this side's reaction runs.
    pub fn collide(&mut self, other: &mut Entity) -> Option<WorldEvent> {
        match self {
            Entity::Player(p) => p.collide(other),
            Entity::Heart(h) => h.collide(other),
        }
    }

    pub fn as_player(&self) -> Option<&Player> {
        match self {
            Entity::Player(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_player_mut(&mut self) -> Option<&mut Player> {
        match self {
            Entity::Player(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_heart(&self) -> Option<&Heart> {
        match self {
            Entity::Heart(h) => Some(h),
            _ => None,
        }
    }

    pub fn as_heart_mut(&mut self) -> Option<&mut Heart> {
        match self {
            Entity::Heart(h) => Some(h),
            _ => None,
        }
    }
}

impl From<Player> for Entity {
    fn from(player: Player) -> Self {
        Entity::Player(player)
    }
}

impl From<Heart> for Entity {
    fn from(heart: Heart) -> Self {
        Entity::Heart(heart)
    }
}
