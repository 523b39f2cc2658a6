use glam::Vec2;

use crate::api::config::{HeartConfig, WorldConfig};
use crate::api::error::{EngineError, Result};
use crate::api::types::{EntityId, RoomId, WorldEvent};
use crate::assets::library::{sheets, AnimationLibrary};
use crate::components::animation::AnimationState;
use crate::components::body::Body;
use crate::core::room::Room;
use crate::entities::Entity;
use crate::renderer::instance::RenderBuffer;

/// A heart pickup. Players carry it by touching it.
#[derive(Debug, Clone)]
pub struct Heart {
    pub id: EntityId,
    pub body: Body,
    /// The player carrying this heart right now.
    pub is_held_by: Option<EntityId>,
    /// The most recent carrier. Kept after release.
    pub last_held_by: Option<EntityId>,
    /// Ticks left before the heart can be picked up again.
    pub released_timer: u32,
    pub anim: AnimationState,
}

impl Heart {
    pub fn new(
        id: EntityId,
        room: RoomId,
        pos: Vec2,
        cfg: &HeartConfig,
        lib: &AnimationLibrary,
    ) -> Result<Self> {
        if !pos.is_finite() {
            return Err(EngineError::InvalidPosition { x: pos.x, y: pos.y });
        }
        Ok(Self {
            id,
            body: Body::new(room, pos, cfg.size),
            is_held_by: None,
            last_held_by: None,
            released_timer: 0,
            anim: lib.instantiate(sheets::HEART)?,
        })
    }

    pub fn update(&mut self, room: &dyn Room, cfg: &WorldConfig) {
        // Held hearts follow their carrier instead of falling.
        if self.is_held_by.is_none() {
            self.body.integrate(cfg.gravity);
        }

        self.body.landed = false;
        room.collide(&mut self.body);

        if self.body.landed {
            self.land(&cfg.heart);
        }

        self.released_timer = self.released_timer.saturating_sub(1);
        self.body.landed_entity = false;
    }

    pub fn land(&mut self, cfg: &HeartConfig) {
        self.body.vel.x *= cfg.friction;
    }

    pub fn draw(&mut self, ctx: &mut RenderBuffer) {
        self.anim.draw(ctx, self.body.pos, self.body.size, false);
        self.anim.tick();
    }

    /// A free-handed player touching a loose heart picks it up.
    pub fn collide(&mut self, other: &mut Entity) -> Option<WorldEvent> {
        let Entity::Player(player) = other else {
            return None;
        };
        if player.held.is_some() || self.is_held_by.is_some() || self.released_timer > 0 {
            return None;
        }

        player.held = Some(self.id);
        self.is_held_by = Some(player.id);
        self.last_held_by = Some(player.id);
        log::info!("player {:?} picked up heart {:?}", player.id, self.id);
        Some(WorldEvent::PickedUp {
            player: player.id,
            heart: self.id,
        })
    }

    /// Let go of the heart. It keeps `vel` and cannot be re-taken for a while.
    pub fn release(&mut self, vel: Vec2, cfg: &HeartConfig) {
        self.is_held_by = None;
        self.released_timer = cfg.released_timer;
        self.body.vel = vel;
    }
}
