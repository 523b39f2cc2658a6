use glam::Vec2;

use crate::api::config::WorldConfig;
use crate::api::error::{EngineError, Result};
use crate::api::types::{EntityId, HurtOutcome, RoomId, WorldEvent};
use crate::assets::library::AnimationLibrary;
use crate::core::room::Room;
use crate::core::scene::Scene;
use crate::entities::heart::Heart;
use crate::entities::player::Player;
use crate::entities::Entity;
use crate::input::actions::{Action, ActionQueue};
use crate::renderer::instance::RenderBuffer;
use crate::systems::carry::carry_held;
use crate::systems::collision::dispatch_collisions;
use crate::systems::render::draw_entities;

/// Owns rooms, entities and assets, and runs the per-frame passes.
///
/// The host calls [`World::apply`] with the frame's input, [`World::tick`]
/// once per simulation step and [`World::draw`] once per render frame.
pub struct World {
    pub scene: Scene,
    /// Events since the last [`World::clear_frame_data`].
    pub events: Vec<WorldEvent>,
    config: WorldConfig,
    library: AnimationLibrary,
    rooms: Vec<Box<dyn Room>>,
    next_id: u32,
}

impl World {
    pub fn new(config: WorldConfig, library: AnimationLibrary) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            scene: Scene::new(),
            events: Vec::new(),
            config,
            library,
            rooms: Vec::new(),
            next_id: 1,
        })
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Register a room. Entities reference it through the returned id.
    pub fn add_room(&mut self, room: impl Room + 'static) -> RoomId {
        self.rooms.push(Box::new(room));
        RoomId(self.rooms.len() as u32 - 1)
    }

    pub fn room(&self, id: RoomId) -> Option<&dyn Room> {
        self.rooms.get(id.0 as usize).map(|r| r.as_ref())
    }

    /// Generate the next unique entity ID.
    fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    fn check_room(&self, room: RoomId) -> Result<()> {
        self.room(room).map(|_| ()).ok_or(EngineError::UnknownRoom(room))
    }

    pub fn spawn_player(&mut self, room: RoomId, pos: Vec2) -> Result<EntityId> {
        self.check_room(room)?;
        let id = self.next_id();
        let player = Player::new(id, room, pos, &self.config.player, &self.library)?;
        self.scene.spawn(player.into());
        log::debug!("spawned player {:?} in {:?} at {}", id, room, pos);
        Ok(id)
    }

    pub fn spawn_heart(&mut self, room: RoomId, pos: Vec2) -> Result<EntityId> {
        self.check_room(room)?;
        let id = self.next_id();
        let heart = Heart::new(id, room, pos, &self.config.heart, &self.library)?;
        self.scene.spawn(heart.into());
        log::debug!("spawned heart {:?} in {:?} at {}", id, room, pos);
        Ok(id)
    }

    /// Remove an entity, unlinking any carry relation it was part of.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let entity = self.scene.despawn(id)?;
        if let Some(heart) = entity.holding() {
            if let Some(heart) = self.scene.heart_mut(heart) {
                let vel = heart.body.vel;
                heart.release(vel, &self.config.heart);
            }
        }
        if let Some(holder) = entity.held_by() {
            if let Some(player) = self.scene.player_mut(holder) {
                player.held = None;
            }
        }
        Some(entity)
    }

    pub fn player(&self, id: EntityId) -> Option<&Player> {
        self.scene.player(id)
    }

    pub fn heart(&self, id: EntityId) -> Option<&Heart> {
        self.scene.heart(id)
    }

    /// Apply every queued action, in order, and empty the queue.
    pub fn apply(&mut self, actions: &mut ActionQueue) {
        for (player, action) in actions.drain() {
            self.perform(player, action);
        }
    }

    /// Apply one action. Returns whether it had an effect.
    pub fn perform(&mut self, id: EntityId, action: Action) -> bool {
        if action == Action::Release {
            return self.release(id);
        }
        let Some(player) = self.scene.player_mut(id) else {
            log::warn!("{:?} for {:?}, which is not a player", action, id);
            return false;
        };
        let cfg = &self.config.player;
        match action {
            Action::MoveLeft => {
                player.move_left(cfg);
                true
            }
            Action::MoveRight => {
                player.move_right(cfg);
                true
            }
            Action::JumpPress => player.jump_press(cfg),
            Action::JumpRelease => player.jump_release(),
            Action::Block => {
                player.block();
                true
            }
            Action::Attack => player.attack(cfg),
            Action::Release => false,
        }
    }

    /// Damage a player. Missing players count as `Ignored`.
    pub fn hurt(&mut self, id: EntityId, amount: u32) -> HurtOutcome {
        let Some(player) = self.scene.player_mut(id) else {
            log::warn!("hurt for {:?}, which is not a player", id);
            return HurtOutcome::Ignored;
        };
        let outcome = player.hurt(amount, &self.config.player);
        match outcome {
            HurtOutcome::Hurt => self.events.push(WorldEvent::Hurt {
                player: id,
                health: player.health,
            }),
            HurtOutcome::Died => self.events.push(WorldEvent::Died { player: id }),
            HurtOutcome::Ignored => {}
        }
        outcome
    }

    /// Make a player drop its heart. Returns false if it held nothing.
    pub fn release(&mut self, id: EntityId) -> bool {
        let Some(player) = self.scene.player_mut(id) else {
            log::warn!("release for {:?}, which is not a player", id);
            return false;
        };
        let Some(heart_id) = player.held.take() else {
            return false;
        };
        let vel = player.body.vel;

        if let Some(heart) = self.scene.heart_mut(heart_id) {
            heart.release(vel, &self.config.heart);
        }
        log::info!("player {:?} released heart {:?}", id, heart_id);
        self.events.push(WorldEvent::Released {
            player: id,
            heart: heart_id,
        });
        true
    }

    /// Advance the simulation by one step.
    pub fn tick(&mut self) {
        for entity in self.scene.iter_mut() {
            let Some(room) = self.rooms.get(entity.body().room.0 as usize) else {
                continue;
            };
            entity.update(room.as_ref(), &self.config);
        }

        carry_held(&mut self.scene, &self.config.heart);

        let events = dispatch_collisions(&mut self.scene);
        self.events.extend(events);
    }

    /// Draw every entity into `ctx`, advancing their animations.
    pub fn draw(&mut self, ctx: &mut RenderBuffer) {
        draw_entities(self.scene.iter_mut(), ctx);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}
