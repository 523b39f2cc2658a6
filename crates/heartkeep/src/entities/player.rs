//! The player character: kinematics, the status state machine, input
//! actions and status-driven animation.

use glam::Vec2;

use crate::api::config::{PlayerConfig, WorldConfig};
use crate::api::error::{EngineError, Result};
use crate::api::types::{EntityId, HurtOutcome, RoomId, WorldEvent};
use crate::assets::library::{sheets, AnimationLibrary};
use crate::components::animation::AnimationState;
use crate::components::body::Body;
use crate::core::room::Room;
use crate::entities::Entity;
use crate::renderer::instance::RenderBuffer;

/// Discrete behaviour/animation mode of the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerStatus {
    #[default]
    Idle,
    Jump,
    Run,
    Landing,
    Block,
    JumpAttack,
    RunAttack,
    StandAttack,
}

impl PlayerStatus {
    pub fn is_attack(self) -> bool {
        matches!(
            self,
            PlayerStatus::JumpAttack | PlayerStatus::RunAttack | PlayerStatus::StandAttack
        )
    }
}

/// One playback cursor per status, owned by this player alone.
#[derive(Debug, Clone)]
pub struct PlayerAnimations {
    pub idle: AnimationState,
    pub run: AnimationState,
    pub jump: AnimationState,
    pub block: AnimationState,
    pub death: AnimationState,
    pub run_attack: AnimationState,
    pub jump_attack: AnimationState,
    pub stand_attack: AnimationState,
}

impl PlayerAnimations {
    pub fn from_library(lib: &AnimationLibrary) -> Result<Self> {
        Ok(Self {
            idle: lib.instantiate(sheets::PLAYER_STAND)?,
            run: lib.instantiate(sheets::PLAYER_WALK)?,
            jump: lib.instantiate(sheets::PLAYER_JUMP)?,
            block: lib.instantiate(sheets::PLAYER_BLOCK)?,
            death: lib.instantiate(sheets::PLAYER_DEATH)?,
            run_attack: lib.instantiate(sheets::PLAYER_RUN_ATTACK)?,
            jump_attack: lib.instantiate(sheets::PLAYER_JUMP_ATTACK)?,
            stand_attack: lib.instantiate(sheets::PLAYER_STAND_ATTACK)?,
        })
    }

    /// The cursor drawn for `status` while alive.
    pub fn for_status_mut(&mut self, status: PlayerStatus) -> &mut AnimationState {
        match status {
            PlayerStatus::Idle => &mut self.idle,
            PlayerStatus::Run => &mut self.run,
            PlayerStatus::Jump | PlayerStatus::Landing => &mut self.jump,
            PlayerStatus::Block => &mut self.block,
            PlayerStatus::JumpAttack => &mut self.jump_attack,
            PlayerStatus::RunAttack => &mut self.run_attack,
            PlayerStatus::StandAttack => &mut self.stand_attack,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub id: EntityId,
    pub body: Body,
    pub health: u32,
    /// The heart being carried, if any.
    pub held: Option<EntityId>,
    pub facing_left: bool,
    pub status: PlayerStatus,
    /// Invulnerability countdown.
    pub hurt_timer: u32,
    /// Landing pose hold.
    pub land_timer: u32,
    pub attack_timer: u32,
    pub jumping: bool,
    /// Block input for the coming tick.
    pub blocking: bool,
    /// Block input carried over from the previous tick.
    pub blocking_entity: bool,
    // NOTE: each move action raises the flag of the opposite direction.
    pub moving_left: bool,
    pub moving_right: bool,
    pub dead: bool,
    pub anims: PlayerAnimations,
}

impl Player {
    pub fn new(
        id: EntityId,
        room: RoomId,
        pos: Vec2,
        cfg: &PlayerConfig,
        lib: &AnimationLibrary,
    ) -> Result<Self> {
        if !pos.is_finite() {
            return Err(EngineError::InvalidPosition { x: pos.x, y: pos.y });
        }
        Ok(Self {
            id,
            body: Body::new(room, pos, cfg.size),
            health: cfg.max_health,
            held: None,
            facing_left: false,
            status: PlayerStatus::Idle,
            hurt_timer: 0,
            land_timer: 0,
            attack_timer: 0,
            jumping: false,
            blocking: false,
            blocking_entity: false,
            moving_left: false,
            moving_right: false,
            dead: false,
            anims: PlayerAnimations::from_library(lib)?,
        })
    }

    fn set_status(&mut self, status: PlayerStatus) {
        if self.status != status {
            log::debug!("player {:?}: {:?} -> {:?}", self.id, self.status, status);
            self.status = status;
        }
    }

    // -- Actions --

    pub fn move_left(&mut self, cfg: &PlayerConfig) {
        self.body.vel.x = (self.body.vel.x - cfg.accel).max(-cfg.walk_speed);
        self.moving_right = true;
        self.facing_left = true;
    }

    pub fn move_right(&mut self, cfg: &PlayerConfig) {
        self.body.vel.x = (self.body.vel.x + cfg.accel).min(cfg.walk_speed);
        self.moving_left = true;
        self.facing_left = false;
    }

    /// Launch a jump. Only works from the ground; returns whether it did.
    pub fn jump_press(&mut self, cfg: &PlayerConfig) -> bool {
        if !self.body.landed {
            return false;
        }
        self.set_status(PlayerStatus::Jump);
        self.body.vel.y = cfg.jump_velocity;
        self.body.landed = false;
        self.jumping = true;
        self.anims.jump.reset();
        true
    }

    /// Cut a rising jump short.
    pub fn jump_release(&mut self) -> bool {
        if self.jumping && !self.body.landed && self.body.vel.y < 0.0 {
            self.body.vel.y /= 2.0;
            return true;
        }
        false
    }

    /// Hold block for the coming tick.
    pub fn block(&mut self) {
        self.blocking = true;
    }

    /// Start an attack fitting the current movement.
    pub fn attack(&mut self, cfg: &PlayerConfig) -> bool {
        if self.dead || self.attack_timer > 0 || self.blocking || self.blocking_entity {
            return false;
        }
        let status = if !self.body.landed {
            PlayerStatus::JumpAttack
        } else if self.body.vel.x != 0.0 {
            PlayerStatus::RunAttack
        } else {
            PlayerStatus::StandAttack
        };
        self.attack_timer = cfg.attack_ticks;
        self.set_status(status);
        self.anims.for_status_mut(status).reset();
        true
    }

    pub fn hurt(&mut self, amount: u32, cfg: &PlayerConfig) -> HurtOutcome {
        if self.dead || self.hurt_timer > 0 {
            return HurtOutcome::Ignored;
        }
        self.hurt_timer = cfg.hurt_cooldown;
        self.health = self.health.saturating_sub(amount);
        if self.health == 0 {
            self.dead = true;
            log::info!("player {:?} died", self.id);
            return HurtOutcome::Died;
        }

        // Knocked away from where we are facing.
        self.body.vel.x = if self.facing_left { cfg.knockback.x } else { -cfg.knockback.x };
        self.body.vel.y = cfg.knockback.y;
        HurtOutcome::Hurt
    }

    // -- Per-tick --

    pub fn update(&mut self, room: &dyn Room, cfg: &WorldConfig) {
        self.body.integrate(cfg.gravity);

        self.body.landed = false;
        room.collide(&mut self.body);

        if self.body.landed {
            self.land(&cfg.player);
        }
        if self.body.vel.x.abs() < cfg.player.min_speed {
            self.body.vel.x = 0.0;
        }

        self.hurt_timer = self.hurt_timer.saturating_sub(1);
        self.attack_timer = self.attack_timer.saturating_sub(1);

        // Unsupported and not mid-air already: we're falling.
        if !self.body.landed
            && !self.body.landed_entity
            && !matches!(self.status, PlayerStatus::Jump | PlayerStatus::JumpAttack)
            && !self.blocking
        {
            self.set_status(PlayerStatus::Jump);
            self.anims.jump.reset();
        }

        self.body.landed_entity = false;
        self.blocking_entity = self.blocking;
        self.blocking = false;
        self.moving_left = false;
        self.moving_right = false;
    }

    /// Friction and ground status transitions. Runs on landed ticks only.
    pub fn land(&mut self, cfg: &PlayerConfig) {
        self.body.vel.x *= cfg.friction;
        self.jumping = false;

        let touched_down = self.status == PlayerStatus::Jump;
        if touched_down {
            self.set_status(PlayerStatus::Landing);
            self.land_timer = cfg.land_hold_ticks;
        }

        if self.blocking || self.blocking_entity {
            self.set_status(PlayerStatus::Block);
            return;
        }
        if self.attack_timer > 0 {
            if self.status == PlayerStatus::JumpAttack {
                self.attack_timer = 0;
            }
            return;
        }
        if self.hold_landing(touched_down) {
            return;
        }

        if self.body.vel.x == 0.0 {
            self.set_status(PlayerStatus::Idle);
        } else if self.status != PlayerStatus::Run {
            self.set_status(PlayerStatus::Run);
            self.anims.run.reset();
        }
    }

    /// Counts the landing hold down. The touchdown tick keeps the full hold;
    /// the tick that reaches zero releases it.
    fn hold_landing(&mut self, touched_down: bool) -> bool {
        if self.land_timer == 0 {
            return false;
        }
        if !touched_down {
            self.land_timer -= 1;
        }
        self.land_timer > 0
    }

    pub fn draw(&mut self, ctx: &mut RenderBuffer) {
        let (pos, size, flip) = (self.body.pos, self.body.size, self.facing_left);

        if self.dead {
            self.anims.death.draw(ctx, pos, size, flip);
            self.anims.death.tick();
            return;
        }

        match self.status {
            PlayerStatus::Jump => {
                let jump = &mut self.anims.jump;
                jump.draw(ctx, pos, size, flip);
                // Freeze on the penultimate frame until something else happens.
                if jump.frame + 2 < jump.length() {
                    jump.tick();
                }
            }
            PlayerStatus::Landing => {
                let jump = &mut self.anims.jump;
                jump.draw(ctx, pos, size, flip);
                jump.timer = jump.speed();
                jump.tick();
            }
            PlayerStatus::Idle | PlayerStatus::Block => {
                self.anims.for_status_mut(self.status).draw(ctx, pos, size, flip);
            }
            PlayerStatus::Run
            | PlayerStatus::RunAttack
            | PlayerStatus::JumpAttack
            | PlayerStatus::StandAttack => {
                let anim = self.anims.for_status_mut(self.status);
                anim.draw(ctx, pos, size, flip);
                anim.tick();
            }
        }
    }

    /// Being collided into has no effect on a player; other kinds react instead.
    pub fn collide(&mut self, _other: &mut Entity) -> Option<WorldEvent> {
        None
    }
}
