use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::error::{EngineError, Result};

/// Tunables for the player character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Bounding box size in world units.
    pub size: Vec2,
    /// Horizontal speed added per move action.
    pub accel: f32,
    /// Below this horizontal speed the player is snapped to a standstill.
    pub min_speed: f32,
    /// Horizontal speed cap for move actions.
    pub walk_speed: f32,
    pub max_health: u32,
    /// Horizontal velocity multiplier applied on every landed tick.
    pub friction: f32,
    /// Invulnerability ticks after taking damage.
    pub hurt_cooldown: u32,
    /// Vertical velocity set by a jump (negative is up).
    pub jump_velocity: f32,
    /// Knockback impulse; x is applied away from the facing direction.
    pub knockback: Vec2,
    /// Ticks the landing pose is held after touching down from a jump.
    pub land_hold_ticks: u32,
    /// Length of an attack in ticks.
    pub attack_ticks: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            size: Vec2::new(20.0, 20.0),
            accel: 2.0,
            min_speed: 0.2,
            walk_speed: 2.0,
            max_health: 100,
            friction: 0.7,
            hurt_cooldown: 25,
            jump_velocity: -15.0,
            knockback: Vec2::new(4.0, -4.0),
            land_hold_ticks: 5,
            attack_ticks: 20,
        }
    }
}

/// Tunables for the heart pickup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeartConfig {
    pub size: Vec2,
    pub friction: f32,
    /// Ticks after a release during which the heart cannot be picked up.
    pub released_timer: u32,
}

impl Default for HeartConfig {
    fn default() -> Self {
        Self {
            size: Vec2::new(16.0, 16.0),
            friction: 0.8,
            released_timer: 200,
        }
    }
}

/// Immutable world configuration, passed into every physics step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Added to vertical velocity every tick for any unsupported entity.
    /// Positive is down.
    pub gravity: f32,
    pub player: PlayerConfig,
    pub heart: HeartConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: 0.8,
            player: PlayerConfig::default(),
            heart: HeartConfig::default(),
        }
    }
}

impl WorldConfig {
    /// Parse a config from JSON. Missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<()> {
        if !self.gravity.is_finite() {
            return Err(invalid("gravity must be finite"));
        }
        check_size("player.size", self.player.size)?;
        check_size("heart.size", self.heart.size)?;
        check_friction("player.friction", self.player.friction)?;
        check_friction("heart.friction", self.heart.friction)?;
        if self.player.max_health == 0 {
            return Err(invalid("player.max_health must be at least 1"));
        }
        if !(self.player.walk_speed > 0.0 && self.player.walk_speed.is_finite()) {
            return Err(invalid("player.walk_speed must be positive"));
        }
        if !(self.player.accel > 0.0 && self.player.accel.is_finite()) {
            return Err(invalid("player.accel must be positive"));
        }
        if !self.player.jump_velocity.is_finite() || !self.player.knockback.is_finite() {
            return Err(invalid("player impulses must be finite"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> EngineError {
    EngineError::InvalidConfig(msg.to_string())
}

fn check_size(name: &str, size: Vec2) -> Result<()> {
    if size.x > 0.0 && size.y > 0.0 && size.is_finite() {
        Ok(())
    } else {
        Err(EngineError::InvalidConfig(format!("{name} must be positive, got {size}")))
    }
}

fn check_friction(name: &str, friction: f32) -> Result<()> {
    if (0.0..=1.0).contains(&friction) {
        Ok(())
    } else {
        Err(EngineError::InvalidConfig(format!("{name} must be within 0..=1, got {friction}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_stock_tunables() {
        let cfg = WorldConfig::default();
        assert_eq!(cfg.player.walk_speed, 2.0);
        assert_eq!(cfg.player.max_health, 100);
        assert_eq!(cfg.player.hurt_cooldown, 25);
        assert_eq!(cfg.heart.released_timer, 200);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let cfg = WorldConfig::from_json(r#"{ "gravity": 0.5, "heart": { "friction": 0.5 } }"#).unwrap();
        assert_eq!(cfg.gravity, 0.5);
        assert_eq!(cfg.heart.friction, 0.5);
        assert_eq!(cfg.heart.released_timer, 200);
        assert_eq!(cfg.player, PlayerConfig::default());
    }

    #[test]
    fn rejects_out_of_range_friction() {
        let err = WorldConfig::from_json(r#"{ "player": { "friction": 1.5 } }"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_zero_health_and_bad_sizes() {
        let mut cfg = WorldConfig::default();
        cfg.player.max_health = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = WorldConfig::default();
        cfg.heart.size = Vec2::new(0.0, 16.0);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            WorldConfig::from_json("{ gravity: }"),
            Err(EngineError::Json(_))
        ));
    }
}
