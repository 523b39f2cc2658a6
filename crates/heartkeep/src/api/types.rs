/// Unique identifier for an entity in the world.
/// Ids are handed out in creation order, so they double as a stable sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub u32);

/// Identifies the room an entity lives in. Index into the world's room list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(pub u32);

/// Concrete entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Heart,
}

impl EntityKind {
    /// Dispatch priority used by the collision pass. Lower goes first.
    pub fn priority(self) -> u8 {
        match self {
            EntityKind::Player => 0,
            EntityKind::Heart => 1,
        }
    }
}

/// Result of `Player::hurt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HurtOutcome {
    /// Dead or still invulnerable. Nothing changed.
    Ignored,
    /// Damage applied, knockback applied, still alive.
    Hurt,
    /// Damage applied and health reached zero.
    Died,
}

/// Something that happened during a frame, collected by the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldEvent {
    PickedUp { player: EntityId, heart: EntityId },
    Released { player: EntityId, heart: EntityId },
    Hurt { player: EntityId, health: u32 },
    Died { player: EntityId },
}
