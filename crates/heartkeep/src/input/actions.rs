use crate::api::types::EntityId;

/// Actions the input layer can issue to a player.
/// Key bindings live outside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    JumpPress,
    JumpRelease,
    /// Hold block for the next tick.
    Block,
    Attack,
    /// Drop the carried heart.
    Release,
}

/// A queue of player actions.
/// The input layer pushes between ticks; the world drains it before updating.
pub struct ActionQueue {
    events: Vec<(EntityId, Action)>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    /// Queue an action for a player.
    pub fn push(&mut self, player: EntityId, action: Action) {
        self.events.push((player, action));
    }

    /// Drain all pending actions in push order.
    pub fn drain(&mut self) -> Vec<(EntityId, Action)> {
        std::mem::take(&mut self.events)
    }

    /// Check if there are pending actions.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending actions.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}
