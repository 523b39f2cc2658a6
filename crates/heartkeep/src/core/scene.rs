use crate::api::types::{EntityId, EntityKind};
use crate::entities::heart::Heart;
use crate::entities::player::Player;
use crate::entities::Entity;

/// Simple entity storage using a flat Vec.
/// Entities stay in spawn order, which is also id order.
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(64),
        }
    }

    /// Add an entity to the scene.
    pub fn spawn(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Remove an entity by ID. Returns the removed entity if found.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let idx = self.index_of(id)?;
        Some(self.entities.remove(idx))
    }

    /// Get a reference to an entity by ID.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id() == id)
    }

    /// Get a mutable reference to an entity by ID.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id() == id)
    }

    pub fn player(&self, id: EntityId) -> Option<&Player> {
        self.get(id).and_then(Entity::as_player)
    }

    pub fn player_mut(&mut self, id: EntityId) -> Option<&mut Player> {
        self.get_mut(id).and_then(Entity::as_player_mut)
    }

    pub fn heart(&self, id: EntityId) -> Option<&Heart> {
        self.get(id).and_then(Entity::as_heart)
    }

    pub fn heart_mut(&mut self, id: EntityId) -> Option<&mut Heart> {
        self.get_mut(id).and_then(Entity::as_heart_mut)
    }

    /// Mutable access to two distinct entities at once.
    pub fn pair_mut(&mut self, a: EntityId, b: EntityId) -> Option<(&mut Entity, &mut Entity)> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        if ia == ib {
            return None;
        }
        if ia < ib {
            let (lo, hi) = self.entities.split_at_mut(ib);
            Some((&mut lo[ia], &mut hi[0]))
        } else {
            let (lo, hi) = self.entities.split_at_mut(ia);
            Some((&mut hi[0], &mut lo[ib]))
        }
    }

    /// Iterate over all entities.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Iterate over all entities mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// All entities of one kind.
    pub fn of_kind(&self, kind: EntityKind) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(move |e| e.kind() == kind)
    }

    /// Number of entities in the scene.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    fn index_of(&self, id: EntityId) -> Option<usize> {
        self.entities.iter().position(|e| e.id() == id)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
