use glam::Vec2;

use crate::api::types::RoomId;

/// Kinematic body shared by every entity kind.
/// `pos` is the top-left corner; y grows downward.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Position in world space.
    pub pos: Vec2,
    /// Velocity in world units per tick.
    pub vel: Vec2,
    /// Bounding box size.
    pub size: Vec2,
    /// The room this body lives in (non-owning).
    pub room: RoomId,
    /// Touching solid room geometry this tick. Written by the room resolver.
    pub landed: bool,
    /// Resting on another entity. One-tick pulse written by the collision pass.
    pub landed_entity: bool,
}

impl Body {
    pub fn new(room: RoomId, pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            room,
            landed: false,
            landed_entity: false,
        }
    }

    // -- Builder pattern --

    pub fn with_vel(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    /// Apply gravity then integrate position.
    pub fn integrate(&mut self, gravity: f32) {
        self.vel.y += gravity;
        self.pos += self.vel;
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Strict AABB overlap: bodies that only touch edges do not overlap.
    pub fn overlaps(&self, other: &Body) -> bool {
        self.room == other.room
            && self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_at(x: f32, y: f32) -> Body {
        Body::new(RoomId(0), Vec2::new(x, y), Vec2::new(10.0, 10.0))
    }

    #[test]
    fn integrate_adds_gravity_before_moving() {
        let mut b = body_at(0.0, 0.0).with_vel(Vec2::new(1.0, -2.0));
        b.integrate(0.5);
        assert_eq!(b.vel, Vec2::new(1.0, -1.5));
        assert_eq!(b.pos, Vec2::new(1.0, -1.5));
    }

    #[test]
    fn overlap_is_strict() {
        let a = body_at(0.0, 0.0);
        assert!(a.overlaps(&body_at(5.0, 5.0)));
        assert!(!a.overlaps(&body_at(10.0, 0.0)));
        assert!(!a.overlaps(&body_at(0.0, 10.0)));
    }

    #[test]
    fn bodies_in_different_rooms_never_overlap() {
        let a = body_at(0.0, 0.0);
        let mut b = body_at(0.0, 0.0);
        b.room = RoomId(1);
        assert!(!a.overlaps(&b));
    }
}
