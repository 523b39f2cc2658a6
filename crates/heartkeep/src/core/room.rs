use crate::components::body::Body;

/// Static room geometry. Resolves a body that has already been integrated
/// this tick against the room's solids.
///
/// Implementations may correct `pos` and `vel` and set `landed` when the body
/// rests on a floor. They must be safe to call exactly once per body per tick.
pub trait Room {
    fn collide(&self, body: &mut Body);
}

impl<F: Fn(&mut Body)> Room for F {
    fn collide(&self, body: &mut Body) {
        self(body)
    }
}

/// A box-shaped room: one floor line and two side walls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatRoom {
    /// y of the floor surface.
    pub floor_y: f32,
    /// x of the left wall's inner face.
    pub left: f32,
    /// x of the right wall's inner face.
    pub right: f32,
}

impl FlatRoom {
    pub fn new(floor_y: f32, left: f32, right: f32) -> Self {
        Self { floor_y, left, right }
    }
}

impl Room for FlatRoom {
    fn collide(&self, body: &mut Body) {
        if body.bottom() >= self.floor_y {
            body.pos.y = self.floor_y - body.size.y;
            body.vel.y = body.vel.y.min(0.0);
            body.landed = true;
        }
        if body.left() < self.left {
            body.pos.x = self.left;
            body.vel.x = body.vel.x.max(0.0);
        } else if body.right() > self.right {
            body.pos.x = self.right - body.size.x;
            body.vel.x = body.vel.x.min(0.0);
        }
    }
}
