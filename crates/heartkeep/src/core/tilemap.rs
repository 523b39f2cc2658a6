//! Grid room built from solid tiles.
//!
//! Tiles are stored in row-major order: index = y * width + x. Row 0 is the
//! top row, matching the y-down world.

use glam::Vec2;

use crate::api::error::{EngineError, Result};
use crate::components::body::Body;
use crate::core::room::Room;

const EPS: f32 = 1e-3;

/// Room whose solids are square tiles on a grid.
#[derive(Debug, Clone)]
pub struct TileRoom {
    /// Width of the grid in tiles.
    pub width: u32,
    /// Height of the grid in tiles.
    pub height: u32,
    /// Size of each tile in world units.
    pub tile_size: f32,
    /// World position of the grid's top-left corner.
    pub origin: Vec2,
    solid: Vec<bool>,
}

impl TileRoom {
    /// Create a new room with no solid tiles.
    pub fn new(width: u32, height: u32, tile_size: f32) -> Result<Self> {
        if !(tile_size > 0.0 && tile_size.is_finite()) {
            return Err(EngineError::InvalidConfig(format!(
                "tile size must be positive and finite, got {tile_size}"
            )));
        }
        let count = width.checked_mul(height).ok_or_else(|| {
            EngineError::InvalidConfig(format!("tile grid {width}x{height} is too large"))
        })?;
        Ok(Self {
            width,
            height,
            tile_size,
            origin: Vec2::ZERO,
            solid: vec![false; count as usize],
        })
    }

    /// Set the world-space origin (top-left corner).
    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Whether the tile at (x, y) is solid. Outside the grid is open space.
    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        self.solid[(y as u32 * self.width + x as u32) as usize]
    }

    pub fn set_solid(&mut self, x: u32, y: u32, solid: bool) {
        if x < self.width && y < self.height {
            self.solid[(y * self.width + x) as usize] = solid;
        }
    }

    /// Fill a rectangular region.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, solid: bool) {
        for ty in y..(y + h).min(self.height) {
            for tx in x..(x + w).min(self.width) {
                self.set_solid(tx, ty, solid);
            }
        }
    }

    /// Count of solid tiles.
    pub fn solid_count(&self) -> usize {
        self.solid.iter().filter(|s| **s).count()
    }

    /// World-space bounds of the grid.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let min = self.origin;
        let max = self.origin + Vec2::new(
            self.width as f32 * self.tile_size,
            self.height as f32 * self.tile_size,
        );
        (min, max)
    }

    fn col_of(&self, x: f32) -> i32 {
        ((x - self.origin.x) / self.tile_size).floor() as i32
    }

    fn row_of(&self, y: f32) -> i32 {
        ((y - self.origin.y) / self.tile_size).floor() as i32
    }

    fn row_top(&self, row: i32) -> f32 {
        self.origin.y + row as f32 * self.tile_size
    }

    fn col_left(&self, col: i32) -> f32 {
        self.origin.x + col as f32 * self.tile_size
    }

    fn row_blocked(&self, row: i32, cols: (i32, i32)) -> bool {
        (cols.0..=cols.1).any(|c| self.is_solid(c, row))
    }

    fn col_blocked(&self, col: i32, rows: (i32, i32)) -> bool {
        (rows.0..=rows.1).any(|r| self.is_solid(col, r))
    }

    /// Vertical pass, using last tick's x span so walls are not mistaken for floors.
    fn resolve_vertical(&self, body: &mut Body, prev: Vec2) {
        let cols = (self.col_of(prev.x), self.col_of(prev.x + body.size.x - EPS));
        if body.vel.y >= 0.0 {
            let from = self.row_of(prev.y + body.size.y);
            let to = self.row_of(body.bottom() - EPS);
            if let Some(row) = (from..=to).find(|&r| self.row_blocked(r, cols)) {
                body.pos.y = self.row_top(row) - body.size.y;
                body.vel.y = 0.0;
                body.landed = true;
            }
        } else {
            let from = self.row_of(prev.y - EPS);
            let to = self.row_of(body.top());
            if let Some(row) = (to..=from).rev().find(|&r| self.row_blocked(r, cols)) {
                body.pos.y = self.row_top(row + 1);
                body.vel.y = 0.0;
            }
        }
    }

    fn resolve_horizontal(&self, body: &mut Body) {
        let rows = (self.row_of(body.top() + EPS), self.row_of(body.bottom() - EPS));
        if body.vel.x > 0.0 {
            let col = self.col_of(body.right() - EPS);
            if self.col_blocked(col, rows) {
                body.pos.x = self.col_left(col) - body.size.x;
                body.vel.x = 0.0;
            }
        } else if body.vel.x < 0.0 {
            let col = self.col_of(body.left());
            if self.col_blocked(col, rows) {
                body.pos.x = self.col_left(col + 1);
                body.vel.x = 0.0;
            }
        }
    }
}

impl Room for TileRoom {
    fn collide(&self, body: &mut Body) {
        let prev = body.pos - body.vel;
        self.resolve_vertical(body, prev);
        self.resolve_horizontal(body);
    }
}
