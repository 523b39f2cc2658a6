//! Frame-based sprite animation.
//!
//! A [`SpriteSheet`] is the read-only description of a strip of frames and is
//! shared between every entity that uses it. An [`AnimationState`] is the
//! per-entity playback cursor (frame index + tick timer) pointing at a sheet.
//! Entities own their states, so two players never advance each other's
//! frames.

use std::rc::Rc;

use glam::Vec2;

use crate::components::sprite::AtlasId;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Read-only description of an animation strip.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSheet {
    /// Atlas the frames live in.
    pub atlas: AtlasId,
    /// Frame cells as (col, row) pairs in the atlas.
    pub frames: Vec<(f32, f32)>,
    /// Ticks each frame stays on screen.
    pub ticks_per_frame: u32,
    /// Whether to wrap to frame 0 after the last frame.
    pub looping: bool,
}

impl SpriteSheet {
    /// Create a horizontal strip (consecutive columns, same row).
    pub fn horizontal_strip(atlas: AtlasId, row: f32, start_col: f32, frame_count: u32, ticks_per_frame: u32) -> Self {
        let frames: Vec<(f32, f32)> = (0..frame_count)
            .map(|i| (start_col + i as f32, row))
            .collect();
        Self {
            atlas,
            frames,
            ticks_per_frame,
            looping: true,
        }
    }

    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Get the number of frames.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// Playback cursor owned by a single entity.
#[derive(Debug, Clone)]
pub struct AnimationState {
    sheet: Rc<SpriteSheet>,
    /// Current frame index.
    pub frame: usize,
    /// Ticks accumulated on the current frame.
    pub timer: u32,
}

impl AnimationState {
    pub fn new(sheet: Rc<SpriteSheet>) -> Self {
        Self {
            sheet,
            frame: 0,
            timer: 0,
        }
    }

    /// Number of frames in the sheet.
    pub fn length(&self) -> usize {
        self.sheet.frame_count()
    }

    /// Ticks per frame.
    pub fn speed(&self) -> u32 {
        self.sheet.ticks_per_frame
    }

    /// Rewind to frame 0.
    pub fn reset(&mut self) {
        self.frame = 0;
        self.timer = 0;
    }

    /// Advance playback by one tick. Returns true if the frame changed.
    pub fn tick(&mut self) -> bool {
        let length = self.length();
        if length == 0 {
            return false;
        }

        self.timer += 1;
        if self.timer < self.speed() {
            return false;
        }
        self.timer = 0;

        if self.frame + 1 < length {
            self.frame += 1;
            true
        } else if self.sheet.looping {
            self.frame = 0;
            length > 1
        } else {
            false
        }
    }

    /// Current (col, row) cell, if the sheet has frames.
    pub fn current_frame(&self) -> Option<(f32, f32)> {
        self.sheet.frames.get(self.frame).copied()
    }

    /// Push the current frame into the render buffer.
    pub fn draw(&self, ctx: &mut RenderBuffer, pos: Vec2, size: Vec2, flip: bool) {
        let Some((col, row)) = self.current_frame() else {
            return;
        };
        ctx.push(RenderInstance {
            x: pos.x,
            y: pos.y,
            width: size.x,
            height: size.y,
            sprite_col: col,
            atlas_row: row,
            flip: if flip { -1.0 } else { 1.0 },
            alpha: 1.0,
        });
    }
}
