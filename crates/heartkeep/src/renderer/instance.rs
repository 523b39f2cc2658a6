use bytemuck::{Pod, Zeroable};

/// Per-instance render data handed to whatever backend draws the frame.
/// 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// Left edge in world space.
    pub x: f32,
    /// Top edge in world space.
    pub y: f32,
    /// Rendered width in world units.
    pub width: f32,
    /// Rendered height in world units.
    pub height: f32,
    /// Atlas column of the frame.
    pub sprite_col: f32,
    /// Atlas row of the frame.
    pub atlas_row: f32,
    /// 1.0 = as drawn, -1.0 = mirrored horizontally.
    pub flip: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Draw context: collects the sprites emitted by one draw pass.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(64),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Flat float view of the instances, for backends that upload raw buffers.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<RenderInstance>(), RenderInstance::STRIDE_BYTES);
        assert_eq!(RenderInstance::FLOATS, 8);
    }

    #[test]
    fn float_view_matches_field_order() {
        let mut buf = RenderBuffer::new();
        buf.push(RenderInstance {
            x: 1.0,
            y: 2.0,
            width: 3.0,
            height: 4.0,
            sprite_col: 5.0,
            atlas_row: 6.0,
            flip: -1.0,
            alpha: 1.0,
        });
        buf.push(RenderInstance::default());
        assert_eq!(buf.instance_count(), 2);
        assert_eq!(buf.as_floats().len(), 16);
        assert_eq!(&buf.as_floats()[..8], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, -1.0, 1.0]);
    }
}
