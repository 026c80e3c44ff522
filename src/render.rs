//! Drawing surface used by particles, emitters and bodies.
//!
//! The simulation never talks to a graphics API. Everything it draws
//! degrades to [`Renderer::draw_point`]; the backend owns blending,
//! projection and the actual draw calls.
//!
//! [`PointBatch`] is a ready-made renderer that collects points into a
//! `Pod` vertex array suitable for uploading to a vertex buffer:
//!
//! ```ignore
//! let mut batch = PointBatch::new();
//! body.render(&mut batch);
//! queue.write_buffer(&vertex_buffer, 0, batch.as_bytes());
//! ```

use glam::{Vec2, Vec4};

/// Sink for point primitives.
pub trait Renderer {
    /// Draw a single point of `size` pixels at `position` with a normalized
    /// RGBA `color`.
    fn draw_point(&mut self, position: Vec2, size: f32, color: Vec4);
}

/// GPU-compatible point vertex.
///
/// Layout: `position` (8 bytes), `size` (4 bytes), padding (4 bytes),
/// `color` (16 bytes) for 32 bytes total.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointVertex {
    pub position: [f32; 2],
    pub size: f32,
    pub _pad: f32,
    pub color: [f32; 4],
}

/// Renderer that records points for a later batched upload.
#[derive(Debug, Default, Clone)]
pub struct PointBatch {
    vertices: Vec<PointVertex>,
}

impl PointBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// Drop recorded points, keeping the allocation. Call once per frame.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[PointVertex] {
        &self.vertices
    }

    /// Raw bytes of the recorded vertices.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl Renderer for PointBatch {
    fn draw_point(&mut self, position: Vec2, size: f32, color: Vec4) {
        self.vertices.push(PointVertex {
            position: position.to_array(),
            size,
            _pad: 0.0,
            color: color.to_array(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<PointVertex>(), 32);
    }

    #[test]
    fn test_batch_bytes() {
        let mut batch = PointBatch::new();
        batch.draw_point(Vec2::new(1.0, 2.0), 4.0, Vec4::ONE);
        batch.draw_point(Vec2::new(3.0, 4.0), 4.0, Vec4::ONE);

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.as_bytes().len(), 64);
        assert_eq!(batch.vertices()[1].position, [3.0, 4.0]);

        batch.clear();
        assert!(batch.is_empty());
    }
}
