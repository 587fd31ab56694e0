//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use super::{CircleSprite, Renderer};
use crate::sim::Viewport;

/// Fewest and most triangles used for one circle
const MIN_SEGMENTS: u32 = 16;
const MAX_SEGMENTS: u32 = 64;

/// Segment count that keeps edges smooth without wasting triangles on small balls
pub fn segments_for_radius(radius: f32) -> u32 {
    (radius.max(0.0) as u32).clamp(MIN_SEGMENTS, MAX_SEGMENTS)
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Collects a frame's circles as a triangle list in viewport pixels
#[derive(Debug, Default)]
pub struct MeshRenderer {
    vertices: Vec<Vertex>,
    viewport: Viewport,
    frames: u64,
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Triangles of the last (or current) frame
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// The frame's triangles as a byte buffer ready for a vertex-buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Completed frames
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for MeshRenderer {
    fn begin_frame(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.vertices.clear();
    }

    fn draw_circle(&mut self, sprite: CircleSprite) {
        let center = sprite.center.as_vec2();
        let radius = sprite.radius as f32;
        self.vertices.extend(circle(
            center,
            radius,
            sprite.color(),
            segments_for_radius(radius),
        ));
    }

    fn end_frame(&mut self) {
        self.frames += 1;
    }
}
