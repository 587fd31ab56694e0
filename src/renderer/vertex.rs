//! Vertex type shared with GPU hosts

use bytemuck::{Pod, Zeroable};

/// 2D vertex in viewport pixels with an RGBA color.
///
/// `#[repr(C)]` and `Pod` so a host can upload a frame as raw bytes
/// (8 bytes of position, then 16 bytes of color).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}
