//! Rendering boundary
//!
//! The simulation hands a renderer one `CircleSprite` per body each frame and
//! never reads anything back. `MeshRenderer` turns sprites into a triangle
//! list in viewport pixels that a windowed host uploads as-is.

pub mod shapes;
pub mod vertex;

pub use shapes::MeshRenderer;
pub use vertex::Vertex;

use glam::DVec2;

use crate::sim::{Body, Viewport};

/// A filled circle to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleSprite {
    pub center: DVec2,
    pub radius: f64,
    /// Gray level for all three channels
    pub gray: u8,
}

impl CircleSprite {
    pub fn from_body(body: &Body) -> Self {
        Self {
            center: body.pos,
            radius: body.radius(),
            gray: body_gray(body.radius()),
        }
    }

    /// Opaque RGBA in 0..1
    pub fn color(&self) -> [f32; 4] {
        let g = self.gray as f32 / 255.0;
        [g, g, g, 1.0]
    }
}

/// Fill intensity for a body: bigger balls are darker.
///
/// `200 - 3 * radius`, truncated toward zero and clamped to a channel value.
pub fn body_gray(radius: f64) -> u8 {
    (200.0 - radius * 3.0).trunc().clamp(0.0, 255.0) as u8
}

/// Something that can paint a frame of circles
pub trait Renderer {
    /// Start a frame for a window of this size
    fn begin_frame(&mut self, viewport: Viewport);
    fn draw_circle(&mut self, sprite: CircleSprite);
    /// Finish and present the frame
    fn end_frame(&mut self);
}

/// Paint every body, in index order
pub fn render_bodies<R: Renderer + ?Sized>(renderer: &mut R, bodies: &[Body], viewport: Viewport) {
    renderer.begin_frame(viewport);
    for body in bodies {
        renderer.draw_circle(CircleSprite::from_body(body));
    }
    renderer.end_frame();
}
