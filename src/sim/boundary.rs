//! Viewport edge collisions
//!
//! Each axis is checked independently and unconditionally, so a body wedged
//! in a corner is corrected on both axes in one pass. When the viewport is
//! narrower than the body's diameter the min-edge clamp runs first and the
//! max-edge clamp second; the center ends at `extent - radius` (which may be
//! below `radius`, or even negative) and the velocity is reflected twice.

use super::body::Body;
use super::state::{Axis, Edge, Viewport};

/// A single wall correction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallHit {
    pub body: usize,
    pub axis: Axis,
    pub edge: Edge,
}

/// Clamp one body inside the viewport, reflecting velocity with energy loss.
///
/// Returns the edges that were hit, in check order.
pub fn resolve_body(body: &mut Body, viewport: Viewport, restitution: f64) -> Vec<(Axis, Edge)> {
    let r = body.radius();
    let mut hits = Vec::new();

    for axis in Axis::BOTH {
        let extent = viewport.extent(axis);

        if axis.get(body.pos) - r < 0.0 {
            let reflected = -axis.get(body.vel) * restitution;
            axis.set(&mut body.pos, r);
            axis.set(&mut body.vel, reflected);
            hits.push((axis, Edge::Min));
        }

        if axis.get(body.pos) + r > extent {
            let reflected = -axis.get(body.vel) * restitution;
            axis.set(&mut body.pos, extent - r);
            axis.set(&mut body.vel, reflected);
            hits.push((axis, Edge::Max));
        }
    }

    hits
}

/// Resolve wall contacts for every body except `skip`
pub fn resolve(
    bodies: &mut [Body],
    viewport: Viewport,
    restitution: f64,
    skip: Option<usize>,
) -> Vec<WallHit> {
    let mut hits = Vec::new();
    for (i, body) in bodies.iter_mut().enumerate() {
        if Some(i) == skip {
            continue;
        }
        for (axis, edge) in resolve_body(body, viewport, restitution) {
            hits.push(WallHit { body: i, axis, edge });
        }
    }
    hits
}
