//! Free-motion integration
//!
//! Explicit Euler over a fixed nominal `dt`. The step size is never measured
//! from the wall clock, so a given input sequence always replays identically.

use super::body::Body;

/// Advance every body except `skip` (the drag target, if any)
pub fn advance(bodies: &mut [Body], dt: f64, skip: Option<usize>) {
    for (i, body) in bodies.iter_mut().enumerate() {
        if Some(i) == skip {
            continue;
        }
        body.advance(dt);
    }
}
