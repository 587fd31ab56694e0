//! Ball-ball collision detection and response
//!
//! Pairs are visited in ascending `(i, j)` order and resolved one at a time:
//! positional separation along the contact normal, then a restitution impulse
//! if the pair is still approaching. This is not a global solve; three or more
//! mutually overlapping bodies can keep a little residual penetration after a
//! pass.

use glam::DVec2;

use super::body::Body;

/// Contact between two overlapping circles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit normal from the first body toward the second
    pub normal: DVec2,
    /// Overlap depth (`r_a + r_b - center distance`)
    pub penetration: f64,
}

/// An impulse exchange produced by `resolve`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impact {
    pub a: usize,
    pub b: usize,
    pub impulse: f64,
}

/// Outcome of resolving a single pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PairOutcome {
    /// Not touching, or centers coincide
    Apart,
    /// Overlap corrected, bodies already moving apart so velocities untouched
    Separated,
    /// Overlap corrected and impulse of this magnitude applied
    Bounced { impulse: f64 },
}

/// Detect overlap between two circles.
///
/// Coincident centers give no contact since the normal is undefined; the pair
/// stays unresolved until something else moves one of them.
pub fn circle_circle(a: &Body, b: &Body) -> Option<Contact> {
    let d = b.pos - a.pos;
    let distance = d.length();
    let radius_sum = a.radius() + b.radius();

    if distance < radius_sum && distance > 0.0 {
        Some(Contact {
            normal: d / distance,
            penetration: radius_sum - distance,
        })
    } else {
        None
    }
}

/// Impulse magnitude along `normal` for an approaching pair.
///
/// Returns `None` when the normal relative velocity is positive (separating).
/// J = -(1 + e) * dvn / (1/m_a + 1/m_b)
pub fn impulse_magnitude(a: &Body, b: &Body, normal: DVec2, restitution: f64) -> Option<f64> {
    let dvn = (b.vel - a.vel).dot(normal);
    if dvn > 0.0 {
        return None;
    }
    Some(-(1.0 + restitution) * dvn / (a.inv_mass() + b.inv_mass()))
}

/// Resolve one pair in place
pub fn resolve_pair(a: &mut Body, b: &mut Body, restitution: f64) -> PairOutcome {
    let Some(contact) = circle_circle(a, b) else {
        return PairOutcome::Apart;
    };
    let n = contact.normal;

    // Full separation in one step, split evenly
    let half = n * (contact.penetration * 0.5);
    a.pos -= half;
    b.pos += half;

    match impulse_magnitude(a, b, n, restitution) {
        None => PairOutcome::Separated,
        Some(j) => {
            a.vel -= n * (j * a.inv_mass());
            b.vel += n * (j * b.inv_mass());
            PairOutcome::Bounced { impulse: j }
        }
    }
}

/// Resolve every overlapping pair, skipping `skip` (the drag target) entirely
pub fn resolve(bodies: &mut [Body], restitution: f64, skip: Option<usize>) -> Vec<Impact> {
    let mut impacts = Vec::new();
    let n = bodies.len();

    for i in 0..n {
        if Some(i) == skip {
            continue;
        }
        for j in (i + 1)..n {
            if Some(j) == skip {
                continue;
            }
            let (left, right) = bodies.split_at_mut(j);
            let outcome = resolve_pair(&mut left[i], &mut right[0], restitution);
            if let PairOutcome::Bounced { impulse } = outcome {
                log::trace!("impact {}-{}: J={:.3}", i, j, impulse);
                impacts.push(Impact { a: i, b: j, impulse });
            }
        }
    }

    impacts
}
