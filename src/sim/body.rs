//! Circular rigid body
//!
//! Mass follows a linear law (`mass = 2 * radius`), not area. Collision
//! impulse magnitudes depend on it, so it stays explicit here.

use glam::DVec2;
use serde::Serialize;

use crate::consts::MASS_PER_RADIUS;
use crate::error::{Result, SimError};

/// A simulated ball
///
/// Not `Deserialize`: load bodies through `BodySpec` so mass is always derived
/// from a validated radius.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Body {
    /// Center in viewport coordinates (origin top-left, y down)
    pub pos: DVec2,
    /// Velocity in units per second
    pub vel: DVec2,
    radius: f64,
    mass: f64,
}

impl Body {
    /// Create a body, rejecting non-positive or non-finite radii
    pub fn new(radius: f64, pos: DVec2, vel: DVec2) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SimError::InvalidRadius { radius });
        }
        Ok(Self {
            pos,
            vel,
            radius,
            mass: MASS_PER_RADIUS * radius,
        })
    }

    /// Create a body at rest
    pub fn at_rest(radius: f64, pos: DVec2) -> Result<Self> {
        Self::new(radius, pos, DVec2::ZERO)
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[inline]
    pub fn inv_mass(&self) -> f64 {
        1.0 / self.mass
    }

    /// Whether a point lies inside (or on the edge of) the circle
    pub fn contains(&self, point: DVec2) -> bool {
        (point - self.pos).length_squared() <= self.radius * self.radius
    }

    /// Advance position by velocity over `dt`
    #[inline]
    pub fn advance(&mut self, dt: f64) {
        self.pos += self.vel * dt;
    }

    /// Kinetic energy, using the linear mass model
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.vel.length_squared()
    }

    pub fn momentum(&self) -> DVec2 {
        self.vel * self.mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mass_is_twice_radius() {
        let body = Body::at_rest(25.0, DVec2::new(100.0, 100.0)).unwrap();
        assert_eq!(body.mass(), 50.0);
        assert_eq!(body.radius(), 25.0);
    }

    #[test]
    fn test_rejects_bad_radius() {
        for r in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = Body::at_rest(r, DVec2::ZERO);
            assert!(matches!(result, Err(SimError::InvalidRadius { .. })), "radius {r}");
        }
    }

    #[test]
    fn test_contains_edge_inclusive() {
        let body = Body::at_rest(10.0, DVec2::new(50.0, 50.0)).unwrap();
        assert!(body.contains(DVec2::new(50.0, 50.0)));
        assert!(body.contains(DVec2::new(60.0, 50.0)));
        assert!(!body.contains(DVec2::new(60.1, 50.0)));
    }

    #[test]
    fn test_advance() {
        let mut body = Body::new(5.0, DVec2::new(10.0, 10.0), DVec2::new(100.0, -50.0)).unwrap();
        body.advance(0.5);
        assert_eq!(body.pos, DVec2::new(60.0, -15.0));
    }
}
