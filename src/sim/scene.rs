//! Initial body sets
//!
//! A scene is plain data (serde) and only becomes bodies through `build`,
//! which is where radii are validated.

use std::ops::Range;
use std::path::Path;

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::state::Viewport;
use crate::error::Result;

/// Tries per body before a scatter scene accepts an overlapping spot
const MAX_PLACEMENT_ATTEMPTS: u32 = 64;

/// Serializable body definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySpec {
    pub radius: f64,
    pub position: DVec2,
    #[serde(default)]
    pub velocity: DVec2,
}

impl BodySpec {
    pub fn new(radius: f64, position: (f64, f64), velocity: (f64, f64)) -> Self {
        Self {
            radius,
            position: crate::vec2(position),
            velocity: crate::vec2(velocity),
        }
    }

    pub fn build(&self) -> Result<Body> {
        Body::new(self.radius, self.position, self.velocity)
    }
}

/// A named starting layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub name: String,
    pub bodies: Vec<BodySpec>,
}

impl Scene {
    /// Three balls of radius 20, 25 and 30 in a 600x600 window
    pub fn classic() -> Self {
        Self {
            name: "classic".to_string(),
            bodies: vec![
                BodySpec::new(20.0, (150.0, 150.0), (100.0, 1.0)),
                BodySpec::new(25.0, (400.0, 200.0), (-1.0, 200.0)),
                BodySpec::new(30.0, (300.0, 400.0), (1.5, -100.0)),
            ],
        }
    }

    /// Random layout from a seed; the same arguments always give the same scene.
    ///
    /// Bodies are placed fully inside the viewport and away from earlier ones
    /// when a free spot is found within a bounded number of tries.
    pub fn scatter(
        seed: u64,
        count: usize,
        viewport: Viewport,
        radius_range: Range<f64>,
        max_speed: f64,
    ) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut bodies: Vec<BodySpec> = Vec::with_capacity(count);

        for _ in 0..count {
            let radius = sample(&mut rng, radius_range.clone());

            let mut position = viewport.center();
            for _ in 0..MAX_PLACEMENT_ATTEMPTS {
                position = DVec2::new(
                    sample(&mut rng, radius..viewport.width - radius),
                    sample(&mut rng, radius..viewport.height - radius),
                );
                let clear = bodies
                    .iter()
                    .all(|b| (b.position - position).length() >= b.radius + radius);
                if clear {
                    break;
                }
            }

            let angle = rng.random_range(0.0..std::f64::consts::TAU);
            let speed = rng.random_range(0.0..=max_speed.abs());
            bodies.push(BodySpec {
                radius,
                position,
                velocity: DVec2::from_angle(angle) * speed,
            });
        }

        log::debug!("scatter scene: seed={} count={}", seed, count);
        Self {
            name: format!("scatter-{seed}"),
            bodies,
        }
    }

    /// Validate every `BodySpec` and produce the body list
    pub fn build(&self) -> Result<Vec<Body>> {
        self.bodies.iter().map(BodySpec::build).collect()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a scene file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let scene = Self::from_json(&json)?;
        log::info!("Loaded scene '{}' ({} bodies)", scene.name, scene.bodies.len());
        Ok(scene)
    }
}

/// Uniform sample that tolerates empty ranges by returning the start
fn sample(rng: &mut Pcg32, range: Range<f64>) -> f64 {
    if range.start < range.end {
        rng.random_range(range)
    } else {
        range.start
    }
}
