//! Simulation settings
//!
//! Loaded from JSON on native hosts; every field falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, SimError};
use crate::sim::Viewport;

/// Simulation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fraction of separating velocity kept per bounce/impact, in (0, 1]
    pub restitution: f64,
    /// Nominal step size in seconds (not measured from the clock)
    pub dt: f64,
    /// Host timer period
    pub tick_interval_ms: u64,
    /// Pointer delta to throw velocity multiplier
    pub throw_gain: f64,
    /// Initial window size
    pub viewport: Viewport,
    /// Freeze all bodies while one is held; off leaves only the held body out
    pub pause_all_while_dragging: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            restitution: DEFAULT_RESTITUTION,
            dt: SIM_DT,
            tick_interval_ms: TICK_INTERVAL_MS,
            throw_gain: THROW_GAIN,
            viewport: Viewport::default(),
            pause_all_while_dragging: true,
        }
    }
}

impl Settings {
    /// Check ranges; called before a simulation is built
    pub fn validate(&self) -> Result<()> {
        if !(self.restitution > 0.0 && self.restitution <= 1.0) {
            return Err(SimError::InvalidRestitution {
                value: self.restitution,
            });
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SimError::InvalidTimestep { dt: self.dt });
        }
        if !self.viewport.is_valid() {
            return Err(SimError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}
