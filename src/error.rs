//! Simulation error types.
//!
//! Only setup can fail: body definitions, settings and scene files. Once a
//! simulation is running every hook is infallible.

use thiserror::Error;

/// Errors raised while building a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// Body radius must be finite and strictly positive.
    #[error("invalid body radius: {radius} (must be finite and > 0)")]
    InvalidRadius { radius: f64 },

    /// Restitution must lie in (0, 1].
    #[error("invalid restitution: {value} (must be in (0, 1])")]
    InvalidRestitution { value: f64 },

    /// Timestep must be finite and strictly positive.
    #[error("invalid timestep: {dt}")]
    InvalidTimestep { dt: f64 },

    /// Viewport extents must be finite and non-negative.
    #[error("invalid viewport: {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },

    /// Body position or velocity is not finite.
    #[error("body {index} has a non-finite position or velocity")]
    NonFiniteBody { index: usize },

    /// Malformed settings or scene JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings or scene file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used by setup operations.
pub type Result<T> = std::result::Result<T, SimError>;
