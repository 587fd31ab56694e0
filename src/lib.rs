//! Ballpit - a box of bouncing balls you can grab and throw
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, wall bounces, ball-ball impulses, dragging)
//! - `host`: Event-hook facade the windowing layer drives (tick, pointer, resize, render)
//! - `renderer`: Renderer boundary plus circle tessellation
//! - `settings`: Data-driven simulation tuning

pub mod error;
pub mod host;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Result, SimError};
pub use host::Simulation;
pub use settings::Settings;

use glam::DVec2;

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation timestep in seconds (nominal 60 Hz, not measured wall-clock)
    pub const SIM_DT: f64 = 0.016;
    /// Host timer period in milliseconds
    pub const TICK_INTERVAL_MS: u64 = 16;

    /// Fraction of the separating velocity kept after a bounce or impact
    pub const DEFAULT_RESTITUTION: f64 = 0.95;

    /// Multiplier from per-sample pointer delta to release velocity
    pub const THROW_GAIN: f64 = 3.0;

    /// Default viewport (window client area) in pixels
    pub const VIEWPORT_WIDTH: f64 = 600.0;
    pub const VIEWPORT_HEIGHT: f64 = 600.0;

    /// Mass per unit radius (mass = 2 * radius)
    pub const MASS_PER_RADIUS: f64 = 2.0;
}

/// Build a vector from a plain `(x, y)` tuple
#[inline]
pub fn vec2(p: (f64, f64)) -> DVec2 {
    DVec2::new(p.0, p.1)
}
