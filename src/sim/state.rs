//! Simulation state and core types
//!
//! Everything a tick reads or writes lives in `SimulationState`. It is owned
//! by exactly one `Simulation` and mutated only from the host's event loop.

use std::collections::VecDeque;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::interaction::InteractionController;
use crate::consts::*;
use crate::error::{Result, SimError};
use crate::settings::Settings;

/// Size of the rectangular window the bodies live in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
        }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Extent along an axis
    #[inline]
    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    /// Whether a body of this radius can sit fully inside on both axes
    pub fn fits(&self, radius: f64) -> bool {
        2.0 * radius <= self.width && 2.0 * radius <= self.height
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::X, Axis::Y];

    #[inline]
    pub fn get(self, v: DVec2) -> f64 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }

    #[inline]
    pub fn set(self, v: &mut DVec2, value: f64) {
        match self {
            Axis::X => v.x = value,
            Axis::Y => v.y = value,
        }
    }
}

/// Which side of the viewport along an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    /// Left or top
    Min,
    /// Right or bottom
    Max,
}

/// Things that happened during a tick or pointer event (informational only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    /// A body was pushed back inside the viewport
    WallBounce { body: usize, axis: Axis, edge: Edge },
    /// Two approaching bodies exchanged an impulse
    Impact { a: usize, b: usize, impulse: f64 },
    /// A pointer grabbed a body
    DragStarted { body: usize },
    /// A held body was let go with this velocity
    Released { body: usize, velocity: DVec2 },
}

/// Undrained events kept before the oldest are dropped
pub const MAX_PENDING_EVENTS: usize = 256;

/// Complete simulation state (deterministic)
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Bodies in insertion order; the index is the body's identity
    pub bodies: Vec<Body>,
    pub viewport: Viewport,
    /// Elasticity applied at walls and between bodies, in (0, 1]
    pub restitution: f64,
    /// Fixed step size in seconds
    pub dt: f64,
    /// Freeze every body while any one is dragged
    pub pause_all_while_dragging: bool,
    /// Pointer drag state machine
    pub interaction: InteractionController,
    /// Number of physics steps taken
    pub time_ticks: u64,
    /// Events since the host last drained them
    pub events: VecDeque<SimEvent>,
}

impl SimulationState {
    /// Create a state from a fixed body set and validated settings
    pub fn new(bodies: Vec<Body>, settings: &Settings) -> Result<Self> {
        settings.validate()?;
        if let Some(index) = bodies
            .iter()
            .position(|b| !b.pos.is_finite() || !b.vel.is_finite())
        {
            return Err(SimError::NonFiniteBody { index });
        }
        for (i, body) in bodies.iter().enumerate() {
            if !settings.viewport.fits(body.radius()) {
                log::warn!(
                    "body {} (radius {}) does not fit in {}x{} viewport",
                    i,
                    body.radius(),
                    settings.viewport.width,
                    settings.viewport.height
                );
            }
        }

        Ok(Self {
            bodies,
            viewport: settings.viewport,
            restitution: settings.restitution,
            dt: settings.dt,
            pause_all_while_dragging: settings.pause_all_while_dragging,
            interaction: InteractionController::new(settings.throw_gain),
            time_ticks: 0,
            events: VecDeque::with_capacity(MAX_PENDING_EVENTS),
        })
    }

    /// Index of the body currently held by the pointer
    pub fn drag_target(&self) -> Option<usize> {
        self.interaction.target()
    }

    /// Whether a tick would move anything right now
    pub fn physics_paused(&self) -> bool {
        self.pause_all_while_dragging && self.interaction.is_dragging()
    }

    /// Record an event, dropping the oldest once the host falls behind
    pub fn push_event(&mut self, event: SimEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        self.events.drain(..).collect()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }
}
