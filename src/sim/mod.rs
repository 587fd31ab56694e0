//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (scene generation)
//! - Stable iteration order (by body index)
//! - No rendering or platform dependencies

pub mod body;
pub mod boundary;
pub mod collision;
pub mod integrate;
pub mod interaction;
pub mod scene;
pub mod state;
pub mod tick;

pub use body::Body;
pub use collision::{Contact, Impact, PairOutcome, circle_circle, resolve_pair};
pub use interaction::{DragSession, DragState, InteractionController, PointerButton};
pub use scene::{BodySpec, Scene};
pub use state::{Axis, Edge, MAX_PENDING_EVENTS, SimEvent, SimulationState, Viewport};
pub use tick::tick;
