//! Pointer drag-and-throw state machine
//!
//! `Idle --down on a body--> Dragging --move--> Dragging --up--> Idle`.
//! Anything else is a no-op: moves and releases while idle, presses while a
//! body is already held, and buttons other than the primary one.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::body::Body;

/// Pointer buttons the host forwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Data for the single body currently held by the pointer
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Index of the held body
    pub target: usize,
    /// Pointer position minus body center at grab time; kept fixed so the
    /// body does not snap its center to the cursor
    pub grab_offset: DVec2,
    /// Previous move sample (none until the first move after the grab)
    pub last_pointer_pos: Option<DVec2>,
    /// Velocity the body gets on release
    pub smoothed_velocity: DVec2,
}

/// Current drag state
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Owns the drag state and turns pointer samples into a throw velocity
#[derive(Debug, Clone)]
pub struct InteractionController {
    state: DragState,
    /// Scale from per-sample pointer delta to release velocity
    throw_gain: f64,
}

impl InteractionController {
    pub fn new(throw_gain: f64) -> Self {
        Self {
            state: DragState::Idle,
            throw_gain,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    /// Index of the held body
    pub fn target(&self) -> Option<usize> {
        self.session().map(|s| s.target)
    }

    pub fn throw_gain(&self) -> f64 {
        self.throw_gain
    }

    /// First body (lowest index) whose circle contains `pos`
    pub fn hit_test(bodies: &[Body], pos: DVec2) -> Option<usize> {
        bodies.iter().position(|b| b.contains(pos))
    }

    /// Try to grab a body. Returns the grabbed index.
    ///
    /// The grabbed body's velocity is zeroed immediately.
    pub fn pointer_down(
        &mut self,
        bodies: &mut [Body],
        pos: DVec2,
        button: PointerButton,
    ) -> Option<usize> {
        if button != PointerButton::Primary {
            log::trace!("ignoring {:?} press", button);
            return None;
        }
        if self.is_dragging() {
            return None;
        }

        let target = Self::hit_test(bodies, pos)?;
        let body = &mut bodies[target];
        body.vel = DVec2::ZERO;

        self.state = DragState::Dragging(DragSession {
            target,
            grab_offset: pos - body.pos,
            last_pointer_pos: None,
            smoothed_velocity: DVec2::ZERO,
        });
        log::debug!("grabbed body {} at ({:.1}, {:.1})", target, pos.x, pos.y);
        Some(target)
    }

    /// Move the held body with the pointer. Returns true if a body moved.
    pub fn pointer_move(&mut self, bodies: &mut [Body], pos: DVec2) -> bool {
        let DragState::Dragging(session) = &mut self.state else {
            return false;
        };
        let Some(body) = bodies.get_mut(session.target) else {
            log::warn!("drag target {} no longer exists", session.target);
            self.state = DragState::Idle;
            return false;
        };

        // Single-sample estimate; the first move after a grab has no prior sample
        if let Some(last) = session.last_pointer_pos {
            session.smoothed_velocity = (pos - last) * self.throw_gain;
        }
        body.pos = pos - session.grab_offset;
        session.last_pointer_pos = Some(pos);
        true
    }

    /// Let go of the held body. Returns its index and release velocity.
    pub fn pointer_up(
        &mut self,
        bodies: &mut [Body],
        button: PointerButton,
    ) -> Option<(usize, DVec2)> {
        if button != PointerButton::Primary {
            return None;
        }
        let DragState::Dragging(session) = std::mem::take(&mut self.state) else {
            return None;
        };

        let body = bodies.get_mut(session.target)?;
        body.vel = session.smoothed_velocity;
        log::debug!(
            "released body {} with velocity ({:.1}, {:.1})",
            session.target,
            body.vel.x,
            body.vel.y
        );
        Some((session.target, session.smoothed_velocity))
    }
}
