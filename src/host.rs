//! Event-hook facade for the windowing layer
//!
//! The host owns one `Simulation`, calls `on_tick` from a periodic timer,
//! forwards pointer and resize events, and calls `render` whenever
//! `take_redraw` says a frame is due. All calls happen on one thread; nothing
//! here blocks or locks.

use std::time::Duration;

use glam::DVec2;

use crate::error::Result;
use crate::renderer::{self, Renderer};
use crate::settings::Settings;
use crate::sim::{Body, PointerButton, Scene, SimEvent, SimulationState, Viewport, tick};

/// A running ball simulation plus its redraw flag
#[derive(Debug, Clone)]
pub struct Simulation {
    state: SimulationState,
    tick_interval: Duration,
    needs_redraw: bool,
}

impl Simulation {
    /// Build a simulation over a fixed body set
    pub fn new(bodies: Vec<Body>, settings: &Settings) -> Result<Self> {
        let state = SimulationState::new(bodies, settings)?;
        log::info!(
            "Simulation created: {} bodies, {}x{} viewport, restitution {}",
            state.bodies.len(),
            state.viewport.width,
            state.viewport.height,
            state.restitution
        );
        Ok(Self {
            state,
            tick_interval: Duration::from_millis(settings.tick_interval_ms),
            needs_redraw: true,
        })
    }

    pub fn from_scene(scene: &Scene, settings: &Settings) -> Result<Self> {
        Self::new(scene.build()?, settings)
    }

    /// Period the host timer should fire at
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Timer callback: one fixed step unless a drag pauses physics
    pub fn on_tick(&mut self) -> bool {
        let dt = self.state.dt;
        let stepped = tick(&mut self.state, dt);
        if stepped {
            self.needs_redraw = true;
        }
        stepped
    }

    /// Pointer press; returns the grabbed body, if any
    pub fn on_pointer_down(&mut self, pos: DVec2, button: PointerButton) -> Option<usize> {
        let state = &mut self.state;
        let grabbed = state.interaction.pointer_down(&mut state.bodies, pos, button);
        if let Some(body) = grabbed {
            state.push_event(SimEvent::DragStarted { body });
            self.needs_redraw = true;
        }
        grabbed
    }

    /// Pointer motion; moves the held body, if any
    pub fn on_pointer_move(&mut self, pos: DVec2) {
        let state = &mut self.state;
        if state.interaction.pointer_move(&mut state.bodies, pos) {
            self.needs_redraw = true;
        }
    }

    /// Pointer release; throws the held body with the recent pointer velocity
    pub fn on_pointer_up(&mut self, button: PointerButton) -> Option<(usize, DVec2)> {
        let state = &mut self.state;
        let released = state.interaction.pointer_up(&mut state.bodies, button);
        if let Some((body, velocity)) = released {
            state.push_event(SimEvent::Released { body, velocity });
            self.needs_redraw = true;
        }
        released
    }

    /// Window resize. Non-finite or negative sizes are ignored.
    pub fn on_resize(&mut self, width: f64, height: f64) {
        let viewport = Viewport::new(width, height);
        if !viewport.is_valid() {
            log::warn!("Ignoring invalid resize to {}x{}", width, height);
            return;
        }
        log::info!("Viewport resized to {}x{}", width, height);
        self.state.viewport = viewport;
        self.needs_redraw = true;
    }

    /// Paint the current state; never mutates the simulation
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer::render_bodies(renderer, &self.state.bodies, self.state.viewport);
    }

    /// Whether a repaint was requested since the last call; clears the flag
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Events since the last drain
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        self.state.drain_events()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.state.bodies
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn viewport(&self) -> Viewport {
        self.state.viewport
    }

    pub fn is_dragging(&self) -> bool {
        self.state.interaction.is_dragging()
    }

    /// JSON snapshot of every body
    pub fn snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.state.bodies)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::MeshRenderer;

    fn classic() -> Simulation {
        Simulation::from_scene(&Scene::classic(), &Settings::default()).unwrap()
    }

    #[test]
    fn test_tick_interval_from_settings() {
        assert_eq!(classic().tick_interval(), Duration::from_millis(16));
    }

    #[test]
    fn test_grab_drag_throw() {
        let mut sim = classic();
        sim.take_redraw();

        assert_eq!(sim.on_pointer_down(DVec2::new(400.0, 200.0), PointerButton::Primary), Some(1));
        assert!(sim.is_dragging());
        assert!(sim.take_redraw());

        // Physics is paused for everyone while holding
        let held_pos = sim.bodies()[0].pos;
        assert!(!sim.on_tick());
        assert_eq!(sim.bodies()[0].pos, held_pos);
        assert!(!sim.needs_redraw());

        sim.on_pointer_move(DVec2::new(410.0, 200.0));
        assert!(sim.take_redraw());
        sim.on_pointer_move(DVec2::new(420.0, 195.0));
        assert_eq!(sim.bodies()[1].pos, DVec2::new(420.0, 195.0));

        let released = sim.on_pointer_up(PointerButton::Primary);
        assert_eq!(released, Some((1, DVec2::new(30.0, -15.0))));
        assert_eq!(sim.bodies()[1].vel, DVec2::new(30.0, -15.0));

        let events = sim.drain_events();
        assert_eq!(
            events,
            vec![
                SimEvent::DragStarted { body: 1 },
                SimEvent::Released { body: 1, velocity: DVec2::new(30.0, -15.0) },
            ]
        );
        assert!(sim.on_tick());
    }

    #[test]
    fn test_resize() {
        let mut sim = classic();
        sim.on_resize(800.0, 300.0);
        assert_eq!(sim.viewport(), Viewport::new(800.0, 300.0));
        sim.on_resize(f64::NAN, 300.0);
        sim.on_resize(-5.0, 300.0);
        assert_eq!(sim.viewport(), Viewport::new(800.0, 300.0));
    }

    #[test]
    fn test_shrinking_viewport_pulls_bodies_in() {
        let body = Body::at_rest(30.0, DVec2::new(300.0, 400.0)).unwrap();
        let mut sim = Simulation::new(vec![body], &Settings::default()).unwrap();
        sim.on_resize(200.0, 200.0);
        sim.on_tick();
        assert_eq!(sim.bodies()[0].pos, DVec2::new(170.0, 170.0));
        assert_eq!(sim.bodies()[0].vel, DVec2::ZERO);
    }

    #[test]
    fn test_render_is_read_only() {
        let sim = classic();
        let before = sim.bodies().to_vec();
        let mut mesh = MeshRenderer::new();
        sim.render(&mut mesh);
        assert_eq!(sim.bodies(), &before[..]);
        assert_eq!(mesh.frames(), 1);
        assert!(!mesh.vertices().is_empty());
    }

    #[test]
    fn test_snapshot_json() {
        let json = classic().snapshot_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 3);
        assert_eq!(value[0]["radius"], 20.0);
        assert_eq!(value[0]["mass"], 40.0);
    }
}
