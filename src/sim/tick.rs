//! Fixed timestep simulation tick
//!
//! One step is: integrate, clamp to walls, resolve ball-ball pairs. While a
//! body is held the whole step is skipped by default (every body freezes, not
//! only the held one). With `pause_all_while_dragging` off, only the held body
//! is left out.

use super::state::{SimEvent, SimulationState};
use super::{boundary, collision, integrate};

/// Advance the simulation by one fixed timestep.
///
/// Returns false when the step was skipped because of an active drag.
pub fn tick(state: &mut SimulationState, dt: f64) -> bool {
    if state.physics_paused() {
        return false;
    }

    let skip = state.drag_target();
    state.time_ticks += 1;

    integrate::advance(&mut state.bodies, dt, skip);

    for hit in boundary::resolve(&mut state.bodies, state.viewport, state.restitution, skip) {
        state.push_event(SimEvent::WallBounce {
            body: hit.body,
            axis: hit.axis,
            edge: hit.edge,
        });
    }

    for impact in collision::resolve(&mut state.bodies, state.restitution, skip) {
        state.push_event(SimEvent::Impact {
            a: impact.a,
            b: impact.b,
            impulse: impact.impulse,
        });
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::settings::Settings;
    use crate::sim::{Body, PointerButton, Scene};
    use glam::DVec2;
    use proptest::prelude::*;

    fn state_with(bodies: Vec<Body>, settings: &Settings) -> SimulationState {
        SimulationState::new(bodies, settings).unwrap()
    }

    #[test]
    fn test_tick_moves_and_counts() {
        let body = Body::new(10.0, DVec2::new(100.0, 100.0), DVec2::new(100.0, 50.0)).unwrap();
        let mut state = state_with(vec![body], &Settings::default());
        assert!(tick(&mut state, SIM_DT));
        assert_eq!(state.time_ticks, 1);
        assert!((state.bodies[0].pos - DVec2::new(101.6, 100.8)).length() < 1e-9);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_tick_order_integrate_then_walls() {
        // Moves past the right wall this step, then gets clamped and reflected
        let body = Body::new(10.0, DVec2::new(589.0, 300.0), DVec2::new(200.0, 0.0)).unwrap();
        let mut state = state_with(vec![body], &Settings::default());
        tick(&mut state, SIM_DT);
        assert_eq!(state.bodies[0].pos.x, 590.0);
        assert!((state.bodies[0].vel.x + 200.0 * 0.95).abs() < 1e-9);
        assert!(matches!(state.events[0], SimEvent::WallBounce { body: 0, .. }));
    }

    #[test]
    fn test_drag_pauses_everything() {
        let mut state = state_with(Scene::classic().build().unwrap(), &Settings::default());
        let before = state.bodies.clone();
        let grabbed = state.interaction.pointer_down(
            &mut state.bodies,
            DVec2::new(150.0, 150.0),
            PointerButton::Primary,
        );
        assert_eq!(grabbed, Some(0));

        assert!(!tick(&mut state, SIM_DT));
        assert_eq!(state.time_ticks, 0);
        // Other bodies keep their pre-grab state
        assert_eq!(state.bodies[1], before[1]);
        assert_eq!(state.bodies[2], before[2]);

        state.interaction.pointer_up(&mut state.bodies, PointerButton::Primary);
        assert!(tick(&mut state, SIM_DT));
        assert_ne!(state.bodies[1].pos, before[1].pos);
    }

    #[test]
    fn test_drag_excludes_only_target_when_configured() {
        let settings = Settings {
            pause_all_while_dragging: false,
            ..Settings::default()
        };
        let mut state = state_with(Scene::classic().build().unwrap(), &settings);
        state.interaction.pointer_down(
            &mut state.bodies,
            DVec2::new(150.0, 150.0),
            PointerButton::Primary,
        );
        let held = state.bodies[0].clone();
        let other = state.bodies[1].clone();

        assert!(tick(&mut state, SIM_DT));
        assert_eq!(state.bodies[0], held);
        assert_ne!(state.bodies[1].pos, other.pos);
    }

    #[test]
    fn test_determinism() {
        let settings = Settings::default();
        let scene = Scene::scatter(7, 12, settings.viewport, 8.0..24.0, 300.0);
        let mut s1 = state_with(scene.build().unwrap(), &settings);
        let mut s2 = state_with(scene.build().unwrap(), &settings);
        for _ in 0..500 {
            tick(&mut s1, SIM_DT);
            tick(&mut s2, SIM_DT);
        }
        assert_eq!(s1.bodies, s2.bodies);
        assert_eq!(s1.events, s2.events);
    }

    #[test]
    fn test_classic_scene_stays_contained() {
        let mut state = state_with(Scene::classic().build().unwrap(), &Settings::default());
        for _ in 0..2000 {
            tick(&mut state, SIM_DT);
        }
        let vp = state.viewport;
        for body in &state.bodies {
            let r = body.radius();
            // Pair separation runs after the wall pass and may push a body slightly out
            assert!(body.pos.x >= r - 10.0 && body.pos.x <= vp.width - r + 10.0);
            assert!(body.pos.y >= r - 10.0 && body.pos.y <= vp.height - r + 10.0);
        }
    }

    /// Grid cell size for generated at-rest layouts
    const CELL: f64 = 60.0;
    /// Cells per side; 9 * 60 leaves a margin inside the 600x600 default viewport
    const GRID: usize = 9;

    /// At-rest bodies, each strictly inside its own grid cell so none overlap
    /// or touch a wall
    fn resting_layout(cells: &[usize], shapes: &[(f64, f64, f64)]) -> Vec<Body> {
        cells
            .iter()
            .zip(shapes)
            .map(|(&cell, &(r, tx, ty))| {
                let origin = DVec2::new((cell % GRID) as f64, (cell / GRID) as f64) * CELL;
                // Center in [r + 1, CELL - r - 1] on each axis
                let span = CELL - 2.0 * (r + 1.0);
                let offset = DVec2::new(r + 1.0 + tx * span, r + 1.0 + ty * span);
                Body::at_rest(r, origin + offset).unwrap()
            })
            .collect()
    }

    proptest! {
        #[test]
        fn prop_idle_tick_is_idempotent(
            cells in proptest::sample::subsequence((0..GRID * GRID).collect::<Vec<_>>(), 1..12),
            shapes in proptest::collection::vec(
                (1.0f64..25.0, 0.0f64..=1.0, 0.0f64..=1.0),
                12,
            ),
            ticks in 1usize..20,
        ) {
            let bodies = resting_layout(&cells, &shapes);
            let mut state = state_with(bodies.clone(), &Settings::default());
            for _ in 0..ticks {
                prop_assert!(tick(&mut state, SIM_DT));
            }
            prop_assert_eq!(&state.bodies, &bodies);
            prop_assert!(state.events.is_empty());
            prop_assert_eq!(state.time_ticks, ticks as u64);
        }

        #[test]
        fn prop_energy_never_grows(seed in 0u64..1000) {
            let settings = Settings::default();
            let scene = Scene::scatter(seed, 8, settings.viewport, 10.0..30.0, 400.0);
            let mut state = state_with(scene.build().unwrap(), &settings);
            let mut energy = state.kinetic_energy();
            for _ in 0..200 {
                tick(&mut state, SIM_DT);
                let now = state.kinetic_energy();
                prop_assert!(now <= energy * (1.0 + 1e-9) + 1e-9);
                energy = now;
            }
        }
    }
}
