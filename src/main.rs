//! Ballpit entry point
//!
//! Headless native driver: runs a scene at the fixed tick rate (without
//! sleeping), performs a scripted grab-and-throw, and prints the final body
//! states as JSON.
//!
//! Usage: `ballpit [settings.json] [scene.json]`

use glam::DVec2;

use ballpit::renderer::MeshRenderer;
use ballpit::sim::{PointerButton, Scene, SimEvent};
use ballpit::{Result, Settings, Simulation};

/// Ticks before and after the scripted throw (about 3 seconds each at 16 ms)
const WARMUP_TICKS: u32 = 180;
const SETTLE_TICKS: u32 = 180;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let scene = match args.next() {
        Some(path) => Scene::load(path)?,
        None => Scene::classic(),
    };

    log::info!("Ballpit starting with scene '{}'", scene.name);
    let mut sim = Simulation::from_scene(&scene, &settings)?;
    let mut mesh = MeshRenderer::new();

    run_ticks(&mut sim, &mut mesh, WARMUP_TICKS);
    throw_first_body(&mut sim);
    run_ticks(&mut sim, &mut mesh, SETTLE_TICKS);

    log::info!(
        "Done: {} ticks, {} frames ({} vertex bytes in the last), kinetic energy {:.1}",
        sim.state().time_ticks,
        mesh.frames(),
        mesh.vertex_bytes().len(),
        sim.state().kinetic_energy()
    );
    println!("{}", sim.snapshot_json()?);
    Ok(())
}

/// Drive the timer hook and repaint when asked, like a window event loop would
fn run_ticks(sim: &mut Simulation, mesh: &mut MeshRenderer, ticks: u32) {
    for _ in 0..ticks {
        sim.on_tick();
        if sim.take_redraw() {
            sim.render(mesh);
        }
        log_events(sim);
    }
}

/// Grab body 0 at its center, drag it toward the viewport center and let go
fn throw_first_body(sim: &mut Simulation) {
    let Some(start) = sim.bodies().first().map(|b| b.pos) else {
        log::warn!("Scene has no bodies to throw");
        return;
    };
    if sim.on_pointer_down(start, PointerButton::Primary).is_none() {
        return;
    }

    let target = sim.viewport().center();
    let steps = 8;
    for i in 1..=steps {
        let t = i as f64 / steps as f64;
        sim.on_pointer_move(start.lerp(target, t));
        // Timer keeps firing during the drag; physics stays paused
        sim.on_tick();
    }
    sim.on_pointer_up(PointerButton::Primary);
    log_events(sim);

    let vel: DVec2 = sim.bodies()[0].vel;
    log::info!("Threw body 0 at ({:.1}, {:.1})", vel.x, vel.y);
}

fn log_events(sim: &mut Simulation) {
    for event in sim.drain_events() {
        match event {
            SimEvent::Impact { a, b, impulse } => log::debug!("impact {a}-{b} J={impulse:.2}"),
            SimEvent::WallBounce { body, axis, edge } => {
                log::trace!("body {body} bounced off {edge:?} {axis:?} wall")
            }
            SimEvent::DragStarted { body } => log::info!("grabbed body {body}"),
            SimEvent::Released { body, velocity } => {
                log::info!("released body {body} at ({:.1}, {:.1})", velocity.x, velocity.y)
            }
        }
    }
}
