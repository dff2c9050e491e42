//! Sleigh Run headless runner
//!
//! Drives the gameplay screen through a headless host with a simple
//! autopilot at the fixed tick rate. Useful for soak-testing the simulation
//! and for eyeballing logs (`RUST_LOG=debug`).

use std::path::Path;

use sleigh_run::consts::SIM_DT;
use sleigh_run::gamestate::{ExampleScreen, GameScreen, Gamestate, HeadlessHost};
use sleigh_run::input::{Event, Key};
use sleigh_run::renderer::{Scene, Viewport};
use sleigh_run::sim::{Controls, GameState};
use sleigh_run::Settings;

/// Seconds of simulated play
const RUN_SECS: u32 = 60;

/// Climb from the spawn point, bank right near the top and cruise east
fn autopilot(state: &GameState) -> Controls {
    Controls {
        accelerate: true,
        right: state.craft.pos.y < 0.15 && state.craft.rot > std::f32::consts::PI,
        ..Default::default()
    }
}

/// Turn wanted controls into key transitions, like a player would press them
fn key_events(held: &Controls, wanted: &Controls) -> Vec<Event> {
    let pairs = [
        (held.accelerate, wanted.accelerate, Key::Up),
        (held.brake, wanted.brake, Key::Down),
        (held.left, wanted.left, Key::Left),
        (held.right, wanted.right, Key::Right),
    ];
    pairs
        .into_iter()
        .filter(|(was, now, _)| was != now)
        .map(|(_, now, key)| if now { Event::KeyDown(key) } else { Event::KeyUp(key) })
        .collect()
}

fn run_example(host: &mut HeadlessHost) {
    let mut screen = ExampleScreen::new();
    screen.load(host);
    screen.start(host);
    let mut visible_frames = 0;
    for _ in 0..120 {
        screen.logic(host, SIM_DT);
        let mut scene = Scene::new(host.viewport);
        screen.draw(&mut scene);
        if !scene.commands.is_empty() {
            visible_frames += 1;
        }
    }
    screen.stop(host);
    screen.unload(host);
    log::info!("Example screen: text shown {}/120 frames", visible_frames);
}

fn run_game(host: &mut HeadlessHost, settings: Settings) {
    let mut screen = GameScreen::new(settings);
    screen.load(host);
    log::info!(
        "Loaded {}/{} steps",
        host.progress,
        screen.progress_count()
    );
    screen.post_load(host);
    screen.start(host);

    let mut held = Controls::default();
    let mut spotted = 0;
    let mut best_level: u32 = 0;
    let mut peak_vertex_bytes = 0;
    for _ in 0..(RUN_SECS as f32 / SIM_DT) as u32 {
        let Some(state) = screen.state() else { break };
        let wanted = autopilot(state);
        for event in key_events(&held, &wanted) {
            screen.process_event(host, &event);
        }
        held = wanted;

        let was_paused = screen.state().is_some_and(|s| s.is_paused());
        screen.logic(host, SIM_DT);

        let mut scene = Scene::new(host.viewport);
        screen.draw(&mut scene);
        peak_vertex_bytes = peak_vertex_bytes.max(scene.vertex_bytes().len());

        if let Some(state) = screen.state() {
            if !was_paused && state.is_paused() {
                spotted += 1;
            }
            if state.level > best_level {
                best_level = state.level;
            }
        }
    }

    if let Some(state) = screen.state() {
        match serde_json::to_string(&state.craft) {
            Ok(json) => log::info!("Final craft: {}", json),
            Err(e) => log::warn!("Could not serialize craft: {}", e),
        }
    }
    log::info!(
        "Autopilot reached level {} and was spotted {} times in {}s",
        best_level.saturating_add(1),
        spotted,
        RUN_SECS
    );
    log::info!("Peak triangle upload: {} bytes", peak_vertex_bytes);

    screen.stop(host);
    screen.unload(host);
}

fn main() {
    env_logger::init();
    log::info!("Sleigh Run (headless) starting...");

    let settings_path = Path::new("settings.json");
    let settings = Settings::load(settings_path);
    if !settings_path.exists() {
        // Leave an editable copy of the defaults behind
        settings.save(settings_path);
    }
    let mut host = HeadlessHost::new(Viewport::default());

    run_example(&mut host);
    run_game(&mut host, settings);

    log::info!("{} resources still loaded", host.live());
}
