//! Fixed timestep simulation tick
//!
//! Order within a tick: stars, pause countdown (nothing else runs while
//! frozen), craft motion, drones in slot order, exit check.

use super::craft::Controls;
use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Advance the game state by one tick of `dt` seconds
pub fn tick(state: &mut GameState, controls: &Controls, dt: f32) {
    state.time_ticks += 1;
    state.stars.update(dt);

    if state.is_paused() {
        state.pause -= dt;
        if state.pause <= PAUSE_EPSILON {
            state.start_level(true);
        }
        return;
    }

    state.craft.integrate(controls);

    for (index, drone) in state.drones.iter_mut().enumerate() {
        if !drone.enabled {
            continue;
        }
        if drone.update(dt, &mut state.rng) {
            log::debug!("Drone {} sweep reseeded: {:.2}s", index, drone.left);
        }
        if drone.spots(&state.craft) {
            log::info!(
                "Spotted by drone {} on level {} at tick {}",
                index,
                state.level,
                state.time_ticks
            );
            state.pause = LOST_PAUSE_SECS;
            state.events.push(GameEvent::Spotted { drone: index });
            return;
        }
    }

    if state.craft.at_exit() {
        log::info!("Level {} cleared", state.level);
        state.events.push(GameEvent::LevelCleared { level: state.level });
        state.level = state.level.saturating_add(1);
        state.start_level(false);
    }
}
