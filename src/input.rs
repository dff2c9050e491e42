//! Keyboard input
//!
//! The host delivers discrete key-down/key-up events; this turns them into
//! the held [`Controls`] the simulation reads once per tick. Arrow keys and
//! WASD are mirrored, and each physical key is tracked on its own so that
//! releasing one mirror doesn't cancel the other.

use serde::{Deserialize, Serialize};

use crate::sim::Controls;

/// Keys the gamestates care about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    S,
    A,
    D,
    Escape,
}

/// Logical control a key maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Accelerate,
    Brake,
    TurnLeft,
    TurnRight,
    Exit,
}

impl Key {
    pub fn action(self) -> Action {
        match self {
            Key::Up | Key::W => Action::Accelerate,
            Key::Down | Key::S => Action::Brake,
            Key::Left | Key::A => Action::TurnLeft,
            Key::Right | Key::D => Action::TurnRight,
            Key::Escape => Action::Exit,
        }
    }

    /// Which of the two mirrored keys this is (0 = arrows, 1 = WASD)
    fn mirror(self) -> usize {
        match self {
            Key::W | Key::S | Key::A | Key::D => 1,
            _ => 0,
        }
    }
}

/// Input event from the host event queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    KeyDown(Key),
    KeyUp(Key),
}

/// What the screen should do in response to an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    None,
    /// Leave this screen
    Exit,
}

/// Held state of each mirrored control key
#[derive(Debug, Clone, Default)]
pub struct InputState {
    accelerate: [bool; 2],
    brake: [bool; 2],
    left: [bool; 2],
    right: [bool; 2],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event
    pub fn handle(&mut self, event: &Event) -> Response {
        let (key, down) = match *event {
            Event::KeyDown(key) => (key, true),
            Event::KeyUp(key) => (key, false),
        };
        let slot = key.mirror();
        match key.action() {
            Action::Accelerate => self.accelerate[slot] = down,
            Action::Brake => self.brake[slot] = down,
            Action::TurnLeft => self.left[slot] = down,
            Action::TurnRight => self.right[slot] = down,
            Action::Exit if down => return Response::Exit,
            Action::Exit => {}
        }
        Response::None
    }

    /// Release everything (focus loss, screen restart)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Controls for the next tick
    pub fn controls(&self) -> Controls {
        Controls {
            accelerate: self.accelerate.iter().any(|&k| k),
            brake: self.brake.iter().any(|&k| k),
            left: self.left.iter().any(|&k| k),
            right: self.right.iter().any(|&k| k),
        }
    }
}
