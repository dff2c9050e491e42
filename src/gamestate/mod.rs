//! Screen lifecycle
//!
//! The host engine owns the loop and calls into a [`Gamestate`] in this order:
//! `load` (reporting progress) → `post_load` → `start` → repeated
//! `process_event` / `logic` / `draw` → `stop` → `unload`. `pause`/`resume`
//! bracket periods where only `draw` is called, and `reload` follows a lost
//! display.
//!
//! Everything the screens need from the engine goes through [`Host`].

pub mod example;
pub mod game;
pub mod headless;

pub use example::ExampleScreen;
pub use game::GameScreen;
pub use headless::HeadlessHost;

use glam::Vec2;

use crate::input::Event;
use crate::renderer::{Scene, Viewport};

/// Opaque handle to a host-owned resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(pub u32);

/// Something a screen asks the host to load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource<'a> {
    Bitmap(&'a str),
    BuiltinFont,
    Shader { vertex: &'a str, fragment: &'a str },
    /// Streamed audio (music), attached to the mixer paused
    Stream(&'a str),
    /// Short sample
    Sample(&'a str),
}

/// Engine services available to a screen
pub trait Host {
    fn viewport(&self) -> Viewport;

    fn load(&mut self, resource: Resource<'_>) -> Handle;
    fn release(&mut self, handle: Handle);
    /// Pixel size of a loaded bitmap
    fn bitmap_size(&self, bitmap: Handle) -> Vec2;
    /// Report one finished loading step
    fn progress(&mut self);

    /// Start (or resume) a stream or looping sample
    fn start_audio(&mut self, handle: Handle);
    fn stop_audio(&mut self, handle: Handle);
    fn set_gain(&mut self, handle: Handle, gain: f32);
    /// Fire a one-shot sample
    fn play_sample(&mut self, handle: Handle, gain: f32);

    /// Ask the engine to stop and unload the current screen
    fn request_unload(&mut self);
}

/// A screen driven by the host engine
pub trait Gamestate {
    fn name(&self) -> &'static str;

    /// Number of `Host::progress` calls `load` makes
    fn progress_count(&self) -> u32 {
        0
    }

    fn load(&mut self, host: &mut dyn Host);

    fn post_load(&mut self, _host: &mut dyn Host) {}

    fn start(&mut self, host: &mut dyn Host);

    /// Advance by `dt` seconds
    fn logic(&mut self, host: &mut dyn Host, dt: f32);

    fn draw(&self, scene: &mut Scene);

    fn process_event(&mut self, host: &mut dyn Host, event: &Event);

    fn stop(&mut self, host: &mut dyn Host);

    fn unload(&mut self, host: &mut dyn Host);

    fn pause(&mut self, _host: &mut dyn Host) {}

    fn resume(&mut self, _host: &mut dyn Host) {}

    fn reload(&mut self, _host: &mut dyn Host) {}
}
