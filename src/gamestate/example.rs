//! Placeholder screen with blinking text

use super::{Gamestate, Handle, Host, Resource};
use crate::input::{Event, InputState, Response};
use crate::renderer::{Align, Scene};

/// Blink period in logic calls
pub const BLINK_PERIOD: u32 = 60;
/// Text is visible for this many calls of each period
pub const BLINK_VISIBLE: u32 = 50;

pub const MESSAGE: &str = "Nothing to see here, move along!";

#[derive(Debug, Default)]
pub struct ExampleScreen {
    font: Option<Handle>,
    blink_counter: u32,
    input: InputState,
}

impl ExampleScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text_visible(&self) -> bool {
        self.blink_counter < BLINK_VISIBLE
    }
}

impl Gamestate for ExampleScreen {
    fn name(&self) -> &'static str {
        "example"
    }

    fn progress_count(&self) -> u32 {
        1
    }

    fn load(&mut self, host: &mut dyn Host) {
        self.font = Some(host.load(Resource::BuiltinFont));
        host.progress();
    }

    fn start(&mut self, _host: &mut dyn Host) {
        self.blink_counter = 0;
    }

    // Counts calls, not seconds
    fn logic(&mut self, _host: &mut dyn Host, _dt: f32) {
        self.blink_counter += 1;
        if self.blink_counter >= BLINK_PERIOD {
            self.blink_counter = 0;
        }
    }

    fn draw(&self, scene: &mut Scene) {
        let Some(font) = self.font else { return };
        if self.text_visible() {
            let center = scene.viewport.center();
            scene.text(font, center, Align::Centre, MESSAGE);
        }
    }

    fn process_event(&mut self, host: &mut dyn Host, event: &Event) {
        if self.input.handle(event) == Response::Exit {
            host.request_unload();
        }
    }

    fn stop(&mut self, _host: &mut dyn Host) {}

    fn unload(&mut self, host: &mut dyn Host) {
        if let Some(font) = self.font.take() {
            host.release(font);
        }
    }
}
