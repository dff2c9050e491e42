//! A host without a display or sound card
//!
//! Hands out sequential handles and records every call, which is enough to
//! drive screens from the native runner and from tests.

use glam::Vec2;

use super::{Handle, Host, Resource};
use crate::renderer::Viewport;

/// Audio call made by a screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AudioCall {
    Start(Handle),
    Stop(Handle),
    Gain(Handle, f32),
    Play(Handle, f32),
}

#[derive(Debug, Default)]
pub struct HeadlessHost {
    pub viewport: Viewport,
    /// Loaded resources by handle, with a description
    pub loaded: Vec<(Handle, String)>,
    pub released: Vec<Handle>,
    pub progress: u32,
    pub audio: Vec<AudioCall>,
    pub unload_requested: bool,
    next_id: u32,
}

impl HeadlessHost {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Default::default()
        }
    }

    /// Handle of the first loaded resource whose description contains `name`
    pub fn handle_of(&self, name: &str) -> Option<Handle> {
        self.loaded
            .iter()
            .find(|(_, desc)| desc.contains(name))
            .map(|(h, _)| *h)
    }

    /// Resources loaded and not yet released
    pub fn live(&self) -> usize {
        self.loaded
            .iter()
            .filter(|(h, _)| !self.released.contains(h))
            .count()
    }

    /// Last gain set on a handle
    pub fn gain(&self, handle: Handle) -> Option<f32> {
        self.audio.iter().rev().find_map(|call| match *call {
            AudioCall::Gain(h, g) if h == handle => Some(g),
            _ => None,
        })
    }

    pub fn samples_played(&self, handle: Handle) -> usize {
        self.audio
            .iter()
            .filter(|call| matches!(call, AudioCall::Play(h, _) if *h == handle))
            .count()
    }
}

impl Host for HeadlessHost {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn load(&mut self, resource: Resource<'_>) -> Handle {
        self.next_id += 1;
        let handle = Handle(self.next_id);
        let desc = match resource {
            Resource::Bitmap(path) => format!("bitmap:{path}"),
            Resource::BuiltinFont => "font:builtin".to_string(),
            Resource::Shader { vertex, fragment } => format!("shader:{vertex}+{fragment}"),
            Resource::Stream(path) => format!("stream:{path}"),
            Resource::Sample(path) => format!("sample:{path}"),
        };
        log::debug!("Loaded {} as {:?}", desc, handle);
        self.loaded.push((handle, desc));
        handle
    }

    fn release(&mut self, handle: Handle) {
        self.released.push(handle);
    }

    fn bitmap_size(&self, _bitmap: Handle) -> Vec2 {
        Vec2::new(64.0, 64.0)
    }

    fn progress(&mut self) {
        self.progress += 1;
    }

    fn start_audio(&mut self, handle: Handle) {
        self.audio.push(AudioCall::Start(handle));
    }

    fn stop_audio(&mut self, handle: Handle) {
        self.audio.push(AudioCall::Stop(handle));
    }

    fn set_gain(&mut self, handle: Handle, gain: f32) {
        self.audio.push(AudioCall::Gain(handle, gain));
    }

    fn play_sample(&mut self, handle: Handle, gain: f32) {
        self.audio.push(AudioCall::Play(handle, gain));
    }

    fn request_unload(&mut self) {
        self.unload_requested = true;
    }
}
