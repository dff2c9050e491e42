//! Gameplay screen
//!
//! Glue between the host and the simulation: key events feed the held
//! controls, each logic call runs one simulation tick, and tick events drive
//! the mixer. Drawing turns the state into a draw list.

use glam::Vec2;

use super::{Gamestate, Handle, Host, Resource};
use crate::audio::{AudioCommand, Channel, Mixer, SoundCue};
use crate::input::{Event, InputState, Response};
use crate::renderer::{Align, DrawCommand, Scene, Sprite, Vertex, colors, shapes};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};

/// Where the houses strip is drawn (pixels)
pub const HOUSES_POS: Vec2 = Vec2::new(0.0, 1260.0);

/// Everything loaded from the host, released together on unload
#[derive(Debug, Clone, Copy)]
struct Resources {
    star: Handle,
    star_size: Vec2,
    houses: Handle,
    craft: Handle,
    invert: Handle,
    font: Handle,
    music: Handle,
    engine: Handle,
    lost: Handle,
    start: Handle,
}

/// Load one resource and report the step
fn step(host: &mut dyn Host, resource: Resource<'_>) -> Handle {
    let handle = host.load(resource);
    host.progress();
    handle
}

impl Resources {
    /// Loading steps reported by `load`
    const STEPS: u32 = 9;

    fn load(host: &mut dyn Host) -> Self {
        let star = step(host, Resource::Bitmap("star.png"));
        let star_size = host.bitmap_size(star);
        Self {
            star,
            star_size,
            houses: step(host, Resource::Bitmap("houses.png")),
            craft: step(host, Resource::Bitmap("santa.png")),
            invert: step(
                host,
                Resource::Shader {
                    vertex: "shaders/vertex.glsl",
                    fragment: "shaders/invert.glsl",
                },
            ),
            font: step(host, Resource::BuiltinFont),
            music: step(host, Resource::Stream("music.flac")),
            engine: step(host, Resource::Sample("sleigh.flac")),
            lost: step(host, Resource::Sample("lost.flac")),
            start: step(host, Resource::Sample("start.flac")),
        }
    }

    fn handles(&self) -> [Handle; 9] {
        [
            self.star,
            self.houses,
            self.craft,
            self.invert,
            self.font,
            self.music,
            self.engine,
            self.lost,
            self.start,
        ]
    }

    fn cue(&self, cue: SoundCue) -> Handle {
        match cue {
            SoundCue::Lost => self.lost,
            SoundCue::Start => self.start,
        }
    }

    fn channel(&self, channel: Channel) -> Handle {
        match channel {
            Channel::Music => self.music,
            Channel::Engine => self.engine,
        }
    }
}

#[derive(Debug)]
pub struct GameScreen {
    settings: Settings,
    resources: Option<Resources>,
    state: Option<GameState>,
    input: InputState,
    mixer: Mixer,
    /// Drone that caught the craft, while frozen
    spotted: Option<usize>,
}

impl GameScreen {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            resources: None,
            state: None,
            input: InputState::new(),
            mixer: Mixer::new(),
            spotted: None,
        }
    }

    /// Running simulation, once started
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn state_mut(&mut self) -> Option<&mut GameState> {
        self.state.as_mut()
    }

    pub fn mixer(&self) -> &Mixer {
        &self.mixer
    }

    fn handle_events(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        for event in state.drain_events() {
            match event {
                GameEvent::Spotted { drone } => {
                    self.spotted = Some(drone);
                    self.mixer.silence();
                    self.mixer.play(SoundCue::Lost);
                }
                GameEvent::LevelCleared { .. } => {
                    self.mixer.play(SoundCue::Start);
                }
                GameEvent::LevelStarted { level, .. } => {
                    self.spotted = None;
                    self.mixer.restore();
                    if level == 0 {
                        self.mixer.start_music();
                    }
                }
            }
        }
        if !state.is_paused() {
            self.mixer.set_engine_level(state.craft.speed.abs());
        }
    }

    /// Hand queued mixer commands to the host
    fn flush_audio(&mut self, host: &mut dyn Host) {
        let commands = self.mixer.drain();
        let Some(res) = self.resources else {
            return;
        };
        for command in commands {
            match command {
                AudioCommand::Play { cue, gain } => host.play_sample(res.cue(cue), gain),
                AudioCommand::SetGain { channel, gain } => host.set_gain(res.channel(channel), gain),
                AudioCommand::StartMusic => host.start_audio(res.music),
                AudioCommand::StopAll => {
                    host.stop_audio(res.music);
                    host.stop_audio(res.engine);
                }
            }
        }
    }
}

impl Gamestate for GameScreen {
    fn name(&self) -> &'static str {
        "game"
    }

    fn progress_count(&self) -> u32 {
        Resources::STEPS
    }

    fn load(&mut self, host: &mut dyn Host) {
        log::info!("Loading game screen");
        self.resources = Some(Resources::load(host));
    }

    fn start(&mut self, host: &mut dyn Host) {
        let seed = self.settings.run_seed();
        log::info!("Starting run with seed {}", seed);

        self.input.clear();
        self.spotted = None;
        self.settings.apply_audio(&mut self.mixer);
        self.flush_audio(host);
        if let Some(res) = self.resources {
            host.start_audio(res.engine);
        }
        self.state = Some(GameState::new(seed, self.settings.start_level));
        self.handle_events();
        self.flush_audio(host);
    }

    fn logic(&mut self, host: &mut dyn Host, dt: f32) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        tick(state, &self.input.controls(), dt);
        self.handle_events();
        self.flush_audio(host);
    }

    fn draw(&self, scene: &mut Scene) {
        let (Some(res), Some(state)) = (self.resources, self.state.as_ref()) else {
            return;
        };
        let viewport = scene.viewport;

        scene.push(DrawCommand::Gradient {
            top: colors::SKY_TOP,
            bottom: colors::SKY_BOTTOM,
        });
        for star in &state.stars.stars {
            scene.push(DrawCommand::Sprite(shapes::star_sprite(
                star,
                res.star,
                res.star_size,
                &viewport,
            )));
        }
        scene.push(DrawCommand::Sprite(Sprite::at(res.houses, HOUSES_POS)));

        let cones: Vec<Vertex> = state
            .active_drones()
            .flat_map(|(i, drone)| shapes::drone_cone(drone, &viewport, self.spotted == Some(i)))
            .collect();
        if !cones.is_empty() {
            scene.push(DrawCommand::Triangles(cones));
        }

        scene.push(DrawCommand::UseShader(Some(res.invert)));
        scene.push(DrawCommand::Sprite(shapes::craft_sprite(
            &state.craft,
            res.craft,
            &viewport,
        )));
        scene.push(DrawCommand::UseShader(None));

        if self.settings.show_body_samples {
            let markers = state
                .craft
                .body_points()
                .iter()
                .flat_map(|&p| shapes::marker(viewport.to_pixels(p), colors::WHITE))
                .collect();
            scene.push(DrawCommand::Triangles(markers));
        }

        scene.text(
            res.font,
            Vec2::new(viewport.width - 40.0, 40.0),
            Align::Left,
            format!("Level {}", state.level.saturating_add(1)),
        );
    }

    fn process_event(&mut self, host: &mut dyn Host, event: &Event) {
        if self.input.handle(event) == Response::Exit {
            host.request_unload();
        }
    }

    fn stop(&mut self, host: &mut dyn Host) {
        self.mixer.stop();
        self.flush_audio(host);
        self.input.clear();
    }

    fn unload(&mut self, host: &mut dyn Host) {
        if let Some(res) = self.resources.take() {
            for handle in res.handles() {
                host.release(handle);
            }
        }
        self.state = None;
        log::info!("Game screen unloaded");
    }

    fn pause(&mut self, host: &mut dyn Host) {
        self.input.clear();
        self.mixer.set_muted(true);
        self.flush_audio(host);
    }

    fn resume(&mut self, host: &mut dyn Host) {
        self.mixer.set_muted(self.settings.muted);
        self.flush_audio(host);
    }
}
