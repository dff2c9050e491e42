//! Audio state for the gameplay screen
//!
//! The host owns the actual streams and samples. The mixer only decides what
//! should be audible and queues [`AudioCommand`]s for the screen to forward.

use serde::{Deserialize, Serialize};

/// One-shot sample cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    /// Craft got spotted
    Lost,
    /// New level begins
    Start,
}

/// Continuous channels with adjustable gain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    /// Background music stream
    Music,
    /// Looping sleigh engine sample
    Engine,
}

/// Instruction for the host mixer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AudioCommand {
    Play { cue: SoundCue, gain: f32 },
    SetGain { channel: Channel, gain: f32 },
    StartMusic,
    StopAll,
}

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct Mixer {
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
    /// Music and engine are cut while the craft is caught
    silenced: bool,
    music_playing: bool,
    /// Engine loudness from craft speed (0-1)
    engine_level: f32,
    /// Last gains sent to the host, to avoid resending unchanged values
    sent: [Option<f32>; 2],
    pending: Vec<AudioCommand>,
}

impl Default for Mixer {
    fn default() -> Self {
        Self::new()
    }
}

impl Mixer {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
            silenced: false,
            music_playing: false,
            engine_level: 0.0,
            sent: [None; 2],
            pending: Vec::new(),
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
        self.sync_gains();
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
        self.sync_gains();
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
        self.sync_gains();
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.sync_gains();
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn is_silenced(&self) -> bool {
        self.silenced
    }

    pub fn music_playing(&self) -> bool {
        self.music_playing
    }

    fn sfx_gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Current gain of a continuous channel
    pub fn channel_gain(&self, channel: Channel) -> f32 {
        if self.muted || self.silenced {
            return 0.0;
        }
        match channel {
            Channel::Music => self.master_volume * self.music_volume,
            Channel::Engine => self.master_volume * self.sfx_volume * self.engine_level,
        }
    }

    /// Queue a one-shot cue
    pub fn play(&mut self, cue: SoundCue) {
        let gain = self.sfx_gain();
        if gain <= 0.0 {
            return;
        }
        self.pending.push(AudioCommand::Play { cue, gain });
    }

    /// Start background music if it isn't already going
    pub fn start_music(&mut self) {
        if self.music_playing {
            return;
        }
        self.music_playing = true;
        self.pending.push(AudioCommand::StartMusic);
        self.sync_gains();
    }

    /// Cut music and engine (craft caught)
    pub fn silence(&mut self) {
        self.silenced = true;
        self.sync_gains();
    }

    /// Bring music and engine back after a silence
    pub fn restore(&mut self) {
        self.silenced = false;
        self.sync_gains();
    }

    /// Engine loudness follows how fast the craft is moving
    pub fn set_engine_level(&mut self, level: f32) {
        self.engine_level = level.clamp(0.0, 1.0);
        self.sync_gains();
    }

    /// Stop everything (screen stopped)
    pub fn stop(&mut self) {
        self.music_playing = false;
        self.silenced = false;
        self.engine_level = 0.0;
        self.sent = [None; 2];
        self.pending.push(AudioCommand::StopAll);
    }

    fn sync_gains(&mut self) {
        for (i, channel) in [Channel::Music, Channel::Engine].into_iter().enumerate() {
            let gain = self.channel_gain(channel);
            if self.sent[i] != Some(gain) {
                self.sent[i] = Some(gain);
                self.pending.push(AudioCommand::SetGain { channel, gain });
            }
        }
    }

    /// Take queued commands for the host
    pub fn drain(&mut self) -> Vec<AudioCommand> {
        std::mem::take(&mut self.pending)
    }
}
