//! Game settings and preferences
//!
//! Stored as JSON next to the game. Missing fields take their defaults, and
//! an unreadable file falls back to defaults with a warning.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::audio::Mixer;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Start muted
    pub muted: bool,

    // === Gameplay ===
    /// Fixed run seed; random per run when unset
    pub seed: Option<u64>,
    /// Level to begin on
    pub start_level: u32,

    // === Debug ===
    /// Mark the craft points used for hit detection
    pub show_body_samples: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,

            seed: None,
            start_level: 0,

            show_body_samples: false,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::info!("No settings at {} ({}), using defaults", path.display(), e);
                return Self::default();
            }
        };
        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring bad settings in {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to a file
    pub fn save(&self, path: &Path) {
        let json = match self.to_json() {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
                return;
            }
        };
        match std::fs::write(path, json) {
            Ok(()) => log::info!("Settings saved"),
            Err(e) => log::warn!("Failed to save settings to {}: {}", path.display(), e),
        }
    }

    /// Seed for a new run
    pub fn run_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Push volume preferences into a mixer
    pub fn apply_audio(&self, mixer: &mut Mixer) {
        mixer.set_master_volume(self.master_volume);
        mixer.set_sfx_volume(self.sfx_volume);
        mixer.set_music_volume(self.music_volume);
        mixer.set_muted(self.muted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "start_level": 2 }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.start_level, 2);
        assert_eq!(settings.master_volume, 0.8);
        assert!(!settings.show_body_samples);
    }

    #[test]
    fn test_bad_json_is_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_load_missing_file_defaults() {
        let settings = Settings::load(Path::new("/nonexistent/sleigh-run/settings.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("sleigh-run-settings-{}.json", std::process::id()));
        let settings = Settings {
            seed: Some(9),
            music_volume: 0.25,
            ..Default::default()
        };
        settings.save(&path);
        assert_eq!(Settings::load(&path), settings);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_fixed_seed() {
        let settings = Settings {
            seed: Some(5),
            ..Default::default()
        };
        assert_eq!(settings.run_seed(), 5);
    }
}
