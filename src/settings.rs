//! Game settings and preferences
//!
//! Stored as JSON next to the save data. A missing or broken file falls back
//! to defaults.

use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Visual Effects ===
    /// Camera shake on bad touches
    pub screen_shake: bool,
    /// Particle trails behind spawned shapes
    pub trails: bool,

    // === Accessibility ===
    /// Reduced motion (no camera shake)
    pub reduced_motion: bool,

    /// Fixed RNG seed; a fresh seed is drawn each launch when unset
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            screen_shake: true,
            trails: true,

            reduced_motion: false,

            seed: None,
        }
    }
}

impl Settings {
    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings at {}: {e}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Couldn't read settings at {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), EngineError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_motion_disables_shake() {
        let mut settings = Settings::default();
        assert!(settings.effective_screen_shake());
        settings.reduced_motion = true;
        assert!(!settings.effective_screen_shake());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "trails": false, "seed": 9 }"#).unwrap();
        assert!(!settings.trails);
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.master_volume, Settings::default().master_volume);
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("gf-settings-{}.json", std::process::id()));
        let settings = Settings {
            muted: true,
            ..Default::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path), settings);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_or_broken_file_gives_defaults() {
        let dir = std::env::temp_dir();
        assert_eq!(Settings::load(&dir.join("gf-no-such-settings.json")), Settings::default());

        let broken = dir.join(format!("gf-broken-{}.json", std::process::id()));
        std::fs::write(&broken, "{ not json").unwrap();
        assert_eq!(Settings::load(&broken), Settings::default());
        let _ = std::fs::remove_file(&broken);
    }

    #[test]
    fn test_unreadable_path_gives_defaults() {
        let dir = std::env::temp_dir().join(format!("gf-settings-dir-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        assert_eq!(Settings::load(&dir), Settings::default());
        let _ = std::fs::remove_dir(&dir);
    }
}
