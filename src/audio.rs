//! Sound cues and volume handling
//!
//! Playback itself belongs to the engine; this module decides which cue to
//! fire and how loud.

use crate::engine::AudioCue;
use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// A good shape was launched
    SpawnGood,
    /// A bad (black) shape was launched
    SpawnBad,
    /// Good shape touched
    ExplodeGood,
    /// Bad shape touched
    ExplodeBad,
    /// Last life lost
    GameOver,
}

impl SoundCue {
    /// Name the engine knows the cue by
    pub fn name(&self) -> &'static str {
        match self {
            SoundCue::SpawnGood => "SpawnGood",
            SoundCue::SpawnBad => "SpawnBad",
            SoundCue::ExplodeGood => "ExplodeGood",
            SoundCue::ExplodeBad => "ExplodeBad",
            SoundCue::GameOver => "GameOver",
        }
    }
}

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut audio = Self::new();
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a cue on the engine; a cue that can't be loaded is logged and skipped
    pub fn play<A: AudioCue + ?Sized>(&self, out: &mut A, cue: SoundCue) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        if let Err(e) = out.play(cue.name(), vol) {
            log::warn!("{e}, continuing without sound");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::HeadlessEngine;

    #[test]
    fn test_volume_clamped() {
        let mut audio = AudioManager::new();
        audio.set_master_volume(2.0);
        audio.set_sfx_volume(-1.0);
        assert_eq!(audio.effective_volume(), 0.0);
        audio.set_sfx_volume(0.5);
        assert_eq!(audio.effective_volume(), 0.5);
    }

    #[test]
    fn test_play_forwards_cue() {
        let audio = AudioManager::new();
        let mut engine = HeadlessEngine::new();
        audio.play(&mut engine, SoundCue::SpawnBad);
        assert_eq!(engine.sounds(), ["SpawnBad"]);
    }

    #[test]
    fn test_muted_plays_nothing() {
        let mut audio = AudioManager::new();
        audio.set_muted(true);
        let mut engine = HeadlessEngine::new();
        audio.play(&mut engine, SoundCue::GameOver);
        assert!(engine.sounds().is_empty());
    }

    #[test]
    fn test_missing_sound_is_not_fatal() {
        let audio = AudioManager::new();
        let mut engine = HeadlessEngine::new();
        engine.mark_missing("ExplodeGood");
        audio.play(&mut engine, SoundCue::ExplodeGood);
        audio.play(&mut engine, SoundCue::ExplodeBad);
        assert_eq!(engine.sounds(), ["ExplodeBad"]);
    }
}
