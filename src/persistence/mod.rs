//! Score save
//!
//! A small JSON file holding the last and best scores. Read once at startup,
//! written each time a run ends.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::{PersistState, SavedScores};
use crate::error::EngineError;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveData {
    pub last_score: u32,
    pub high_score: u32,
    /// Lives left when the last run ended
    pub last_lives: i32,
}

impl SaveData {
    /// Fold a finished run in
    pub fn record(&mut self, score: u32, lives: i32) {
        self.last_score = score;
        self.last_lives = lives;
        self.high_score = self.high_score.max(score);
    }
}

/// File-backed score save
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
    data: SaveData,
}

impl ScoreStore {
    /// Open the save at `path`; a missing or unreadable file starts fresh
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = match std::fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                log::warn!("Corrupt save at {}: {e}, starting fresh", path.display());
                SaveData::default()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No save found, starting fresh");
                SaveData::default()
            }
            Err(e) => {
                log::warn!("Couldn't read save at {}: {e}, starting fresh", path.display());
                SaveData::default()
            }
        };
        Self { path, data }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data(&self) -> &SaveData {
        &self.data
    }

    fn write(&self) -> Result<(), EngineError> {
        let json = serde_json::to_string_pretty(&self.data)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl PersistState for ScoreStore {
    fn load(&self) -> Option<SavedScores> {
        Some(SavedScores {
            last_score: self.data.last_score,
            high_score: self.data.high_score,
        })
    }

    fn save(&mut self, score: u32, lives: i32) -> Result<(), EngineError> {
        self.data.record(score, lives);
        self.write()?;
        log::info!("Scores saved to {}", self.path.display());
        Ok(())
    }
}
