//! Errors reported by engine collaborators
//!
//! None of these are fatal to the game loop: callers log them and carry on.

use std::fmt;

use thiserror::Error;

/// Kind of cosmetic resource an engine failed to load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    ParticleSystem,
    Sound,
    Texture,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResourceKind::ParticleSystem => "particle system",
            ResourceKind::Sound => "sound",
            ResourceKind::Texture => "texture",
        })
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("couldn't load the {kind} `{name}`")]
    MissingResource { kind: ResourceKind, name: String },
    #[error("failed to write save data: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode save data: {0}")]
    Json(#[from] serde_json::Error),
}

impl EngineError {
    pub fn missing(kind: ResourceKind, name: impl Into<String>) -> Self {
        EngineError::MissingResource {
            kind,
            name: name.into(),
        }
    }
}
