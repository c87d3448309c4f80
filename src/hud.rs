//! Heads-up display readout

use std::fmt;

use crate::sim::state::GameState;

/// Values pushed to the engine's HUD once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudReadout {
    pub score: u32,
    pub lives: i32,
    pub high_score: u32,
}

impl HudReadout {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score: state.stats.score,
            lives: state.stats.lives,
            high_score: state.high_score,
        }
    }
}

impl fmt::Display for HudReadout {
    /// Lives, then high score and score padded to four digits
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "❤️{}  😎{:04} 💥{:04}",
            self.lives.max(0),
            self.high_score,
            self.score
        )
    }
}
