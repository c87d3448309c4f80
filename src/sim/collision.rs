//! Score and life bookkeeping for touched shapes

use super::shape::Classification;
use super::state::PlayerStats;

/// What a touch did to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// Good shape: score went up
    Scored { score: u32 },
    /// Bad shape: a life was lost, run continues
    LifeLost { lives: i32 },
    /// Bad shape took the last life
    LivesExhausted,
}

impl CollisionOutcome {
    pub fn is_bad(&self) -> bool {
        !matches!(self, CollisionOutcome::Scored { .. })
    }
}

/// Apply a touch on a shape of the given class to the player's stats
pub fn resolve_touch(stats: &mut PlayerStats, classification: Classification) -> CollisionOutcome {
    match classification {
        Classification::Good => {
            stats.score = stats.score.saturating_add(1);
            CollisionOutcome::Scored { score: stats.score }
        }
        Classification::Bad => {
            stats.lives -= 1;
            if stats.lives <= 0 {
                CollisionOutcome::LivesExhausted
            } else {
                CollisionOutcome::LifeLost { lives: stats.lives }
            }
        }
    }
}
