//! Game context and core simulation types
//!
//! One `GameState` per session. It is passed explicitly to `tick` and
//! `touch`; nothing here is global.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::lifecycle::EntityLifecycleManager;
use super::phase::GamePhase;
use super::shape::{Classification, ShapeKind};
use super::spawn::SpawnScheduler;
use super::splash::SplashController;
use super::timer::TimerQueue;
use crate::audio::AudioManager;
use crate::consts::STARTING_LIVES;
use crate::engine::EntityId;
use crate::settings::Settings;

/// Score and lives for the current run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub score: u32,
    pub lives: i32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            score: 0,
            lives: STARTING_LIVES,
        }
    }
}

impl PlayerStats {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Things that happened during a tick or touch, for the host to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Left the title screen, stats reset
    Started,
    Spawned {
        id: EntityId,
        shape: ShapeKind,
        classification: Classification,
    },
    /// Shape dropped below the screen untouched
    FellOff { id: EntityId },
    /// Shape was touched and exploded
    Destroyed {
        id: EntityId,
        classification: Classification,
    },
    Scored { score: u32 },
    LifeLost { lives: i32 },
    GameOver { score: u32 },
    ReturnedToTitle,
}

/// Complete game context
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub stats: PlayerStats,
    /// Score of the last finished run
    pub last_score: u32,
    pub high_score: u32,
    /// Last tick time (seconds); deferred tasks are scheduled against it
    pub clock: f64,
    pub spawner: SpawnScheduler,
    pub entities: EntityLifecycleManager,
    pub splash: SplashController,
    pub timers: TimerQueue,
    pub settings: Settings,
    pub audio: AudioManager,
    /// Drained by the host with [`GameState::drain_events`]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with default settings
    pub fn new(seed: u64) -> Self {
        Self::with_settings(seed, Settings::default())
    }

    pub fn with_settings(seed: u64, settings: Settings) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::TapToPlay,
            stats: PlayerStats::default(),
            last_score: 0,
            high_score: 0,
            clock: 0.0,
            spawner: SpawnScheduler::new(),
            entities: EntityLifecycleManager::new(),
            splash: SplashController::standard(),
            timers: TimerQueue::new(),
            audio: AudioManager::from_settings(&settings),
            settings,
            events: Vec::new(),
        }
    }

    /// Record a finished run
    pub fn record_run(&mut self) {
        self.last_score = self.stats.score;
        self.high_score = self.high_score.max(self.stats.score);
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::splash::TAP_TO_PLAY;

    #[test]
    fn test_new_game() {
        let state = GameState::new(42);
        assert_eq!(state.phase, GamePhase::TapToPlay);
        assert_eq!(state.stats, PlayerStats { score: 0, lives: STARTING_LIVES });
        assert!(state.entities.is_empty());
        assert!(state.splash.is_visible(TAP_TO_PLAY));
        assert!(state.timers.is_empty());
    }

    #[test]
    fn test_record_run_keeps_best() {
        let mut state = GameState::new(1);
        state.stats.score = 9;
        state.record_run();
        state.stats.score = 4;
        state.record_run();
        assert_eq!(state.last_score, 4);
        assert_eq!(state.high_score, 9);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = PlayerStats { score: 12, lives: -1 };
        stats.reset();
        assert_eq!(stats, PlayerStats::default());
    }
}
