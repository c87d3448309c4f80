//! Game phase state machine
//!
//! The transition table is the only place phases change. Anything not listed
//! in [`GamePhase::next`] is ignored by the caller.

use serde::{Deserialize, Serialize};

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title splash, waiting for a tap
    #[default]
    TapToPlay,
    /// Active gameplay
    Playing,
    /// Run ended, splash shown until the reset timer fires
    GameOver,
}

/// Things that can move the phase machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseTrigger {
    /// Tap anywhere on screen
    Tap,
    /// Lives dropped to zero after a bad touch
    LivesExhausted,
    /// Game over splash has been up long enough
    ResetElapsed,
}

impl GamePhase {
    pub const ALL: [GamePhase; 3] = [GamePhase::TapToPlay, GamePhase::Playing, GamePhase::GameOver];

    /// Phase reached from `self` on `trigger`, or `None` if the edge doesn't exist
    pub fn next(self, trigger: PhaseTrigger) -> Option<GamePhase> {
        use GamePhase::*;
        use PhaseTrigger::*;

        match (self, trigger) {
            (TapToPlay, Tap) => Some(Playing),
            // Taps while playing are hit-tested, the phase stays put
            (Playing, Tap) => Some(Playing),
            (Playing, LivesExhausted) => Some(GameOver),
            // Input is swallowed until the timer brings the title back
            (GameOver, Tap) => Some(GameOver),
            (GameOver, ResetElapsed) => Some(TapToPlay),
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        *self == GamePhase::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TRIGGERS: [PhaseTrigger; 3] = [
        PhaseTrigger::Tap,
        PhaseTrigger::LivesExhausted,
        PhaseTrigger::ResetElapsed,
    ];

    #[test]
    fn test_full_cycle() {
        let phase = GamePhase::default();
        assert_eq!(phase, GamePhase::TapToPlay);
        let phase = phase.next(PhaseTrigger::Tap).unwrap();
        assert_eq!(phase, GamePhase::Playing);
        let phase = phase.next(PhaseTrigger::LivesExhausted).unwrap();
        assert_eq!(phase, GamePhase::GameOver);
        assert_eq!(phase.next(PhaseTrigger::Tap), Some(GamePhase::GameOver));
        let phase = phase.next(PhaseTrigger::ResetElapsed).unwrap();
        assert_eq!(phase, GamePhase::TapToPlay);
    }

    #[test]
    fn test_exactly_five_edges() {
        let edges: Vec<_> = GamePhase::ALL
            .iter()
            .flat_map(|p| TRIGGERS.iter().filter_map(move |t| p.next(*t).map(|n| (*p, *t, n))))
            .collect();
        assert_eq!(edges.len(), 5);
    }

    #[test]
    fn test_illegal_edges() {
        assert_eq!(GamePhase::TapToPlay.next(PhaseTrigger::LivesExhausted), None);
        assert_eq!(GamePhase::TapToPlay.next(PhaseTrigger::ResetElapsed), None);
        assert_eq!(GamePhase::Playing.next(PhaseTrigger::ResetElapsed), None);
        assert_eq!(GamePhase::GameOver.next(PhaseTrigger::LivesExhausted), None);
    }

    fn trigger() -> impl Strategy<Value = PhaseTrigger> {
        prop_oneof![
            Just(PhaseTrigger::Tap),
            Just(PhaseTrigger::LivesExhausted),
            Just(PhaseTrigger::ResetElapsed),
        ]
    }

    proptest! {
        #[test]
        fn random_trigger_walks_stay_on_legal_edges(triggers in prop::collection::vec(trigger(), 0..64)) {
            let mut phase = GamePhase::default();
            for t in triggers {
                if let Some(next) = phase.next(t) {
                    let legal = matches!(
                        (phase, next),
                        (GamePhase::TapToPlay, GamePhase::Playing)
                            | (GamePhase::Playing, GamePhase::Playing)
                            | (GamePhase::Playing, GamePhase::GameOver)
                            | (GamePhase::GameOver, GamePhase::GameOver)
                            | (GamePhase::GameOver, GamePhase::TapToPlay)
                    );
                    prop_assert!(legal, "{:?} -> {:?}", phase, next);
                    phase = next;
                }
            }
        }
    }
}
