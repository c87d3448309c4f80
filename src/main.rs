//! Geometry Fighter demo entry point
//!
//! Plays the game against the headless engine with a simple autoplayer and
//! logs what happens. Pass a settings JSON path as the first argument.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts drive the library directly
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use glam::Vec2;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use geometry_fighter::Settings;
    use geometry_fighter::consts::*;
    use geometry_fighter::engine::HeadlessEngine;
    use geometry_fighter::persistence::ScoreStore;
    use geometry_fighter::sim::{self, Classification, GameEvent, GamePhase, GameState};

    /// Simulated play time (seconds)
    const DEMO_SECONDS: f64 = 120.0;
    /// Minimum gap between two autoplayer taps (seconds)
    const REACTION_TIME: f64 = 0.35;
    /// Chance the autoplayer goes for a black shape
    const MISTAKE_CHANCE: f64 = 0.15;

    pub fn run() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        log::info!("Geometry Fighter (headless) starting...");

        let settings = match std::env::args().nth(1) {
            Some(path) => Settings::load(&PathBuf::from(path)),
            None => Settings::default(),
        };
        let seed = settings.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        });
        log::info!("Game initialized with seed: {seed}");

        let store = ScoreStore::open(std::env::temp_dir().join("geometry-fighter-scores.json"));
        let mut engine = HeadlessEngine::new().with_store(store);
        let mut state = GameState::with_settings(seed, settings);
        let mut player = AutoPlayer::new(seed);

        sim::setup(&mut state, &mut engine);

        let dt = 1.0 / DEMO_FPS;
        let frames = (DEMO_SECONDS * DEMO_FPS) as u64;
        let mut runs = 0;
        for frame in 1..=frames {
            let now = frame as f64 * dt;
            engine.step(dt as f32);
            sim::tick(&mut state, &mut engine, now);

            if let Some(point) = player.pick(&state, &engine, now) {
                sim::touch(&mut state, &mut engine, point);
            }

            for event in state.drain_events() {
                if matches!(event, GameEvent::GameOver { .. }) {
                    runs += 1;
                }
                log_event(&event);
            }
        }

        log::info!(
            "Played {runs} runs in {DEMO_SECONDS} s, best {}",
            state.high_score
        );
        if let Some(hud) = engine.hud() {
            log::info!("HUD: {hud}");
        }
        if let Some(store) = engine.store() {
            let saved = store.data();
            log::info!(
                "Saved to {}: last {}, best {}",
                store.path().display(),
                saved.last_score,
                saved.high_score
            );
        }
    }

    fn log_event(event: &GameEvent) {
        match event {
            GameEvent::Spawned {
                id,
                shape,
                classification,
            } => log::debug!("Spawned {id:?}: {shape:?} ({classification:?})"),
            GameEvent::FellOff { id } => log::debug!("{id:?} fell off screen"),
            GameEvent::Destroyed { id, classification } => {
                log::debug!("Destroyed {id:?} ({classification:?})")
            }
            GameEvent::Scored { score } => log::debug!("Score {score}"),
            GameEvent::LifeLost { lives } => log::info!("Lost a life, {lives} left"),
            GameEvent::Started | GameEvent::GameOver { .. } | GameEvent::ReturnedToTitle => {}
        }
    }

    /// Taps through the title and goes for good shapes, with the odd mistake
    struct AutoPlayer {
        rng: Pcg32,
        next_tap: f64,
    }

    impl AutoPlayer {
        fn new(seed: u64) -> Self {
            Self {
                rng: Pcg32::seed_from_u64(seed.wrapping_add(1)),
                next_tap: 0.0,
            }
        }

        fn pick(&mut self, state: &GameState, engine: &HeadlessEngine, now: f64) -> Option<Vec2> {
            if now < self.next_tap {
                return None;
            }
            let point = match state.phase {
                GamePhase::TapToPlay => Some(Vec2::ZERO),
                GamePhase::GameOver => None,
                GamePhase::Playing => {
                    let want_bad = self.rng.random_bool(MISTAKE_CHANCE);
                    state
                        .entities
                        .iter()
                        .filter(|e| (e.classification == Classification::Bad) == want_bad)
                        .filter_map(|e| engine.screen_point(e.id))
                        .find(|p| p.y > 0.0 && p.y < HUD_POSITION.y - 1.0)
                }
            };
            if point.is_some() {
                self.next_tap = now + REACTION_TIME;
            }
            point
        }
    }
}
