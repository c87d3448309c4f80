//! Frame tick and touch dispatch
//!
//! The host calls [`tick`] once per rendered frame with the elapsed time and
//! [`touch`] for each tap, both on the frame thread. Everything runs to
//! completion inside the call.

use glam::Vec2;

use super::collision::{CollisionOutcome, resolve_touch};
use super::lifecycle::SpawnedEntity;
use super::phase::{GamePhase, PhaseTrigger};
use super::shape::Classification;
use super::spawn::SpawnPlan;
use super::splash::{GAME_OVER, TAP_TO_PLAY};
use super::state::{GameEvent, GameState};
use super::timer::ScheduledTask;
use crate::audio::SoundCue;
use crate::consts::*;
use crate::engine::{Engine, HitNode};
use crate::hud::HudReadout;

/// Restore saved scores, then push splash panels and the initial HUD to the
/// engine (once, at startup)
pub fn setup<E: Engine + ?Sized>(state: &mut GameState, engine: &mut E) {
    if let Some(saved) = engine.load() {
        log::info!("Restored scores: last {}, best {}", saved.last_score, saved.high_score);
        state.last_score = saved.last_score;
        state.high_score = state.high_score.max(saved.high_score);
    }
    for panel in state.splash.panels() {
        if let Err(e) = engine.create_panel(panel) {
            log::warn!("{e}, panel `{}` will be blank", panel.key);
        }
    }
    engine.update(&HudReadout::from_state(state));
}

/// Advance the game to frame time `now` (seconds since start)
pub fn tick<E: Engine + ?Sized>(state: &mut GameState, engine: &mut E, now: f64) {
    let now = if !now.is_finite() {
        log::warn!("Frame time {now} isn't finite, holding clock");
        state.clock
    } else if now < state.clock {
        log::debug!("Frame time went backwards ({now} < {}), holding clock", state.clock);
        state.clock
    } else {
        now
    };
    state.clock = now;

    for task in state.timers.pop_due(now) {
        run_task(state, engine, task);
    }

    if state.phase.is_playing() {
        if let Some(plan) = state.spawner.poll(now, &mut state.rng) {
            spawn(state, engine, plan);
        }
    }

    // Shapes keep falling on the splash screens too
    for entity in state.entities.sweep(engine) {
        state.events.push(GameEvent::FellOff { id: entity.id });
    }

    engine.update(&HudReadout::from_state(state));
}

/// Handle a tap at `screen_point`
pub fn touch<E: Engine + ?Sized>(state: &mut GameState, engine: &mut E, screen_point: Vec2) {
    match state.phase {
        GamePhase::GameOver => {
            log::trace!("Touch ignored during game over");
        }
        GamePhase::TapToPlay => start_run(state, engine),
        GamePhase::Playing => {
            let id = match engine.hit_test(screen_point) {
                Some(HitNode::Entity(id)) if state.entities.contains(id) => id,
                Some(node) => {
                    log::trace!("Touch landed on {node:?}, ignoring");
                    return;
                }
                None => return,
            };
            if let Some(entity) = state.entities.despawn_touched(id, engine) {
                handle_touched(state, engine, &entity);
            }
        }
    }
}

/// Apply `trigger` if the phase machine has that edge
fn advance(state: &mut GameState, trigger: PhaseTrigger) -> bool {
    match state.phase.next(trigger) {
        Some(next) => {
            if next != state.phase {
                log::info!("{:?} -> {:?}", state.phase, next);
            }
            state.phase = next;
            true
        }
        None => {
            log::debug!("No {:?} edge out of {:?}, ignoring", trigger, state.phase);
            false
        }
    }
}

/// Show one splash panel (or none) and mirror visibility to the engine
fn show_splash<E: Engine + ?Sized>(state: &mut GameState, engine: &mut E, key: &str) {
    state.splash.show(key);
    for panel in state.splash.panels() {
        engine.set_panel_visible(&panel.key, panel.visible);
    }
}

fn start_run<E: Engine + ?Sized>(state: &mut GameState, engine: &mut E) {
    if !advance(state, PhaseTrigger::Tap) {
        return;
    }
    state.stats.reset();
    show_splash(state, engine, "");
    state.events.push(GameEvent::Started);
}

fn spawn<E: Engine + ?Sized>(state: &mut GameState, engine: &mut E, plan: SpawnPlan) {
    let entity = SpawnedEntity {
        id: state.entities.allocate_id(),
        shape: plan.shape,
        color: plan.color,
        classification: plan.classification,
        vertical_position: 0.0,
    };
    log::debug!(
        "Generating a {:?} {:?} ({:?})",
        entity.color,
        entity.shape,
        entity.classification
    );

    engine.add(&entity);
    engine.apply_impulse(entity.id, plan.impulse, IMPULSE_LOCAL_POINT);

    if state.settings.trails {
        if let Err(e) = engine.attach_trail(entity.id, entity.shape, entity.color) {
            log::warn!("{e}, spawning without a trail");
        }
    }

    let cue = match entity.classification {
        Classification::Good => SoundCue::SpawnGood,
        Classification::Bad => SoundCue::SpawnBad,
    };
    state.audio.play(engine, cue);

    state.events.push(GameEvent::Spawned {
        id: entity.id,
        shape: entity.shape,
        classification: entity.classification,
    });
    state.entities.insert(entity);
}

fn handle_touched<E: Engine + ?Sized>(state: &mut GameState, engine: &mut E, entity: &SpawnedEntity) {
    state.events.push(GameEvent::Destroyed {
        id: entity.id,
        classification: entity.classification,
    });

    let outcome = resolve_touch(&mut state.stats, entity.classification);
    if outcome.is_bad() {
        state.audio.play(engine, SoundCue::ExplodeBad);
        if state.settings.effective_screen_shake() {
            engine.shake_camera();
        }
        state.events.push(GameEvent::LifeLost {
            lives: state.stats.lives,
        });
    }

    match outcome {
        CollisionOutcome::Scored { score } => {
            state.audio.play(engine, SoundCue::ExplodeGood);
            state.events.push(GameEvent::Scored { score });
        }
        CollisionOutcome::LifeLost { .. } => {}
        CollisionOutcome::LivesExhausted => enter_game_over(state, engine),
    }
}

fn enter_game_over<E: Engine + ?Sized>(state: &mut GameState, engine: &mut E) {
    if !advance(state, PhaseTrigger::LivesExhausted) {
        return;
    }
    let score = state.stats.score;
    log::info!("Game over with {score} points");

    state.record_run();
    if let Err(e) = engine.save(score, state.stats.lives) {
        log::warn!("Failed to save scores: {e}");
    }
    show_splash(state, engine, GAME_OVER);
    state.audio.play(engine, SoundCue::GameOver);
    state
        .timers
        .schedule(state.clock + GAME_OVER_DELAY, ScheduledTask::ReturnToTitle);
    state.events.push(GameEvent::GameOver { score });
}

fn run_task<E: Engine + ?Sized>(state: &mut GameState, engine: &mut E, task: ScheduledTask) {
    match task {
        ScheduledTask::ReturnToTitle => {
            if advance(state, PhaseTrigger::ResetElapsed) {
                show_splash(state, engine, TAP_TO_PLAY);
                state.events.push(GameEvent::ReturnedToTitle);
            }
        }
    }
}
