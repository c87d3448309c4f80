//! Engine collaborator interfaces
//!
//! The host 3D engine owns drawables, physics bodies, particles, audio and
//! the HUD. The game core only sees it through these traits and refers to
//! its nodes by opaque [`EntityId`] handles.

pub mod headless;

pub use headless::HeadlessEngine;

use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::hud::HudReadout;
use crate::sim::lifecycle::SpawnedEntity;
use crate::sim::shape::{ShapeColor, ShapeKind};
use crate::sim::splash::SplashPanel;

/// Opaque handle to a spawned node in the engine's scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Simulated pose of a node, as last reported by the physics step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub orientation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
        }
    }
}

/// Topmost node under a screen point
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitNode {
    Hud,
    Panel(String),
    Entity(EntityId),
}

pub trait SceneCollection {
    /// Create the drawable and dynamic physics body for a new shape
    fn add(&mut self, entity: &SpawnedEntity);
    fn remove(&mut self, id: EntityId);
    /// `None` once the engine no longer has the node
    fn transform(&self, id: EntityId) -> Option<Transform>;
}

pub trait PhysicsImpulse {
    fn apply_impulse(&mut self, id: EntityId, force: Vec3, at_local_point: Vec3);
}

pub trait HitTester {
    fn hit_test(&self, screen_point: Vec2) -> Option<HitNode>;
}

pub trait EffectsEngine {
    fn spawn_explosion(
        &mut self,
        shape: ShapeKind,
        position: Vec3,
        orientation: Quat,
    ) -> Result<(), EngineError>;
    fn attach_trail(
        &mut self,
        id: EntityId,
        shape: ShapeKind,
        color: ShapeColor,
    ) -> Result<(), EngineError>;
    fn shake_camera(&mut self);
}

pub trait AudioCue {
    /// Fire and forget; `volume` is already mixed (0..1)
    fn play(&mut self, cue: &str, volume: f32) -> Result<(), EngineError>;
}

pub trait Hud {
    fn update(&mut self, readout: &HudReadout);
}

/// Scores carried over from earlier sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SavedScores {
    pub last_score: u32,
    pub high_score: u32,
}

pub trait PersistState {
    /// `None` when nothing is persisted
    fn load(&self) -> Option<SavedScores>;
    fn save(&mut self, score: u32, lives: i32) -> Result<(), EngineError>;
}

/// Splash overlay surface
pub trait Overlay {
    fn create_panel(&mut self, panel: &SplashPanel) -> Result<(), EngineError>;
    fn set_panel_visible(&mut self, key: &str, visible: bool);
}

/// Everything the game loop needs from the host
pub trait Engine:
    SceneCollection + PhysicsImpulse + HitTester + EffectsEngine + AudioCue + Hud + PersistState + Overlay
{
}

impl<T> Engine for T where
    T: SceneCollection
        + PhysicsImpulse
        + HitTester
        + EffectsEngine
        + AudioCue
        + Hud
        + PersistState
        + Overlay
        + ?Sized
{
}
