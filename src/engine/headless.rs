//! In-memory engine for the demo binary and tests
//!
//! Bodies are points with velocity under constant gravity (unit mass), the
//! screen is the world XY plane, and every effect or sound is just recorded.
//! Resources can be marked missing to exercise the best-effort paths.

use std::collections::{BTreeMap, HashSet};

use glam::{Quat, Vec2, Vec3};

use super::{
    AudioCue, EffectsEngine, EntityId, HitNode, HitTester, Hud, Overlay, PersistState,
    PhysicsImpulse, SavedScores, SceneCollection, Transform,
};
use crate::consts::HUD_POSITION;
use crate::error::{EngineError, ResourceKind};
use crate::hud::HudReadout;
use crate::persistence::ScoreStore;
use crate::sim::lifecycle::SpawnedEntity;
use crate::sim::shape::{ShapeColor, ShapeKind};
use crate::sim::splash::SplashPanel;

pub const EXPLOSION_PARTICLES: &str = "Explode";
pub const TRAIL_PARTICLES: &str = "Trail";

/// Scene gravity (units/s²)
pub const GRAVITY: Vec3 = Vec3::new(0.0, -9.8, 0.0);

/// A simulated dynamic body
#[derive(Debug, Clone)]
pub struct Body {
    pub shape: ShapeKind,
    pub color: ShapeColor,
    pub position: Vec3,
    pub velocity: Vec3,
    pub orientation: Quat,
    pub angular_velocity: Vec3,
    /// Trail colour (linear RGB), if one is attached
    pub trail: Option<[f32; 3]>,
}

#[derive(Debug, Clone)]
struct PanelState {
    center: Vec2,
    size: Vec2,
    visible: bool,
}

#[derive(Debug, Default)]
pub struct HeadlessEngine {
    bodies: BTreeMap<EntityId, Body>,
    panels: BTreeMap<String, PanelState>,
    missing: HashSet<String>,
    sounds: Vec<String>,
    hud: Option<HudReadout>,
    hud_updates: usize,
    explosions: usize,
    camera_shakes: usize,
    saves: Vec<(u32, i32)>,
    store: Option<ScoreStore>,
}

impl HeadlessEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write scores through to a save file on game over
    pub fn with_store(mut self, store: ScoreStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Make loading the named particle system, sound or texture fail
    pub fn mark_missing(&mut self, name: &str) {
        self.missing.insert(name.to_string());
    }

    fn require(&self, kind: ResourceKind, name: &str) -> Result<(), EngineError> {
        if self.missing.contains(name) {
            Err(EngineError::missing(kind, name))
        } else {
            Ok(())
        }
    }

    /// Place a body for `entity` at `position`, at rest
    pub fn add_body(&mut self, entity: &SpawnedEntity, position: Vec3) {
        self.bodies.insert(
            entity.id,
            Body {
                shape: entity.shape,
                color: entity.color,
                position,
                velocity: Vec3::ZERO,
                orientation: Quat::IDENTITY,
                angular_velocity: Vec3::ZERO,
                trail: None,
            },
        );
    }

    pub fn body(&self, id: EntityId) -> Option<&Body> {
        self.bodies.get(&id)
    }

    pub fn bodies(&self) -> impl Iterator<Item = (EntityId, &Body)> {
        self.bodies.iter().map(|(id, b)| (*id, b))
    }

    pub fn set_position(&mut self, id: EntityId, position: Vec3) {
        if let Some(body) = self.bodies.get_mut(&id) {
            body.position = position;
        }
    }

    /// Advance every body by `dt` seconds (semi-implicit Euler)
    pub fn step(&mut self, dt: f32) {
        for body in self.bodies.values_mut() {
            body.velocity += GRAVITY * dt;
            body.position += body.velocity * dt;
            let spin = Quat::from_scaled_axis(body.angular_velocity * dt);
            body.orientation = (spin * body.orientation).normalize();
        }
    }

    pub fn sounds(&self) -> &[String] {
        &self.sounds
    }

    pub fn hud(&self) -> Option<&HudReadout> {
        self.hud.as_ref()
    }

    pub fn hud_updates(&self) -> usize {
        self.hud_updates
    }

    pub fn explosions(&self) -> usize {
        self.explosions
    }

    pub fn camera_shakes(&self) -> usize {
        self.camera_shakes
    }

    pub fn saves(&self) -> &[(u32, i32)] {
        &self.saves
    }

    pub fn store(&self) -> Option<&ScoreStore> {
        self.store.as_ref()
    }

    /// `None` if no panel with that key was created
    pub fn panel_visible(&self, key: &str) -> Option<bool> {
        self.panels.get(key).map(|p| p.visible)
    }

    /// Screen point of a body (the screen is the world XY plane)
    pub fn screen_point(&self, id: EntityId) -> Option<Vec2> {
        self.bodies.get(&id).map(|b| b.position.truncate())
    }
}

impl SceneCollection for HeadlessEngine {
    fn add(&mut self, entity: &SpawnedEntity) {
        self.add_body(entity, Vec3::ZERO);
    }

    fn remove(&mut self, id: EntityId) {
        self.bodies.remove(&id);
    }

    fn transform(&self, id: EntityId) -> Option<Transform> {
        self.bodies.get(&id).map(|b| Transform {
            position: b.position,
            orientation: b.orientation,
        })
    }
}

impl PhysicsImpulse for HeadlessEngine {
    fn apply_impulse(&mut self, id: EntityId, force: Vec3, at_local_point: Vec3) {
        if let Some(body) = self.bodies.get_mut(&id) {
            body.velocity += force;
            body.angular_velocity += at_local_point.cross(force);
        }
    }
}

impl HitTester for HeadlessEngine {
    fn hit_test(&self, screen_point: Vec2) -> Option<HitNode> {
        if screen_point.y >= HUD_POSITION.y - 0.5 {
            return Some(HitNode::Hud);
        }

        let panel = self.panels.iter().find(|(_, p)| {
            p.visible && (screen_point - p.center).abs().cmple(p.size / 2.0).all()
        });
        if let Some((key, _)) = panel {
            return Some(HitNode::Panel(key.clone()));
        }

        // Newest body on top
        self.bodies
            .iter()
            .rev()
            .find(|(_, b)| {
                b.position.truncate().distance(screen_point) <= b.shape.geometry().bounding_radius()
            })
            .map(|(id, _)| HitNode::Entity(*id))
    }
}

impl EffectsEngine for HeadlessEngine {
    fn spawn_explosion(
        &mut self,
        _shape: ShapeKind,
        _position: Vec3,
        _orientation: Quat,
    ) -> Result<(), EngineError> {
        self.require(ResourceKind::ParticleSystem, EXPLOSION_PARTICLES)?;
        self.explosions += 1;
        Ok(())
    }

    fn attach_trail(
        &mut self,
        id: EntityId,
        _shape: ShapeKind,
        color: ShapeColor,
    ) -> Result<(), EngineError> {
        self.require(ResourceKind::ParticleSystem, TRAIL_PARTICLES)?;
        if let Some(body) = self.bodies.get_mut(&id) {
            body.trail = Some(color.rgb());
        }
        Ok(())
    }

    fn shake_camera(&mut self) {
        self.camera_shakes += 1;
    }
}

impl AudioCue for HeadlessEngine {
    fn play(&mut self, cue: &str, _volume: f32) -> Result<(), EngineError> {
        self.require(ResourceKind::Sound, cue)?;
        self.sounds.push(cue.to_string());
        Ok(())
    }
}

impl Hud for HeadlessEngine {
    fn update(&mut self, readout: &HudReadout) {
        self.hud = Some(*readout);
        self.hud_updates += 1;
    }
}

impl PersistState for HeadlessEngine {
    fn load(&self) -> Option<SavedScores> {
        self.store.as_ref().and_then(|store| store.load())
    }

    fn save(&mut self, score: u32, lives: i32) -> Result<(), EngineError> {
        self.saves.push((score, lives));
        match self.store.as_mut() {
            Some(store) => store.save(score, lives),
            None => Ok(()),
        }
    }
}

impl Overlay for HeadlessEngine {
    fn create_panel(&mut self, panel: &SplashPanel) -> Result<(), EngineError> {
        // The panel still exists without its texture, it just draws blank
        let loaded = self.require(ResourceKind::Texture, &panel.texture);
        self.panels.insert(
            panel.key.clone(),
            PanelState {
                center: panel.position.truncate(),
                size: panel.size,
                visible: panel.visible,
            },
        );
        loaded
    }

    fn set_panel_visible(&mut self, key: &str, visible: bool) {
        if let Some(panel) = self.panels.get_mut(key) {
            panel.visible = visible;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::shape::Classification;

    fn spawned(id: u32, shape: ShapeKind) -> SpawnedEntity {
        SpawnedEntity {
            id: EntityId(id),
            shape,
            color: ShapeColor::Red,
            classification: Classification::Good,
            vertical_position: 0.0,
        }
    }

    #[test]
    fn test_launched_body_rises_then_falls() {
        let mut engine = HeadlessEngine::new();
        engine.add(&spawned(1, ShapeKind::Box));
        engine.apply_impulse(EntityId(1), Vec3::new(0.0, 12.0, 0.0), Vec3::splat(0.05));

        engine.step(0.5);
        assert!(engine.body(EntityId(1)).unwrap().position.y > 0.0);
        for _ in 0..10 {
            engine.step(0.5);
        }
        assert!(engine.body(EntityId(1)).unwrap().position.y < -2.0);
    }

    #[test]
    fn test_hit_test_prefers_hud_then_newest_body() {
        let mut engine = HeadlessEngine::new();
        engine.add(&spawned(1, ShapeKind::Sphere));
        engine.add(&spawned(2, ShapeKind::Sphere));

        assert_eq!(engine.hit_test(Vec2::new(0.0, 0.2)), Some(HitNode::Entity(EntityId(2))));
        assert_eq!(engine.hit_test(Vec2::new(0.0, 10.0)), Some(HitNode::Hud));
        assert_eq!(engine.hit_test(Vec2::new(5.0, 0.0)), None);
    }

    #[test]
    fn test_visible_panel_blocks_hits() {
        let mut engine = HeadlessEngine::new();
        let mut panel = SplashPanel::new("TapToPlay", "title.png");
        panel.visible = true;
        engine.create_panel(&panel).unwrap();
        engine.add_body(&spawned(1, ShapeKind::Sphere), Vec3::new(0.0, 5.0, 0.0));

        assert_eq!(engine.hit_test(Vec2::new(0.0, 5.0)), Some(HitNode::Panel("TapToPlay".into())));
        engine.set_panel_visible("TapToPlay", false);
        assert_eq!(engine.hit_test(Vec2::new(0.0, 5.0)), Some(HitNode::Entity(EntityId(1))));
    }

    #[test]
    fn test_missing_resources_error() {
        let mut engine = HeadlessEngine::new();
        engine.mark_missing(TRAIL_PARTICLES);
        engine.mark_missing("blank.png");
        engine.add(&spawned(1, ShapeKind::Cone));
        assert!(engine.attach_trail(EntityId(1), ShapeKind::Cone, ShapeColor::Red).is_err());
        assert!(engine.body(EntityId(1)).unwrap().trail.is_none());

        let panel = SplashPanel::new("GameOver", "blank.png");
        assert!(engine.create_panel(&panel).is_err());
        assert_eq!(engine.panel_visible("GameOver"), Some(false));
    }
}
