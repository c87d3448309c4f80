//! Ownership of live spawned shapes
//!
//! The manager is the authoritative set of shapes in play. Engine nodes are
//! addressed by `EntityId` only; removing an entity here always removes its
//! node from the scene too.

use crate::consts::FALL_THRESHOLD;
use crate::engine::{EffectsEngine, EntityId, SceneCollection};

use super::shape::{Classification, ShapeColor, ShapeKind};

/// A shape currently in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnedEntity {
    pub id: EntityId,
    pub shape: ShapeKind,
    pub color: ShapeColor,
    pub classification: Classification,
    /// Height as of the last sweep
    pub vertical_position: f32,
}

#[derive(Debug, Clone)]
pub struct EntityLifecycleManager {
    /// Sorted by id (ids are allocated in increasing order)
    live: Vec<SpawnedEntity>,
    next_id: u32,
}

impl Default for EntityLifecycleManager {
    fn default() -> Self {
        Self {
            live: Vec::new(),
            next_id: 1,
        }
    }
}

impl EntityLifecycleManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new entity handle
    pub fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn insert(&mut self, entity: SpawnedEntity) {
        debug_assert!(!self.contains(entity.id), "duplicate entity {:?}", entity.id);
        self.live.push(entity);
        self.live.sort_by_key(|e| e.id);
    }

    pub fn get(&self, id: EntityId) -> Option<&SpawnedEntity> {
        self.live
            .binary_search_by_key(&id, |e| e.id)
            .ok()
            .map(|idx| &self.live[idx])
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpawnedEntity> {
        self.live.iter()
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Collect shapes that fell below the screen
    ///
    /// Full scan: refreshes every entity's height from the engine and removes
    /// those under `FALL_THRESHOLD`. Nodes the engine has already dropped are
    /// forgotten as well. Returns the shapes that fell off.
    pub fn sweep<S: SceneCollection + ?Sized>(&mut self, scene: &mut S) -> Vec<SpawnedEntity> {
        let mut fallen = Vec::new();
        self.live.retain_mut(|entity| {
            let Some(transform) = scene.transform(entity.id) else {
                log::debug!("Entity {:?} vanished from the scene, forgetting it", entity.id);
                return false;
            };
            entity.vertical_position = transform.position.y;
            if entity.vertical_position < FALL_THRESHOLD {
                scene.remove(entity.id);
                fallen.push(entity.clone());
                false
            } else {
                true
            }
        });
        if !fallen.is_empty() {
            log::debug!("Swept {} fallen shapes, {} still live", fallen.len(), self.live.len());
        }
        fallen
    }

    /// Blow up a touched shape and remove it, whatever its classification
    ///
    /// Returns `None` if `id` isn't a live entity.
    pub fn despawn_touched<E>(&mut self, id: EntityId, engine: &mut E) -> Option<SpawnedEntity>
    where
        E: SceneCollection + EffectsEngine + ?Sized,
    {
        let idx = self.live.binary_search_by_key(&id, |e| e.id).ok()?;
        let mut entity = self.live.remove(idx);

        if let Some(transform) = engine.transform(id) {
            entity.vertical_position = transform.position.y;
            if let Err(e) =
                engine.spawn_explosion(entity.shape, transform.position, transform.orientation)
            {
                log::warn!("{e}, skipping explosion");
            }
        }
        engine.remove(id);
        Some(entity)
    }
}
