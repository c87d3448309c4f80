//! Spawn timing and spawn content
//!
//! The scheduler only answers "spawn now, and what?". Registering the shape
//! with the engine happens in `tick`.

use glam::Vec3;
use rand::Rng;

use super::shape::{Classification, ShapeColor, ShapeKind};
use crate::consts::*;

/// Everything needed to put one new shape into the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPlan {
    pub shape: ShapeKind,
    pub color: ShapeColor,
    pub classification: Classification,
    /// One-shot launch impulse
    pub impulse: Vec3,
}

impl SpawnPlan {
    /// Roll a random shape, colour and launch impulse
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let shape = ShapeKind::random(rng);
        let color = ShapeColor::random(rng);
        let impulse = Vec3::new(
            rng.random_range(IMPULSE_X_MIN..=IMPULSE_X_MAX),
            rng.random_range(IMPULSE_Y_MIN..=IMPULSE_Y_MAX),
            0.0,
        );
        Self {
            shape,
            color,
            classification: Classification::of(color),
            impulse,
        }
    }
}

/// Decides when the next shape appears
#[derive(Debug, Clone, Default)]
pub struct SpawnScheduler {
    next_deadline: f64,
}

impl SpawnScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_deadline(&self) -> f64 {
        self.next_deadline
    }

    /// Produce at most one spawn for this tick
    ///
    /// Returns a plan when `now` is past the deadline, and pushes the deadline
    /// to `now + U(SPAWN_INTERVAL_MIN, SPAWN_INTERVAL_MAX)` before returning,
    /// so a second poll at the same time yields nothing.
    pub fn poll<R: Rng>(&mut self, now: f64, rng: &mut R) -> Option<SpawnPlan> {
        if now <= self.next_deadline {
            return None;
        }
        let plan = SpawnPlan::random(rng);
        self.next_deadline = now + rng.random_range(SPAWN_INTERVAL_MIN..SPAWN_INTERVAL_MAX);
        Some(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_first_poll_spawns() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut scheduler = SpawnScheduler::new();
        assert!(scheduler.poll(0.016, &mut rng).is_some());
        let deadline = scheduler.next_deadline();
        assert!(deadline >= 0.016 + SPAWN_INTERVAL_MIN);
        assert!(deadline < 0.016 + SPAWN_INTERVAL_MAX);
    }

    #[test]
    fn test_no_spawn_at_deadline() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut scheduler = SpawnScheduler::new();
        assert!(scheduler.poll(0.0, &mut rng).is_none());
        scheduler.poll(1.0, &mut rng).unwrap();
        let deadline = scheduler.next_deadline();
        assert!(scheduler.poll(deadline, &mut rng).is_none());
        assert!(scheduler.poll(deadline + 0.001, &mut rng).is_some());
    }

    #[test]
    fn test_plan_impulse_ranges() {
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..500 {
            let plan = SpawnPlan::random(&mut rng);
            assert!((IMPULSE_X_MIN..=IMPULSE_X_MAX).contains(&plan.impulse.x));
            assert!((IMPULSE_Y_MIN..=IMPULSE_Y_MAX).contains(&plan.impulse.y));
            assert_eq!(plan.impulse.z, 0.0);
            assert_eq!(plan.classification, Classification::of(plan.color));
        }
    }

    proptest! {
        #[test]
        fn one_spawn_per_deadline_crossing(
            seed in any::<u64>(),
            steps in prop::collection::vec(0.0f64..0.5, 1..200),
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut scheduler = SpawnScheduler::new();
            let mut now = 0.0;
            for dt in steps {
                now += dt;
                let before = scheduler.next_deadline();
                let first = scheduler.poll(now, &mut rng);
                // Duplicate arrival for the same frame time
                let second = scheduler.poll(now, &mut rng);
                prop_assert!(second.is_none());
                if first.is_some() {
                    prop_assert!(now > before);
                    prop_assert!(scheduler.next_deadline() >= now + SPAWN_INTERVAL_MIN);
                } else {
                    prop_assert_eq!(scheduler.next_deadline(), before);
                }
            }
        }
    }
}
