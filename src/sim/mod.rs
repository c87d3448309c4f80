//! Game simulation
//!
//! Everything here is driven from the frame thread through [`tick`] and
//! [`touch`]. Randomness comes only from the seeded RNG in [`GameState`], so
//! a seed plus a sequence of frame times and taps replays exactly.

pub mod collision;
pub mod lifecycle;
pub mod phase;
pub mod shape;
pub mod spawn;
pub mod splash;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::{CollisionOutcome, resolve_touch};
pub use lifecycle::{EntityLifecycleManager, SpawnedEntity};
pub use phase::{GamePhase, PhaseTrigger};
pub use shape::{Classification, Geometry, ShapeColor, ShapeKind};
pub use spawn::{SpawnPlan, SpawnScheduler};
pub use splash::{GAME_OVER, SplashController, SplashPanel, TAP_TO_PLAY};
pub use state::{GameEvent, GameState, PlayerStats};
pub use tick::{setup, tick, touch};
pub use timer::{ScheduledTask, TimerQueue};
