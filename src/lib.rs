//! Geometry Fighter - tap the good shapes, dodge the black ones
//!
//! Core modules:
//! - `sim`: Game phases, spawning, cleanup, scoring (engine-agnostic)
//! - `engine`: Collaborator traits the host 3D engine implements, plus a headless engine
//! - `audio`: Sound cues and volume handling
//! - `persistence`: Trivial score save
//! - `settings`: Player preferences

pub mod audio;
pub mod engine;
pub mod error;
pub mod hud;
pub mod persistence;
pub mod settings;
pub mod sim;

pub use error::{EngineError, ResourceKind};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::{Vec2, Vec3};

    /// Lives at the start of every run
    pub const STARTING_LIVES: i32 = 3;

    /// Bounds of the random delay between two spawns (seconds)
    pub const SPAWN_INTERVAL_MIN: f64 = 0.2;
    pub const SPAWN_INTERVAL_MAX: f64 = 1.5;

    /// Entities below this height are off-screen and get collected
    pub const FALL_THRESHOLD: f32 = -2.0;

    /// Time spent on the game over splash before returning to the title (seconds)
    pub const GAME_OVER_DELAY: f64 = 5.0;

    /// Launch impulse ranges (applied once at spawn)
    pub const IMPULSE_X_MIN: f32 = -2.0;
    pub const IMPULSE_X_MAX: f32 = 2.0;
    pub const IMPULSE_Y_MIN: f32 = 10.0;
    pub const IMPULSE_Y_MAX: f32 = 18.0;
    /// Off-center point the launch impulse is applied at, so shapes tumble
    pub const IMPULSE_LOCAL_POINT: Vec3 = Vec3::new(0.05, 0.05, 0.05);

    /// Scene layout
    pub const HUD_POSITION: Vec3 = Vec3::new(0.0, 10.0, 0.0);
    pub const SPLASH_POSITION: Vec3 = Vec3::new(0.0, 5.0, 0.0);
    pub const SPLASH_SIZE: Vec2 = Vec2::new(5.0, 5.0);

    /// Frame rate the demo binary simulates at
    pub const DEMO_FPS: f64 = 60.0;
}
