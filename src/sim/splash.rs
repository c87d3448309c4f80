//! Splash overlay panels (title and game over)

use glam::{Vec2, Vec3};

use crate::consts::{SPLASH_POSITION, SPLASH_SIZE};

pub const TAP_TO_PLAY: &str = "TapToPlay";
pub const GAME_OVER: &str = "GameOver";

/// A textured plane shown over the scene
#[derive(Debug, Clone, PartialEq)]
pub struct SplashPanel {
    pub key: String,
    pub texture: String,
    pub position: Vec3,
    pub size: Vec2,
    pub visible: bool,
}

impl SplashPanel {
    pub fn new(key: &str, texture: &str) -> Self {
        Self {
            key: key.to_string(),
            texture: texture.to_string(),
            position: SPLASH_POSITION,
            size: SPLASH_SIZE,
            visible: false,
        }
    }
}

/// Keeps at most one splash panel visible
#[derive(Debug, Clone, Default)]
pub struct SplashController {
    panels: Vec<SplashPanel>,
}

impl SplashController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Title and game over panels, title showing
    pub fn standard() -> Self {
        let mut splash = Self::new();
        splash.add_panel(SplashPanel::new(
            TAP_TO_PLAY,
            "assets/textures/TapToPlay_Diffuse.png",
        ));
        splash.add_panel(SplashPanel::new(
            GAME_OVER,
            "assets/textures/GameOver_Diffuse.png",
        ));
        splash.show(TAP_TO_PLAY);
        splash
    }

    /// Register a panel; a panel with the same key is replaced
    pub fn add_panel(&mut self, panel: SplashPanel) {
        self.panels.retain(|p| p.key != panel.key);
        self.panels.push(panel);
    }

    /// Show the panel named `key` and hide the rest; unknown or empty keys hide all
    pub fn show(&mut self, key: &str) {
        for panel in &mut self.panels {
            panel.visible = !key.is_empty() && panel.key == key;
        }
    }

    pub fn hide_all(&mut self) {
        self.show("");
    }

    pub fn is_visible(&self, key: &str) -> bool {
        self.panels.iter().any(|p| p.key == key && p.visible)
    }

    pub fn visible_key(&self) -> Option<&str> {
        self.panels.iter().find(|p| p.visible).map(|p| p.key.as_str())
    }

    pub fn panels(&self) -> &[SplashPanel] {
        &self.panels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_standard_starts_on_title() {
        let splash = SplashController::standard();
        assert_eq!(splash.panels().len(), 2);
        assert_eq!(splash.visible_key(), Some(TAP_TO_PLAY));
        assert!(!splash.is_visible(GAME_OVER));
    }

    #[test]
    fn test_show_switches_panel() {
        let mut splash = SplashController::standard();
        splash.show(GAME_OVER);
        assert!(splash.is_visible(GAME_OVER));
        assert!(!splash.is_visible(TAP_TO_PLAY));
    }

    #[test]
    fn test_unknown_and_empty_hide_everything() {
        let mut splash = SplashController::standard();
        splash.show("Credits");
        assert_eq!(splash.visible_key(), None);
        splash.show(GAME_OVER);
        splash.show("");
        assert_eq!(splash.visible_key(), None);
    }

    #[test]
    fn test_add_panel_replaces_same_key() {
        let mut splash = SplashController::standard();
        splash.add_panel(SplashPanel::new(GAME_OVER, "other.png"));
        assert_eq!(splash.panels().len(), 2);
        assert!(splash.panels().iter().any(|p| p.texture == "other.png"));
    }

    fn key() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(TAP_TO_PLAY.to_string()),
            Just(GAME_OVER.to_string()),
            Just(String::new()),
            "[a-zA-Z]{1,8}",
        ]
    }

    proptest! {
        #[test]
        fn show_is_idempotent(first in key(), k in key()) {
            let mut once = SplashController::standard();
            once.show(&first);
            let mut twice = once.clone();
            once.show(&k);
            twice.show(&k);
            twice.show(&k);
            prop_assert_eq!(once.panels(), twice.panels());
            prop_assert!(once.panels().iter().filter(|p| p.visible).count() <= 1);
        }
    }
}
