// Game configuration - window, world and spawn settings

use super::hero::{Direction, HeroStats, BASE_STATS};
use crate::engine::physics::Rect;
use glam::Vec2;

/// Settings for the play scene and the window hosting it
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window title
    pub title: &'static str,

    // View
    /// Logical view width in pixels
    pub view_width: u32,
    /// Logical view height in pixels
    pub view_height: u32,
    /// Integer scale applied to the view for pixel art
    pub zoom: u32,

    // World
    /// World width in pixels (size of the background map)
    pub world_width: f32,
    /// World height in pixels
    pub world_height: f32,
    /// Start with physics debug output on
    pub physics_debug: bool,

    // Hero
    /// Where the hero spawns
    pub spawn: Vec2,
    /// Which way the hero faces when it spawns
    pub facing: Direction,
    pub hero: HeroStats,
}

impl GameConfig {
    pub const DEFAULT: GameConfig = GameConfig {
        title: "Hero FSM",

        view_width: 400,
        view_height: 300,
        zoom: 2,

        world_width: 800.0,
        world_height: 600.0,
        physics_debug: true,

        spawn: Vec2::new(200.0, 150.0),
        facing: Direction::Down,
        hero: BASE_STATS,
    };

    /// Physical window size (view scaled by zoom)
    pub fn window_size(&self) -> (u32, u32) {
        (self.view_width * self.zoom, self.view_height * self.zoom)
    }

    /// World rectangle the hero is kept inside
    pub fn world_bounds(&self) -> Rect {
        Rect::from_size(self.world_width, self.world_height)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_size_applies_zoom() {
        let config = GameConfig::default();
        assert_eq!(config.window_size(), (800, 600));
    }

    #[test]
    fn test_spawn_inside_world() {
        let config = GameConfig::default();
        let bounds = config.world_bounds();
        assert!(config.spawn.cmpgt(bounds.min).all());
        assert!(config.spawn.cmplt(bounds.max).all());
    }
}
