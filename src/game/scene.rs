// Play scene - owns the hero, the keyboard and the physics world

use super::config::GameConfig;
use super::hero::Hero;
use crate::engine::input::{Action, InputManager};
use crate::engine::physics::PhysicsWorld;
use crate::error::Result;
use log::{info, trace};
use std::time::Duration;

/// The one scene of the demo: a hero walking around a bounded map
#[derive(Debug)]
pub struct PlayScene {
    world: PhysicsWorld,
    hero: Hero,
    input: InputManager,
}

impl PlayScene {
    /// Build the scene and spawn the hero
    pub fn new(config: &GameConfig, input: InputManager) -> Result<Self> {
        let mut world = PhysicsWorld::new(config.world_bounds()).with_debug(config.physics_debug);
        let mut hero = Hero::new(config.spawn, config.facing, config.hero.clone())?;
        world.add_body(hero.body_mut());

        info!(
            "Play scene ready: world {}x{}, physics debug {}",
            config.world_width,
            config.world_height,
            if world.is_debug() { "on" } else { "off" }
        );

        Ok(Self { world, hero, input })
    }

    /// Run one fixed tick
    pub fn update(&mut self, dt: Duration) -> Result<()> {
        if self.input.state().just_down(Action::ToggleDebug) {
            self.world.toggle_debug();
        }

        self.hero.update(self.input.state(), dt)?;
        self.world.step(self.hero.body_mut(), dt.as_secs_f32());

        if self.world.is_debug() {
            trace!(
                "Hero body {:?} velocity {:?}",
                self.hero.body().bounds(),
                self.hero.velocity()
            );
        }

        // Edges have been seen by this tick; clear them for the next one
        self.input.update();
        Ok(())
    }

    /// Short description of the hero for the window title
    pub fn status(&self) -> String {
        format!("{} ({})", self.hero.state(), self.hero.direction())
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn input(&self) -> &InputManager {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputManager {
        &mut self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::engine::input::InputConfig;
    use crate::game::hero::states::{DASH, IDLE, MOVE, SWING};
    use crate::game::hero::Direction;
    use glam::Vec2;
    use winit::keyboard::KeyCode;

    const TICK: Duration = Duration::from_millis(20);

    fn scene() -> PlayScene {
        let input = InputManager::new(InputConfig::with_defaults()).unwrap();
        PlayScene::new(&GameConfig::default(), input).unwrap()
    }

    #[test]
    fn test_scene_starts_idle() {
        let scene = scene();
        assert_eq!(scene.hero().state(), IDLE);
        assert_eq!(scene.hero().position(), Vec2::new(200.0, 150.0));
        assert!(scene.hero().body().handle().is_some());
        assert_eq!(scene.status(), "idle (down)");
    }

    #[test]
    fn test_walking_moves_hero() {
        let mut scene = scene();
        scene.input_mut().press_key(KeyCode::ArrowRight);

        scene.update(TICK).unwrap();
        assert_eq!(scene.hero().state(), MOVE);

        scene.update(TICK).unwrap();
        // 100 px/s for 20ms
        assert_relative_eq!(scene.hero().position().x, 202.0, epsilon = 1e-3);
        assert_relative_eq!(scene.hero().position().y, 150.0, epsilon = 1e-3);
        assert_eq!(scene.hero().direction(), Direction::Right);
    }

    #[test]
    fn test_edge_is_seen_by_one_tick_only() {
        let mut scene = scene();
        scene.input_mut().press_key(KeyCode::Space);
        scene.update(TICK).unwrap();
        assert_eq!(scene.hero().state(), SWING);
        assert!(!scene.input().state().just_down(Action::Attack));
    }

    #[test]
    fn test_hero_stays_inside_world() {
        let mut scene = scene();
        scene.input_mut().press_key(KeyCode::ArrowUp);

        for _ in 0..200 {
            scene.update(TICK).unwrap();
        }

        // Body is 16x16, so its center stops 8px from the top edge
        assert_relative_eq!(scene.hero().position().y, 8.0, epsilon = 1.0);
        assert!(scene.hero().velocity().y.abs() < 5.0);
        assert_relative_eq!(scene.hero().position().x, 200.0, epsilon = 1e-3);
    }

    #[test]
    fn test_dash_cooldown_through_scene() {
        let mut scene = scene();
        scene.input_mut().press_key(KeyCode::ShiftLeft);
        scene.update(TICK).unwrap();
        assert_eq!(scene.hero().state(), DASH);

        scene.input_mut().release_key(KeyCode::ShiftLeft);
        for _ in 0..15 {
            scene.update(TICK).unwrap();
        }
        assert_eq!(scene.hero().state(), IDLE);
        assert_eq!(scene.hero().tint(), None);
    }

    #[test]
    fn test_toggle_debug_key() {
        let mut scene = scene();
        assert!(scene.world().is_debug());

        scene.input_mut().press_key(KeyCode::KeyD);
        scene.update(TICK).unwrap();
        assert!(!scene.world().is_debug());

        // Holding the key does not toggle again
        scene.update(TICK).unwrap();
        assert!(!scene.world().is_debug());
    }
}
