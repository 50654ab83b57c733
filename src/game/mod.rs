// Game modules: the hero and the scene hosting it

pub mod config;
pub mod hero;
pub mod scene;

// Re-export commonly used types
pub use config::GameConfig;
pub use hero::{Direction, Hero, HeroContext, HeroStats};
pub use scene::PlayScene;
