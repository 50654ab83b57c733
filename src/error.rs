// Error types shared by the engine and the game

use crate::engine::input::Action;

/// Invalid setup detected while building a state machine, an input
/// configuration or a hero. Always fatal.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("State map is empty")]
    EmptyStateMap,

    #[error("State registered twice: {0}")]
    DuplicateState(String),

    #[error("Initial state not registered: {0}")]
    UnknownInitialState(String),

    #[error("Animation not registered: {0}")]
    MissingAnimation(String),

    #[error("Invalid animation {key}: {reason}")]
    InvalidAnimation { key: String, reason: String },

    #[error("No key bound to action: {0:?}")]
    UnboundAction(Action),

    #[error("Invalid stat {stat}: {reason}")]
    InvalidStat { stat: &'static str, reason: String },
}

/// A transition was requested to a state the machine does not know.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("No state named `{name}` to transition to (current state: `{current}`)")]
pub struct InvalidTransitionError {
    pub name: String,
    pub current: String,
}

/// Any error raised while building or running the game
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GameError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid transition: {0}")]
    InvalidTransition(#[from] InvalidTransitionError),
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;
