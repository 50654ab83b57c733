// Hero FSM
//
// A top-down hero whose movement, animation and attacks are driven by a
// finite-state machine.
//
// - `engine`: generic state machine plus the headless engine pieces the
//   states talk to (input, timers, animation, sprite, physics, game loop)
// - `game`: the hero, its six states and the play scene hosting it
// - `error`: configuration and transition errors

pub mod engine;
pub mod error;
pub mod game;

pub use error::{ConfigError, GameError, InvalidTransitionError, Result};
