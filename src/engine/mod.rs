// Engine modules: state machine, input, timers, animation, physics, game loop

pub mod animation;
pub mod fsm;
pub mod game_loop;
pub mod input;
pub mod physics;
pub mod sprite;
pub mod timer;
