// Finite-state machine
//
// A generic driver for named states with `enter` / `execute` / `exit` hooks.
//
// ## Architecture
//
// - `state`: the `State` trait and the `Transitions` handle given to `execute`
// - `machine`: `StateMap` builder and the `StateMachine` driver
//
// ## Usage Example
//
// ```rust
// let states = StateMap::new()
//     .with("idle", IdleState)
//     .with("move", MoveState);
// let mut fsm = StateMachine::new("idle", states, &mut ctx)?;
//
// // Once per tick
// fsm.step(&mut ctx)?;
// ```

mod machine;
mod state;

pub use machine::{StateMachine, StateMap};
pub use state::{State, Transitions};
