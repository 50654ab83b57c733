// Input handling system
//
// Keyboard input for the hero, with level (`is_down`) and edge (`just_down`)
// queries and remappable bindings.
//
// ## Architecture
//
// - `action`: game actions and default key bindings
// - `state`: per-tick keyboard state
// - `config`: binding configuration and remapping
// - `manager`: turns winit events into input state
//
// ## Usage Example
//
// ```rust
// let mut input = InputManager::new(InputConfig::with_defaults())?;
//
// // In your event loop, process keyboard events
// input.process_keyboard_event(&key_event);
//
// // Read the state during the tick...
// if input.state().just_down(Action::Attack) {
//     // Attack was pressed this tick
// }
//
// // ...then clear edges once the tick is done
// input.update();
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod state;

// Re-export commonly used types
pub use action::{Action, InputSource, CONTROLS};
pub use config::InputConfig;
pub use manager::InputManager;
pub use state::InputState;
