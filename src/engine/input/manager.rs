// Input manager - turns winit keyboard events into an InputState

use super::action::{Action, InputSource};
use super::config::InputConfig;
use super::state::InputState;
use crate::error::ConfigError;
use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Owns the key bindings and the keyboard state read by the game each tick
#[derive(Debug)]
pub struct InputManager {
    config: InputConfig,
    state: InputState,

    /// Bound keys currently held
    held: HashSet<KeyCode>,
}

impl InputManager {
    /// Create an input manager, failing if a hero action has no key
    pub fn new(config: InputConfig) -> Result<Self, ConfigError> {
        config.validate(&Action::HERO)?;
        Ok(Self {
            config,
            state: InputState::new(),
            held: HashSet::new(),
        })
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(key_code) = event.physical_key else {
            return;
        };

        match event.state {
            // Key repeat is not a new press
            ElementState::Pressed if !event.repeat => self.press_key(key_code),
            ElementState::Pressed => {}
            ElementState::Released => self.release_key(key_code),
        }
    }

    /// Register a key going down. Unbound keys are ignored.
    pub fn press_key(&mut self, key_code: KeyCode) {
        if let Some(action) = self.config.get_action(InputSource::key(key_code)) {
            self.held.insert(key_code);
            self.state.press(action);
        }
    }

    /// Register a key going up. Unbound keys are ignored.
    ///
    /// The action stays down while another key bound to it is still held.
    pub fn release_key(&mut self, key_code: KeyCode) {
        let Some(action) = self.config.get_action(InputSource::key(key_code)) else {
            return;
        };
        self.held.remove(&key_code);

        let still_held = self
            .held
            .iter()
            .any(|key| self.config.get_action(InputSource::key(*key)) == Some(action));
        if !still_held {
            self.state.release(action);
        }
    }

    /// Clear edge flags. Call once per tick after the game has read the state.
    pub fn update(&mut self) {
        self.state.update();
    }

    /// Current keyboard state
    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Release every key, e.g. when the window loses focus
    pub fn reset(&mut self) {
        self.held.clear();
        self.state.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> InputManager {
        InputManager::new(InputConfig::with_defaults()).unwrap()
    }

    #[test]
    fn test_press_bound_key() {
        let mut manager = manager();
        manager.press_key(KeyCode::Space);

        assert!(manager.state().is_down(Action::Attack));
        assert!(manager.state().just_down(Action::Attack));
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut manager = manager();
        manager.press_key(KeyCode::KeyQ);

        assert_eq!(manager.state(), &InputState::new());
    }

    #[test]
    fn test_update_clears_just_down() {
        let mut manager = manager();
        manager.press_key(KeyCode::KeyF);
        assert!(manager.state().just_down(Action::Spin));

        manager.update();
        assert!(!manager.state().just_down(Action::Spin));
        assert!(manager.state().is_down(Action::Spin));
    }

    #[test]
    fn test_release_key() {
        let mut manager = manager();
        manager.press_key(KeyCode::ArrowLeft);
        manager.update();
        manager.release_key(KeyCode::ArrowLeft);

        assert!(!manager.state().is_down(Action::MoveLeft));
        assert!(manager.state().just_up(Action::MoveLeft));
    }

    #[test]
    fn test_either_shift_dashes() {
        let mut manager = manager();
        manager.press_key(KeyCode::ShiftRight);
        assert!(manager.state().just_down(Action::Dash));
    }

    #[test]
    fn test_shared_action_held_until_last_key_released() {
        let mut manager = manager();
        manager.press_key(KeyCode::ShiftLeft);
        manager.press_key(KeyCode::ShiftRight);
        manager.update();

        manager.release_key(KeyCode::ShiftLeft);
        assert!(manager.state().is_down(Action::Dash));
        assert!(!manager.state().just_up(Action::Dash));

        manager.release_key(KeyCode::ShiftRight);
        assert!(!manager.state().is_down(Action::Dash));
        assert!(manager.state().just_up(Action::Dash));
    }

    #[test]
    fn test_new_rejects_missing_binding() {
        let mut config = InputConfig::with_defaults();
        config.unbind_action(Action::Hurt);

        let err = InputManager::new(config).unwrap_err();
        assert_eq!(err, ConfigError::UnboundAction(Action::Hurt));
    }

    #[test]
    fn test_new_rejects_empty_config() {
        let err = InputManager::new(InputConfig::new()).unwrap_err();
        assert_eq!(err, ConfigError::UnboundAction(Action::HERO[0]));
    }

    #[test]
    fn test_debug_key_is_optional() {
        let mut config = InputConfig::with_defaults();
        config.unbind_action(Action::ToggleDebug);

        assert!(InputManager::new(config).is_ok());
    }

    #[test]
    fn test_reset() {
        let mut manager = manager();
        manager.press_key(KeyCode::ArrowUp);
        manager.reset();

        assert!(!manager.state().is_down(Action::MoveUp));

        // Nothing is left held after a reset
        manager.press_key(KeyCode::ShiftLeft);
        manager.release_key(KeyCode::ShiftLeft);
        assert!(!manager.state().is_down(Action::Dash));
    }
}
