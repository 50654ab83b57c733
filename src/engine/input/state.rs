// Per-tick keyboard state with level and edge queries

use super::action::Action;
use std::collections::HashSet;

/// Snapshot of which actions are held and which changed this tick.
///
/// Tracked per action: when several keys share an action, the
/// [`InputManager`](super::InputManager) only releases the action once the
/// last of those keys goes up.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    /// Actions currently held down
    down: HashSet<Action>,

    /// Actions whose key went down this tick
    just_down: HashSet<Action>,

    /// Actions whose key went up this tick
    just_up: HashSet<Action>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Level-triggered: true every tick the action is held
    pub fn is_down(&self, action: Action) -> bool {
        self.down.contains(&action)
    }

    /// Edge-triggered: true only on the tick the action went down
    pub fn just_down(&self, action: Action) -> bool {
        self.just_down.contains(&action)
    }

    /// Edge-triggered: true only on the tick the action went up
    pub fn just_up(&self, action: Action) -> bool {
        self.just_up.contains(&action)
    }

    /// Check if any directional action is held
    pub fn any_movement_down(&self) -> bool {
        Action::MOVEMENT.iter().any(|action| self.is_down(*action))
    }

    /// Register an action press
    pub(crate) fn press(&mut self, action: Action) {
        if self.down.insert(action) {
            self.just_down.insert(action);
        }
    }

    /// Register an action release
    pub(crate) fn release(&mut self, action: Action) {
        if self.down.remove(&action) {
            self.just_up.insert(action);
        }
    }

    /// Clear edges for the next tick
    pub(crate) fn update(&mut self) {
        self.just_down.clear();
        self.just_up.clear();
    }

    /// Reset all input state
    pub fn reset(&mut self) {
        self.down.clear();
        self.just_down.clear();
        self.just_up.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_action() {
        let mut input = InputState::new();
        input.press(Action::Attack);
        assert!(input.is_down(Action::Attack));
        assert!(input.just_down(Action::Attack));
    }

    #[test]
    fn test_release_action() {
        let mut input = InputState::new();
        input.press(Action::Dash);
        input.update();
        input.release(Action::Dash);
        assert!(!input.is_down(Action::Dash));
        assert!(input.just_up(Action::Dash));
    }

    #[test]
    fn test_edge_fires_once_per_press() {
        let mut input = InputState::new();
        input.press(Action::Spin);
        assert!(input.just_down(Action::Spin));

        input.update();
        assert!(input.is_down(Action::Spin));
        assert!(!input.just_down(Action::Spin));

        // Holding the key does not retrigger the edge
        input.press(Action::Spin);
        assert!(!input.just_down(Action::Spin));
    }

    #[test]
    fn test_any_movement_down() {
        let mut input = InputState::new();
        assert!(!input.any_movement_down());

        input.press(Action::Attack);
        assert!(!input.any_movement_down());

        input.press(Action::MoveLeft);
        assert!(input.any_movement_down());
    }

    #[test]
    fn test_reset() {
        let mut input = InputState::new();
        input.press(Action::MoveUp);
        input.press(Action::Attack);
        input.reset();

        assert!(!input.is_down(Action::MoveUp));
        assert!(!input.just_down(Action::Attack));
        assert!(!input.any_movement_down());
    }

    #[test]
    fn test_release_unpressed_action() {
        let mut input = InputState::new();
        input.release(Action::Hurt);

        assert!(!input.just_up(Action::Hurt));
    }
}
