// Hero action definitions and default key bindings

use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    // Combat
    Attack,
    Dash,
    Spin,
    /// Demo-only: make the hero take a hit
    Hurt,

    // Meta
    ToggleDebug,
}

impl Action {
    /// The four directional actions, in resolution order
    pub const MOVEMENT: [Action; 4] = [
        Action::MoveUp,
        Action::MoveDown,
        Action::MoveLeft,
        Action::MoveRight,
    ];

    /// Actions the hero cannot be played without
    pub const HERO: [Action; 8] = [
        Action::MoveUp,
        Action::MoveDown,
        Action::MoveLeft,
        Action::MoveRight,
        Action::Attack,
        Action::Dash,
        Action::Spin,
        Action::Hurt,
    ];
}

/// Represents an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }
}

/// Default keyboard bindings: cursor keys, space, shift and letter keys
pub fn default_bindings() -> Vec<(InputSource, Action)> {
    vec![
        // Movement (cursor keys)
        (InputSource::key(KeyCode::ArrowUp), Action::MoveUp),
        (InputSource::key(KeyCode::ArrowDown), Action::MoveDown),
        (InputSource::key(KeyCode::ArrowLeft), Action::MoveLeft),
        (InputSource::key(KeyCode::ArrowRight), Action::MoveRight),
        // Combat
        (InputSource::key(KeyCode::Space), Action::Attack),
        (InputSource::key(KeyCode::ShiftLeft), Action::Dash),
        (InputSource::key(KeyCode::ShiftRight), Action::Dash),
        (InputSource::key(KeyCode::KeyF), Action::Spin),
        (InputSource::key(KeyCode::KeyH), Action::Hurt),
        // Meta
        (InputSource::key(KeyCode::KeyD), Action::ToggleDebug),
    ]
}

/// One-line help text for the default bindings
pub const CONTROLS: &str =
    "Arrows: move | SPACE: attack | SHIFT: dash attack | F: spin attack | H: hurt (knockback) | D: debug (toggle)";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_source_keyboard_creation() {
        let source = InputSource::key(KeyCode::Space);
        assert_eq!(source, InputSource::Keyboard(KeyCode::Space));
    }

    #[test]
    fn test_default_bindings_cover_hero_actions() {
        let bindings = default_bindings();
        for required in Action::HERO {
            assert!(
                bindings.iter().any(|(_, action)| *action == required),
                "{:?} has no default binding",
                required
            );
        }
    }

    #[test]
    fn test_both_shift_keys_dash() {
        let bindings = default_bindings();
        let dash_keys: Vec<_> = bindings
            .iter()
            .filter(|(_, action)| *action == Action::Dash)
            .map(|(source, _)| *source)
            .collect();
        assert_eq!(
            dash_keys,
            vec![
                InputSource::key(KeyCode::ShiftLeft),
                InputSource::key(KeyCode::ShiftRight)
            ]
        );
    }

    #[test]
    fn test_no_duplicate_inputs() {
        let bindings = default_bindings();
        let mut seen_sources = std::collections::HashSet::new();
        for (source, _) in bindings {
            assert!(
                seen_sources.insert(source),
                "Duplicate input source found in default bindings"
            );
        }
    }
}
