// Key binding configuration and remapping

use super::action::{default_bindings, Action, InputSource};
use crate::error::ConfigError;
use std::collections::HashMap;

/// Maps input sources (keys) to game actions
#[derive(Debug, Clone, Default)]
pub struct InputConfig {
    /// Mapping from input sources to actions
    bindings: HashMap<InputSource, Action>,

    /// Reverse mapping for quick lookups (action -> all sources)
    action_to_sources: HashMap<Action, Vec<InputSource>>,
}

impl InputConfig {
    /// Create an empty input configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration holding the default bindings
    pub fn with_defaults() -> Self {
        Self::from_bindings(default_bindings())
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings(bindings: Vec<(InputSource, Action)>) -> Self {
        let mut config = Self::new();
        for (source, action) in bindings {
            config.bind(source, action);
        }
        config
    }

    /// Bind an input source to an action
    pub fn bind(&mut self, source: InputSource, action: Action) {
        // A source drives at most one action
        self.unbind_source(source);

        self.bindings.insert(source, action);
        self.action_to_sources
            .entry(action)
            .or_default()
            .push(source);
    }

    /// Unbind an input source
    pub fn unbind_source(&mut self, source: InputSource) {
        if let Some(action) = self.bindings.remove(&source) {
            if let Some(sources) = self.action_to_sources.get_mut(&action) {
                sources.retain(|s| *s != source);
                if sources.is_empty() {
                    self.action_to_sources.remove(&action);
                }
            }
        }
    }

    /// Unbind all sources for an action
    pub fn unbind_action(&mut self, action: Action) {
        if let Some(sources) = self.action_to_sources.remove(&action) {
            for source in sources {
                self.bindings.remove(&source);
            }
        }
    }

    /// Get the action bound to an input source
    pub fn get_action(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }

    /// Check if an action has any bindings
    pub fn has_binding(&self, action: Action) -> bool {
        self.action_to_sources.contains_key(&action)
    }

    /// Fail on the first required action that has no key
    pub fn validate(&self, required: &[Action]) -> Result<(), ConfigError> {
        match required.iter().find(|action| !self.has_binding(**action)) {
            Some(action) => Err(ConfigError::UnboundAction(*action)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_bind_action() {
        let mut config = InputConfig::new();
        let source = InputSource::key(KeyCode::KeyA);
        config.bind(source, Action::MoveLeft);

        assert_eq!(config.get_action(source), Some(Action::MoveLeft));
    }

    #[test]
    fn test_unbind_source() {
        let mut config = InputConfig::new();
        let source = InputSource::key(KeyCode::KeyA);
        config.bind(source, Action::MoveLeft);
        config.unbind_source(source);

        assert_eq!(config.get_action(source), None);
        assert!(!config.has_binding(Action::MoveLeft));
    }

    #[test]
    fn test_unbind_action() {
        let mut config = InputConfig::new();
        let source1 = InputSource::key(KeyCode::KeyA);
        let source2 = InputSource::key(KeyCode::ArrowLeft);

        config.bind(source1, Action::MoveLeft);
        config.bind(source2, Action::MoveLeft);
        config.unbind_action(Action::MoveLeft);

        assert_eq!(config.get_action(source1), None);
        assert_eq!(config.get_action(source2), None);
    }

    #[test]
    fn test_rebind_source() {
        let mut config = InputConfig::new();
        let source = InputSource::key(KeyCode::Space);

        config.bind(source, Action::Attack);
        config.bind(source, Action::Spin);

        assert_eq!(config.get_action(source), Some(Action::Spin));
        assert!(!config.has_binding(Action::Attack));
    }

    #[test]
    fn test_validate_defaults() {
        let config = InputConfig::with_defaults();
        assert!(config.validate(&Action::HERO).is_ok());
    }

    #[test]
    fn test_validate_reports_unbound_action() {
        let mut config = InputConfig::with_defaults();
        config.unbind_action(Action::Spin);

        assert_eq!(
            config.validate(&Action::HERO),
            Err(ConfigError::UnboundAction(Action::Spin))
        );
    }

    #[test]
    fn test_from_bindings() {
        let bindings = vec![
            (InputSource::key(KeyCode::KeyA), Action::MoveLeft),
            (InputSource::key(KeyCode::KeyD), Action::MoveRight),
        ];

        let config = InputConfig::from_bindings(bindings);
        assert!(config.has_binding(Action::MoveLeft));
        assert!(config.has_binding(Action::MoveRight));
        assert!(!config.has_binding(Action::MoveUp));
    }
}
