// State machine driver

use std::collections::HashMap;
use std::fmt;

use log::debug;

use super::state::{State, Transitions};
use crate::error::{ConfigError, InvalidTransitionError, Result};

struct Slot<C> {
    name: String,
    state: Box<dyn State<C>>,
}

/// Named states collected before a [`StateMachine`] is built.
///
/// Validation (empty map, duplicate names) happens in [`StateMachine::new`].
pub struct StateMap<C> {
    slots: Vec<Slot<C>>,
}

impl<C> StateMap<C> {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Register a state under `name`
    pub fn insert<S>(&mut self, name: impl Into<String>, state: S)
    where
        S: State<C> + 'static,
    {
        self.slots.push(Slot {
            name: name.into(),
            state: Box::new(state),
        });
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with<S>(mut self, name: impl Into<String>, state: S) -> Self
    where
        S: State<C> + 'static,
    {
        self.insert(name, state);
        self
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<C> Default for StateMap<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives exactly one active state out of a fixed set of named states.
///
/// The context `C` is handed to every hook; the machine never stores it.
pub struct StateMachine<C> {
    slots: Vec<Slot<C>>,
    names: HashMap<String, usize>,
    current: usize,
}

impl<C> StateMachine<C> {
    /// Build the machine and enter `initial` right away
    pub fn new(initial: &str, states: StateMap<C>, ctx: &mut C) -> Result<Self> {
        if states.is_empty() {
            return Err(ConfigError::EmptyStateMap.into());
        }

        let mut names = HashMap::with_capacity(states.len());
        for (index, slot) in states.slots.iter().enumerate() {
            if names.insert(slot.name.clone(), index).is_some() {
                return Err(ConfigError::DuplicateState(slot.name.clone()).into());
            }
        }

        let current = names
            .get(initial)
            .copied()
            .ok_or_else(|| ConfigError::UnknownInitialState(initial.to_string()))?;

        let mut machine = Self {
            slots: states.slots,
            names,
            current,
        };

        debug!("Entering initial state `{}`", initial);
        machine.slots[current].state.enter(ctx)?;

        Ok(machine)
    }

    /// Name of the active state
    pub fn current_state(&self) -> &str {
        &self.slots[self.current].name
    }

    /// Registered state names, in registration order
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|slot| slot.name.as_str())
    }

    /// Leave the current state and enter `name`.
    ///
    /// Switching to the active state is allowed and runs `exit` then `enter`
    /// again. An unknown name leaves the machine untouched.
    pub fn transition(&mut self, name: &str, ctx: &mut C) -> Result<()> {
        let next = self
            .names
            .get(name)
            .copied()
            .ok_or_else(|| InvalidTransitionError {
                name: name.to_string(),
                current: self.current_state().to_string(),
            })?;
        self.switch_to(next, ctx)
    }

    /// Run the active state's `execute`, then apply any transition it asked for
    pub fn step(&mut self, ctx: &mut C) -> Result<()> {
        let Slot { name, state } = &mut self.slots[self.current];
        let mut fsm = Transitions::new(&self.names, name.as_str());
        state.execute(ctx, &mut fsm)?;

        if let Some(next) = fsm.into_requested() {
            self.switch_to(next, ctx)?;
        }
        Ok(())
    }

    fn switch_to(&mut self, next: usize, ctx: &mut C) -> Result<()> {
        let previous = self.current;
        self.slots[previous].state.exit(ctx)?;

        self.current = next;
        debug!(
            "State transition: {} -> {}",
            self.slots[previous].name, self.slots[next].name
        );

        self.slots[next].state.enter(ctx)
    }
}

impl<C> fmt::Debug for StateMachine<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.current_state())
            .field("states", &self.state_names().collect::<Vec<_>>())
            .finish()
    }
}
