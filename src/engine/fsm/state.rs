// State trait and the transition handle passed to `execute`

use std::collections::HashMap;

use crate::error::{InvalidTransitionError, Result};

/// A unit of behavior driven by a [`StateMachine`](super::StateMachine).
///
/// Every hook receives the machine's context `C`. Unimplemented hooks are
/// no-ops.
pub trait State<C> {
    /// Called when the machine switches to this state
    fn enter(&mut self, _ctx: &mut C) -> Result<()> {
        Ok(())
    }

    /// Called once per `step` while this state is active.
    ///
    /// A state requests a transition through `fsm` and should return right
    /// after doing so: the new state's `enter` runs as soon as this returns.
    fn execute(&mut self, _ctx: &mut C, _fsm: &mut Transitions<'_>) -> Result<()> {
        Ok(())
    }

    /// Called when the machine leaves this state
    fn exit(&mut self, _ctx: &mut C) -> Result<()> {
        Ok(())
    }
}

/// Handle a state uses from inside `execute` to ask for a transition.
///
/// The target is checked immediately; the switch itself is performed by the
/// machine before `step` returns.
#[derive(Debug)]
pub struct Transitions<'a> {
    names: &'a HashMap<String, usize>,
    current: &'a str,
    requested: Option<usize>,
}

impl<'a> Transitions<'a> {
    pub(super) fn new(names: &'a HashMap<String, usize>, current: &'a str) -> Self {
        Self {
            names,
            current,
            requested: None,
        }
    }

    /// Request a transition to `name`. A later request replaces an earlier one.
    pub fn transition(&mut self, name: &str) -> Result<(), InvalidTransitionError> {
        let index = self
            .names
            .get(name)
            .copied()
            .ok_or_else(|| InvalidTransitionError {
                name: name.to_string(),
                current: self.current.to_string(),
            })?;
        self.requested = Some(index);
        Ok(())
    }

    pub(super) fn into_requested(self) -> Option<usize> {
        self.requested
    }
}
