//! State machine that tracks the current and previous state.

use super::error::HookError;
use super::state::State;
use std::fmt;
use tracing::debug;

/// Finite state machine holding the active state and the one before it.
///
/// The machine borrows its states for `'s`; the caller owns them and keeps
/// whatever data the hooks write to. Dropping the machine does not fire
/// `on_exit` on the current state.
///
/// Transitions are not validated: the caller decides when to move and where.
///
/// # Example
///
/// ```rust
/// use lifecycle_fsm::core::{Machine, State};
///
/// struct Named(&'static str);
///
/// impl State for Named {
///     fn name(&self) -> &str {
///         self.0
///     }
/// }
///
/// let green = Named("green");
/// let red = Named("red");
///
/// let mut machine = Machine::new(&green)?;
/// assert_eq!(machine.current().name(), "green");
/// assert!(machine.previous().is_none());
///
/// machine.transition_to(&red)?;
/// assert_eq!(machine.current().name(), "red");
/// assert_eq!(machine.previous().map(|s| s.name()), Some("green"));
/// # Ok::<(), lifecycle_fsm::core::HookError>(())
/// ```
pub struct Machine<'s> {
    current: &'s dyn State,
    previous: Option<&'s dyn State>,
}

impl<'s> Machine<'s> {
    /// Create a machine in `initial` and fire its `on_enter` hook.
    ///
    /// If the hook fails its error is returned unchanged and no machine is
    /// produced.
    pub fn new(initial: &'s dyn State) -> Result<Self, HookError> {
        let machine = Self {
            current: initial,
            previous: None,
        };

        debug!(state = initial.name(), "entering initial state");
        initial
            .on_enter()
            .map_err(|err| hook_failed("on_enter", initial, err))?;

        Ok(machine)
    }

    /// Move to `next`, firing the current state's `on_exit` and then
    /// `next`'s `on_enter`.
    ///
    /// `next` may be the current state; both hooks still fire.
    ///
    /// If `on_exit` fails the machine is left untouched. If `on_enter` fails
    /// the machine has already moved: `current` is `next` and `previous` is
    /// the state that was just exited.
    pub fn transition_to(&mut self, next: &'s dyn State) -> Result<(), HookError> {
        let from = self.current;
        debug!(from = from.name(), to = next.name(), "transitioning");

        from.on_exit().map_err(|err| hook_failed("on_exit", from, err))?;

        self.previous = Some(from);
        self.current = next;

        self.current
            .on_enter()
            .map_err(|err| hook_failed("on_enter", next, err))
    }

    /// Get the active state.
    pub fn current(&self) -> &'s dyn State {
        self.current
    }

    /// Get the state active before the last transition, if any.
    pub fn previous(&self) -> Option<&'s dyn State> {
        self.previous
    }
}

impl fmt::Debug for Machine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("current", &self.current.name())
            .field("previous", &self.previous.map(|s| s.name()))
            .finish()
    }
}

fn hook_failed(hook: &'static str, state: &dyn State, err: HookError) -> HookError {
    debug!(hook, state = state.name(), error = %err, "hook failed");
    err
}
