//! Core State trait for state machine states.
//!
//! Every state a [`Machine`](super::Machine) can hold implements this trait.
//! A state is identified by its name and reacts to being entered and exited.

use super::error::HookResult;

/// Trait for state machine states.
///
/// The set of states is open: any caller type can implement it, and a single
/// machine may move between states of different concrete types.
///
/// Hooks take `&self`. States that need to record something (counters,
/// accumulated output) do so through interior mutability or through shared
/// references to caller-owned data.
///
/// # Example
///
/// ```rust
/// use lifecycle_fsm::core::{HookResult, State};
/// use std::cell::Cell;
///
/// struct Door<'a> {
///     opened: &'a Cell<usize>,
/// }
///
/// impl State for Door<'_> {
///     fn name(&self) -> &str {
///         "open"
///     }
///
///     fn on_enter(&self) -> HookResult {
///         self.opened.set(self.opened.get() + 1);
///         Ok(())
///     }
/// }
///
/// let opened = Cell::new(0);
/// let door = Door { opened: &opened };
/// door.on_enter().unwrap();
/// assert_eq!(door.name(), "open");
/// assert_eq!(opened.get(), 1);
/// ```
pub trait State {
    /// Get the state's name.
    ///
    /// Must be pure and return the same value on every call, so callers can
    /// branch on names instead of on identity or type.
    fn name(&self) -> &str;

    /// Called right after the state becomes the current state.
    ///
    /// Must not trigger a transition on the machine holding this state.
    ///
    /// Default implementation does nothing.
    fn on_enter(&self) -> HookResult {
        Ok(())
    }

    /// Called right before the state stops being the current state.
    ///
    /// Must not trigger a transition on the machine holding this state.
    ///
    /// Default implementation does nothing.
    fn on_exit(&self) -> HookResult {
        Ok(())
    }
}
