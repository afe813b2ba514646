//! Lifecycle FSM: a minimal finite state machine with enter/exit hooks
//!
//! A [`Machine`] holds the current state and the state before it. Moving to a
//! new state fires the old state's exit hook, then the new state's enter hook.
//! Deciding when to move, and where, is left to the caller.
//!
//! # Core Concepts
//!
//! - **State**: Any type implementing the `State` trait (name plus hooks)
//! - **Machine**: Borrows states and performs transitions
//! - **Hook errors**: Failures from hooks are returned unchanged
//!
//! # Example
//!
//! ```rust
//! use lifecycle_fsm::core::{HookResult, Machine, State};
//! use std::cell::RefCell;
//!
//! struct Step<'a> {
//!     name: &'static str,
//!     log: &'a RefCell<Vec<String>>,
//! }
//!
//! impl State for Step<'_> {
//!     fn name(&self) -> &str {
//!         self.name
//!     }
//!
//!     fn on_enter(&self) -> HookResult {
//!         self.log.borrow_mut().push(format!("enter {}", self.name));
//!         Ok(())
//!     }
//!
//!     fn on_exit(&self) -> HookResult {
//!         self.log.borrow_mut().push(format!("exit {}", self.name));
//!         Ok(())
//!     }
//! }
//!
//! let log = RefCell::new(Vec::new());
//! let idle = Step { name: "idle", log: &log };
//! let busy = Step { name: "busy", log: &log };
//!
//! let mut machine = Machine::new(&idle)?;
//! machine.transition_to(&busy)?;
//!
//! assert_eq!(*log.borrow(), vec!["enter idle", "exit idle", "enter busy"]);
//! assert_eq!(machine.previous().map(|s| s.name()), Some("idle"));
//! # Ok::<(), lifecycle_fsm::core::HookError>(())
//! ```

pub mod core;

// Re-export commonly used types
pub use core::{HookError, HookResult, Machine, State};
