//! Core state machine types.
//!
//! This module contains the whole machine:
//! - State definitions via the `State` trait
//! - The `Machine` holding the current and previous state
//! - Hook errors returned from lifecycle callbacks

mod error;
mod machine;
mod state;

pub use error::{HookError, HookResult};
pub use machine::Machine;
pub use state::State;
