//! Property-based tests for the state machine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated transition sequences.

use lifecycle_fsm::core::{HookResult, Machine, State};
use proptest::prelude::*;
use std::cell::{Cell, RefCell};

const NAMES: [&str; 4] = ["Initial", "Processing", "Complete", "Failed"];

struct TestState<'a> {
    name: &'static str,
    enters: Cell<usize>,
    exits: Cell<usize>,
    log: &'a RefCell<Vec<String>>,
}

impl<'a> TestState<'a> {
    fn new(name: &'static str, log: &'a RefCell<Vec<String>>) -> Self {
        Self {
            name,
            enters: Cell::new(0),
            exits: Cell::new(0),
            log,
        }
    }
}

impl State for TestState<'_> {
    fn name(&self) -> &str {
        self.name
    }

    fn on_enter(&self) -> HookResult {
        self.enters.set(self.enters.get() + 1);
        self.log.borrow_mut().push(format!("+{}", self.name));
        Ok(())
    }

    fn on_exit(&self) -> HookResult {
        self.exits.set(self.exits.get() + 1);
        self.log.borrow_mut().push(format!("-{}", self.name));
        Ok(())
    }
}

prop_compose! {
    fn arbitrary_path()(steps in prop::collection::vec(0..NAMES.len(), 0..20)) -> Vec<usize> {
        steps
    }
}

proptest! {
    #[test]
    fn state_name_is_stable(index in 0..NAMES.len()) {
        let log = RefCell::new(Vec::new());
        let state = TestState::new(NAMES[index], &log);
        let name1 = state.name().to_string();
        let name2 = state.name().to_string();
        prop_assert_eq!(name1, name2);
    }

    #[test]
    fn only_current_state_is_active(path in arbitrary_path()) {
        let log = RefCell::new(Vec::new());
        let states: Vec<TestState> = NAMES.iter().map(|&n| TestState::new(n, &log)).collect();

        let mut machine = Machine::new(&states[0]).unwrap();
        let mut current = 0;

        for &next in &path {
            machine.transition_to(&states[next]).unwrap();
            current = next;
        }

        for (i, state) in states.iter().enumerate() {
            let active = state.enters.get() - state.exits.get();
            prop_assert_eq!(active, usize::from(i == current));
        }
        prop_assert_eq!(machine.current().name(), NAMES[current]);
    }

    #[test]
    fn previous_tracks_last_current(path in arbitrary_path()) {
        let log = RefCell::new(Vec::new());
        let states: Vec<TestState> = NAMES.iter().map(|&n| TestState::new(n, &log)).collect();

        let mut machine = Machine::new(&states[0]).unwrap();
        prop_assert!(machine.previous().is_none());

        for &next in &path {
            let before = machine.current().name().to_string();
            machine.transition_to(&states[next]).unwrap();

            prop_assert_eq!(machine.previous().map(|s| s.name()), Some(before.as_str()));
            prop_assert_eq!(machine.current().name(), NAMES[next]);
        }
    }

    #[test]
    fn every_exit_is_followed_by_its_enter(path in arbitrary_path()) {
        let log = RefCell::new(Vec::new());
        let states: Vec<TestState> = NAMES.iter().map(|&n| TestState::new(n, &log)).collect();

        let mut machine = Machine::new(&states[0]).unwrap();
        let mut expected = vec![format!("+{}", NAMES[0])];
        let mut current = 0;

        for &next in &path {
            machine.transition_to(&states[next]).unwrap();
            expected.push(format!("-{}", NAMES[current]));
            expected.push(format!("+{}", NAMES[next]));
            current = next;
        }

        let recorded = log.borrow().clone();
        prop_assert_eq!(recorded.len(), 1 + 2 * path.len());
        prop_assert_eq!(recorded, expected);
    }
}
