//! Word-splitting automaton
//!
//! Prints the first word of every input line. Input is taken from the
//! command line arguments, or from stdin when none are given.
//!
//! Run with: `RUST_LOG=lifecycle_fsm=debug cargo run --example word_split -- "abc def"`

use lifecycle_fsm::{HookResult, Machine, State};
use std::cell::{Cell, RefCell};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

/// Skipping leading spaces; keeps the first character of the word on exit.
struct Before<'a> {
    out: &'a RefCell<String>,
    seen: &'a Cell<char>,
}

impl State for Before<'_> {
    fn name(&self) -> &str {
        "before"
    }

    fn on_exit(&self) -> HookResult {
        self.out.borrow_mut().push(self.seen.get());
        Ok(())
    }
}

/// Copying the first word.
struct Inside;

impl State for Inside {
    fn name(&self) -> &str {
        "inside"
    }
}

/// Ignoring the rest of the line.
struct After<'a> {
    out: &'a RefCell<String>,
}

impl State for After<'_> {
    fn name(&self) -> &str {
        "after"
    }

    fn on_exit(&self) -> HookResult {
        self.out.borrow_mut().push('\n');
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let input = if args.is_empty() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        let mut joined = args.join("\n");
        joined.push('\n');
        joined
    };

    let out = RefCell::new(String::new());
    let seen = Cell::new('\0');

    let before = Before {
        out: &out,
        seen: &seen,
    };
    let inside = Inside;
    let after = After { out: &out };

    let mut machine = Machine::new(&before)?;

    for c in input.chars() {
        seen.set(c);
        if c == '\n' {
            machine.transition_to(&before)?;
            continue;
        }
        match machine.current().name() {
            "before" if c != ' ' => machine.transition_to(&inside)?,
            "inside" if c == ' ' => machine.transition_to(&after)?,
            "inside" => out.borrow_mut().push(c),
            _ => {}
        }
    }

    print!("{}", out.borrow());
    Ok(())
}
