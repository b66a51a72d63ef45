//! Common test utilities for executor tests

#![allow(dead_code)]

use nestkv::{Command, Executor, Key, Output, Value};

/// Create an executor over a new, empty store
pub fn create_executor() -> Executor {
    Executor::new()
}

pub fn set(key: &str, value: &str) -> Command {
    Command::Set {
        key: Key::from(key),
        value: Value::from(value),
    }
}

pub fn get(key: &str) -> Command {
    Command::Get { key: Key::from(key) }
}

pub fn unset(key: &str) -> Command {
    Command::Unset { key: Key::from(key) }
}

pub fn num_equal_to(value: &str) -> Command {
    Command::NumEqualTo {
        value: Value::from(value),
    }
}

/// Run a batch of commands that must all succeed
pub fn run_all(executor: &Executor, cmds: Vec<Command>) {
    for cmd in cmds {
        let name = cmd.name();
        if let Err(e) = executor.execute(cmd) {
            panic!("{} failed: {}", name, e);
        }
    }
}

/// Effective value of a key
pub fn value_of(executor: &Executor, key: &str) -> Option<String> {
    match executor.execute(get(key)).unwrap() {
        Output::Maybe(v) => v.map(Value::into_inner),
        other => panic!("Expected Output::Maybe, got {:?}", other),
    }
}

/// Number of keys holding a value
pub fn count_of(executor: &Executor, value: &str) -> u64 {
    match executor.execute(num_equal_to(value)).unwrap() {
        Output::Count(n) => n,
        other => panic!("Expected Output::Count, got {:?}", other),
    }
}
