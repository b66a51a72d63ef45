//! Error Handling Tests
//!
//! Tests for error conditions in the executor layer. Failed commands must
//! leave the store exactly as they found it.

use crate::common::*;
use nestkv::{Command, Error};

// ============================================================================
// Transaction Errors
// ============================================================================

#[test]
fn rollback_without_transaction() {
    let executor = create_executor();
    let result = executor.execute(Command::Rollback);
    assert_eq!(result, Err(Error::NoTransaction));
}

#[test]
fn commit_without_transaction() {
    let executor = create_executor();
    let result = executor.execute(Command::Commit);
    assert_eq!(result, Err(Error::NoTransaction));
}

#[test]
fn failed_rollback_leaves_state_unchanged() {
    let executor = create_executor();
    run_all(&executor, vec![set("a", "10"), set("b", "10"), unset("b")]);

    assert!(executor.execute(Command::Rollback).is_err());

    assert_eq!(value_of(&executor, "a").as_deref(), Some("10"));
    assert_eq!(value_of(&executor, "b"), None);
    assert_eq!(count_of(&executor, "10"), 1);
    assert_eq!(executor.depth(), 0);
}

#[test]
fn extra_rollback_after_closing_all_blocks() {
    let executor = create_executor();
    run_all(&executor, vec![Command::Begin, set("a", "1"), Command::Commit]);

    assert_eq!(executor.execute(Command::Rollback), Err(Error::NoTransaction));
    assert_eq!(executor.execute(Command::Commit), Err(Error::NoTransaction));
    assert_eq!(value_of(&executor, "a").as_deref(), Some("1"));
}

#[test]
fn error_messages() {
    assert_eq!(Error::NoTransaction.to_string(), "no transaction");
    assert_eq!(
        Error::invalid_command("bad verb").to_string(),
        "invalid command: bad verb"
    );
}

// ============================================================================
// Missing Data Is Not An Error
// ============================================================================

#[test]
fn get_missing_key_is_absent() {
    let executor = create_executor();
    assert_eq!(value_of(&executor, "nope"), None);
}

#[test]
fn unset_missing_key_is_noop() {
    let executor = create_executor();
    executor.execute(unset("nope")).unwrap();
    assert_eq!(value_of(&executor, "nope"), None);
    assert_eq!(count_of(&executor, ""), 0);
}

#[test]
fn unset_missing_key_inside_transaction_is_noop() {
    let executor = create_executor();
    run_all(&executor, vec![Command::Begin, unset("nope"), Command::Commit]);
    assert_eq!(value_of(&executor, "nope"), None);
}

#[test]
fn count_of_unused_value_is_zero() {
    let executor = create_executor();
    executor.execute(set("a", "10")).unwrap();
    assert_eq!(count_of(&executor, "11"), 0);
}
