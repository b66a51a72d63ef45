//! Command Dispatch Tests
//!
//! Tests that the Executor routes every Command variant to the store and
//! returns the matching Output variant.

use crate::common::*;
use nestkv::{Command, Output, Value};

// ============================================================================
// Data Commands
// ============================================================================

#[test]
fn set_returns_unit() {
    let executor = create_executor();
    let output = executor.execute(set("a", "10")).unwrap();
    assert!(matches!(output, Output::Unit));
}

#[test]
fn get_returns_maybe() {
    let executor = create_executor();
    assert_eq!(executor.execute(get("a")).unwrap(), Output::Maybe(None));

    executor.execute(set("a", "10")).unwrap();
    assert_eq!(
        executor.execute(get("a")).unwrap(),
        Output::Maybe(Some(Value::from("10")))
    );
}

#[test]
fn unset_returns_unit() {
    let executor = create_executor();
    executor.execute(set("a", "10")).unwrap();
    assert_eq!(executor.execute(unset("a")).unwrap(), Output::Unit);
    assert_eq!(value_of(&executor, "a"), None);
}

#[test]
fn num_equal_to_returns_count() {
    let executor = create_executor();
    assert_eq!(executor.execute(num_equal_to("10")).unwrap(), Output::Count(0));

    run_all(&executor, vec![set("a", "10"), set("b", "10"), set("c", "20")]);
    assert_eq!(executor.execute(num_equal_to("10")).unwrap(), Output::Count(2));
    assert_eq!(executor.execute(num_equal_to("20")).unwrap(), Output::Count(1));
}

// ============================================================================
// Transaction Commands
// ============================================================================

#[test]
fn begin_returns_unit() {
    let executor = create_executor();
    assert_eq!(executor.execute(Command::Begin).unwrap(), Output::Unit);
    assert!(executor.in_transaction());
}

#[test]
fn rollback_and_commit_return_unit() {
    let executor = create_executor();
    executor.execute(Command::Begin).unwrap();
    assert_eq!(executor.execute(Command::Rollback).unwrap(), Output::Unit);

    executor.execute(Command::Begin).unwrap();
    assert_eq!(executor.execute(Command::Commit).unwrap(), Output::Unit);
    assert!(!executor.in_transaction());
}

#[test]
fn txn_info_reports_depth() {
    let executor = create_executor();
    assert_eq!(
        executor.execute(Command::TxnInfo).unwrap(),
        Output::TxnInfo { depth: 0 }
    );

    run_all(&executor, vec![Command::Begin, Command::Begin, Command::Begin]);
    assert_eq!(
        executor.execute(Command::TxnInfo).unwrap(),
        Output::TxnInfo { depth: 3 }
    );
    assert_eq!(executor.depth(), 3);
}

// ============================================================================
// Batch Dispatch
// ============================================================================

#[test]
fn execute_many_matches_sequential_execution() {
    let batch = || {
        vec![
            set("a", "10"),
            Command::Begin,
            set("a", "20"),
            get("a"),
            Command::Rollback,
            get("a"),
            num_equal_to("10"),
        ]
    };

    let batched = create_executor().execute_many(batch());

    let sequential_executor = create_executor();
    let sequential: Vec<_> = batch()
        .into_iter()
        .map(|cmd| sequential_executor.execute(cmd))
        .collect();

    assert_eq!(batched, sequential);
    assert_eq!(batched[3], Ok(Output::Maybe(Some(Value::from("20")))));
    assert_eq!(batched[5], Ok(Output::Maybe(Some(Value::from("10")))));
    assert_eq!(batched[6], Ok(Output::Count(1)));
}
