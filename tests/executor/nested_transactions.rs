//! Nested Transaction Tests
//!
//! Behavior of begin/rollback/commit across several levels, checked through
//! both reads and value counts.

use crate::common::*;
use nestkv::Command;

#[test]
fn counting_walkthrough() {
    let executor = create_executor();

    run_all(&executor, vec![set("a", "10"), set("b", "10")]);
    assert_eq!(count_of(&executor, "10"), 2);

    executor.execute(unset("a")).unwrap();
    assert_eq!(count_of(&executor, "10"), 1);

    run_all(&executor, vec![Command::Begin, set("b", "30")]);
    assert_eq!(count_of(&executor, "10"), 0);
    assert_eq!(count_of(&executor, "30"), 1);

    executor.execute(Command::Rollback).unwrap();
    assert_eq!(value_of(&executor, "b").as_deref(), Some("10"));
    assert_eq!(count_of(&executor, "10"), 1);
    assert_eq!(count_of(&executor, "30"), 0);
}

#[test]
fn rollback_unwinds_one_level_at_a_time() {
    let executor = create_executor();
    run_all(
        &executor,
        vec![
            set("a", "10"),
            Command::Begin,
            set("a", "20"),
            Command::Begin,
            set("a", "30"),
        ],
    );
    assert_eq!(value_of(&executor, "a").as_deref(), Some("30"));

    executor.execute(Command::Rollback).unwrap();
    assert_eq!(value_of(&executor, "a").as_deref(), Some("20"));
    assert_eq!(count_of(&executor, "30"), 0);
    assert_eq!(count_of(&executor, "20"), 1);

    executor.execute(Command::Rollback).unwrap();
    assert_eq!(value_of(&executor, "a").as_deref(), Some("10"));
    assert_eq!(count_of(&executor, "20"), 0);
    assert_eq!(count_of(&executor, "10"), 1);
}

#[test]
fn commit_flattens_every_level() {
    let executor = create_executor();
    run_all(
        &executor,
        vec![
            Command::Begin,
            set("a", "30"),
            Command::Begin,
            set("a", "40"),
            set("b", "1"),
            Command::Commit,
        ],
    );

    assert_eq!(executor.depth(), 0);
    assert_eq!(value_of(&executor, "a").as_deref(), Some("40"));
    assert_eq!(value_of(&executor, "b").as_deref(), Some("1"));
    assert_eq!(count_of(&executor, "30"), 0);
    assert_eq!(count_of(&executor, "40"), 1);
}

#[test]
fn commit_then_rollback_has_nothing_to_undo() {
    let executor = create_executor();
    run_all(&executor, vec![Command::Begin, set("a", "40"), Command::Commit]);

    assert!(executor.execute(Command::Rollback).is_err());
    assert_eq!(value_of(&executor, "a").as_deref(), Some("40"));
}

#[test]
fn unset_inside_transaction_hides_committed_value() {
    let executor = create_executor();
    run_all(&executor, vec![set("a", "10"), Command::Begin, unset("a")]);

    assert_eq!(value_of(&executor, "a"), None);
    assert_eq!(count_of(&executor, "10"), 0);

    executor.execute(Command::Rollback).unwrap();
    assert_eq!(value_of(&executor, "a").as_deref(), Some("10"));
    assert_eq!(count_of(&executor, "10"), 1);
}

#[test]
fn committed_unset_removes_key() {
    let executor = create_executor();
    run_all(
        &executor,
        vec![
            set("a", "10"),
            Command::Begin,
            unset("a"),
            Command::Begin,
            set("b", "10"),
            Command::Commit,
        ],
    );

    assert_eq!(value_of(&executor, "a"), None);
    assert_eq!(value_of(&executor, "b").as_deref(), Some("10"));
    assert_eq!(count_of(&executor, "10"), 1);
}

#[test]
fn set_in_inner_block_over_unset_in_outer_block() {
    let executor = create_executor();
    run_all(
        &executor,
        vec![
            set("a", "10"),
            Command::Begin,
            unset("a"),
            Command::Begin,
            set("a", "20"),
        ],
    );
    assert_eq!(value_of(&executor, "a").as_deref(), Some("20"));

    executor.execute(Command::Rollback).unwrap();
    assert_eq!(value_of(&executor, "a"), None);
    assert_eq!(count_of(&executor, "20"), 0);
    assert_eq!(count_of(&executor, "10"), 0);

    executor.execute(Command::Rollback).unwrap();
    assert_eq!(value_of(&executor, "a").as_deref(), Some("10"));
    assert_eq!(count_of(&executor, "10"), 1);
}

#[test]
fn repeated_set_of_same_value_counts_once() {
    let executor = create_executor();
    run_all(&executor, vec![set("a", "10"), set("a", "10")]);
    assert_eq!(count_of(&executor, "10"), 1);

    run_all(&executor, vec![Command::Begin, set("a", "10"), set("a", "10")]);
    assert_eq!(count_of(&executor, "10"), 1);

    executor.execute(Command::Rollback).unwrap();
    assert_eq!(count_of(&executor, "10"), 1);
}

#[test]
fn empty_transactions_change_nothing() {
    let executor = create_executor();
    executor.execute(set("a", "10")).unwrap();

    run_all(&executor, vec![Command::Begin, Command::Rollback]);
    run_all(&executor, vec![Command::Begin, Command::Begin, Command::Commit]);

    assert_eq!(value_of(&executor, "a").as_deref(), Some("10"));
    assert_eq!(count_of(&executor, "10"), 1);
    assert_eq!(executor.depth(), 0);
}

#[test]
fn begin_set_commit_matches_plain_set() {
    let in_txn = create_executor();
    run_all(&in_txn, vec![Command::Begin, set("k", "v"), Command::Commit]);

    let plain = create_executor();
    plain.execute(set("k", "v")).unwrap();

    assert_eq!(value_of(&in_txn, "k"), value_of(&plain, "k"));
    assert_eq!(count_of(&in_txn, "v"), count_of(&plain, "v"));
    assert_eq!(in_txn.depth(), plain.depth());
}
