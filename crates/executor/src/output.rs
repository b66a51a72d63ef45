//! Output enum for command execution results.
//!
//! Every command produces exactly one output type. This mapping is
//! deterministic: the same command always produces the same output variant
//! (though the values may differ based on store state).

use nestkv_core::Value;
use serde::{Deserialize, Serialize};

/// Successful command execution results.
///
/// Each [`Command`](crate::Command) variant maps to exactly one `Output`
/// variant.
///
/// # Example
///
/// ```
/// use nestkv_executor::{Command, Executor, Key, Output, Value};
///
/// let executor = Executor::new();
/// executor.execute(Command::Set { key: Key::from("a"), value: Value::from("10") }).unwrap();
///
/// match executor.execute(Command::Get { key: Key::from("a") }).unwrap() {
///     Output::Maybe(Some(v)) => assert_eq!(v, Value::from("10")),
///     other => panic!("Get always returns Maybe, got {:?}", other),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    /// No return value (set, unset, begin, rollback, commit)
    Unit,

    /// Optional value (get; `None` when the key is absent)
    Maybe(Option<Value>),

    /// Number of keys holding a value (numequalto)
    Count(u64),

    /// Transaction info
    TxnInfo {
        /// Number of open transaction blocks
        depth: usize,
    },
}
