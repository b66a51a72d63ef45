//! Command enum defining all NestKV operations.
//!
//! Commands are the "instruction set" of NestKV. Every operation that can be
//! performed on the store is represented as a variant of this enum.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON
//! - **Typed**: Arity is part of the variant, so malformed calls cannot exist
//! - **Pure data**: No closures or executable code

use nestkv_core::{Key, Value};
use serde::{Deserialize, Serialize};

/// A command is a self-contained, serializable operation.
///
/// # Command Categories
///
/// | Category | Count | Description |
/// |----------|-------|-------------|
/// | Data | 4 | set, get, unset, numequalto |
/// | Transaction | 4 | begin, rollback, commit, info |
///
/// # Example
///
/// ```
/// use nestkv_executor::{Command, Key, Value};
///
/// let cmd = Command::Set {
///     key: Key::from("a"),
///     value: Value::from("10"),
/// };
/// assert_eq!(cmd.name(), "SET");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    // ==================== Data (4) ====================
    /// Set a key to a value.
    /// Returns: `Output::Unit`
    Set { key: Key, value: Value },

    /// Get the effective value of a key.
    /// Returns: `Output::Maybe`
    Get { key: Key },

    /// Unset a key.
    /// Returns: `Output::Unit`
    Unset { key: Key },

    /// Count keys whose effective value equals `value`.
    /// Returns: `Output::Count`
    NumEqualTo { value: Value },

    // ==================== Transaction (4) ====================
    /// Open a new transaction block.
    /// Returns: `Output::Unit`
    Begin,

    /// Discard the innermost transaction block.
    /// Returns: `Output::Unit`, or `Error::NoTransaction`
    Rollback,

    /// Close all transaction blocks, keeping their changes.
    /// Returns: `Output::Unit`, or `Error::NoTransaction`
    Commit,

    /// Report the number of open transaction blocks.
    /// Returns: `Output::TxnInfo`
    TxnInfo,
}

impl Command {
    /// Verb used for this command on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Command::Set { .. } => "SET",
            Command::Get { .. } => "GET",
            Command::Unset { .. } => "UNSET",
            Command::NumEqualTo { .. } => "NUMEQUALTO",
            Command::Begin => "BEGIN",
            Command::Rollback => "ROLLBACK",
            Command::Commit => "COMMIT",
            Command::TxnInfo => "TXNINFO",
        }
    }
}
