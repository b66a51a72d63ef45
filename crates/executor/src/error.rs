//! Error types for command execution.
//!
//! All errors from command execution are represented by the [`Error`] enum.
//! These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Can be converted to/from JSON
//! - **Lossless**: No error information is lost in conversion from core errors

use serde::{Deserialize, Serialize};

/// Command execution errors.
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Transaction | `NoTransaction` | Rollback/commit with no open block |
/// | Validation | `InvalidCommand` | Unknown verb or wrong arity, raised before execution |
///
/// # Example
///
/// ```
/// use nestkv_executor::{Command, Error, Executor};
///
/// let executor = Executor::new();
/// match executor.execute(Command::Rollback) {
///     Err(Error::NoTransaction) => {}
///     other => panic!("expected NoTransaction, got {:?}", other),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Transaction Errors ====================
    /// No open transaction block
    #[error("no transaction")]
    NoTransaction,

    // ==================== Validation Errors ====================
    /// Input could not be turned into a command
    #[error("invalid command: {reason}")]
    InvalidCommand { reason: String },
}

impl Error {
    /// Build an `InvalidCommand` error
    pub fn invalid_command(reason: impl Into<String>) -> Self {
        Error::InvalidCommand {
            reason: reason.into(),
        }
    }
}

impl From<nestkv_core::Error> for Error {
    fn from(e: nestkv_core::Error) -> Self {
        match e {
            nestkv_core::Error::NoTransaction => Error::NoTransaction,
        }
    }
}
