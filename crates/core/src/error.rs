//! Error types for the NestKV core
//!
//! The core has exactly one failure mode: closing a transaction block when
//! none is open. Reads of missing keys and unsets of absent keys are not
//! errors. We use `thiserror` for the `Display` and `Error` impls.

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the transactional store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `rollback` or `commit` was called with an empty transaction stack
    #[error("no transaction")]
    NoTransaction,
}
