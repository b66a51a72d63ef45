//! # NestKV Executor
//!
//! The public API for NestKV - an in-memory key-value store with nested
//! transactions and a value-count index.
//!
//! This is the only crate users need to import. It provides:
//! - [`Executor`] - Runs commands against one store
//! - [`Command`]/[`Output`] - The typed command interface
//! - [`Key`]/[`Value`] - The opaque tokens the store holds
//!
//! ## Quick Start
//!
//! ```
//! use nestkv_executor::{Command, Executor, Key, Output, Value};
//!
//! let executor = Executor::new();
//! executor.execute(Command::Set { key: Key::from("a"), value: Value::from("10") })?;
//! executor.execute(Command::Begin)?;
//! executor.execute(Command::Set { key: Key::from("a"), value: Value::from("20") })?;
//! executor.execute(Command::Rollback)?;
//!
//! let out = executor.execute(Command::Get { key: Key::from("a") })?;
//! assert_eq!(out, Output::Maybe(Some(Value::from("10"))));
//! # Ok::<(), nestkv_executor::Error>(())
//! ```

#![warn(missing_docs)]

mod command;
mod error;
mod executor;
mod output;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use command::Command;
pub use error::Error;
pub use executor::Executor;
pub use output::Output;

// Re-export core tokens so users don't need nestkv-core directly
pub use nestkv_core::{Key, Value};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
