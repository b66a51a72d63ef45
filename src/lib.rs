//! NestKV - in-memory key-value store with nested transactions
//!
//! NestKV keeps string keys mapped to string values, supports arbitrarily
//! nested transaction blocks (begin / rollback / commit), and answers
//! "how many keys currently hold value V" in constant time.
//!
//! # Quick Start
//!
//! ```
//! use nestkv::{Command, Executor, Key, Output, Value};
//!
//! let db = Executor::new();
//! db.execute(Command::Set { key: Key::from("a"), value: Value::from("10") })?;
//! db.execute(Command::Set { key: Key::from("b"), value: Value::from("10") })?;
//!
//! let out = db.execute(Command::NumEqualTo { value: Value::from("10") })?;
//! assert_eq!(out, Output::Count(2));
//! # Ok::<(), nestkv::Error>(())
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`], which routes each
//! [`Command`] to the transactional store. The store internals (overlays,
//! the value index) are not exposed; only the executor API is public.

// Re-export the public API from nestkv-executor
pub use nestkv_executor::*;
