//! Transactional store for NestKV
//!
//! This crate implements the store behind every command:
//! - TransactionalStore: committed base table plus a stack of overlays
//! - Overlay: pending changes of one transaction block, with tombstones
//! - ValueIndex: value → key count, kept in step with the effective state
//! - testing: reference model for property tests
//!
//! # Example
//!
//! ```
//! use nestkv_core::{Key, Value};
//! use nestkv_store::TransactionalStore;
//!
//! let mut store = TransactionalStore::new();
//! store.set(Key::from("a"), Value::from("10"));
//!
//! store.begin();
//! store.set(Key::from("a"), Value::from("20"));
//! assert_eq!(store.num_equal_to(&Value::from("10")), 0);
//!
//! store.rollback().unwrap();
//! assert_eq!(store.get(&Key::from("a")), Some(&Value::from("10")));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod index;
pub mod overlay;
pub mod store;
pub mod testing;

pub use index::ValueIndex;
pub use overlay::{Overlay, OverlayEntry};
pub use store::TransactionalStore;
