//! Testing utilities for the transactional store
//!
//! - **Reference Model**: naive snapshot-per-level model used to check the
//!   store's values and counts after every operation
//! - **Replay**: drives the same operation sequence through a real store

mod reference_model;

pub use reference_model::{Operation, ReferenceModel, StateMismatch};

use crate::TransactionalStore;
use nestkv_core::{Key, Result, Value};

/// Apply one reference-model operation to a real store
pub fn apply_to_store(store: &mut TransactionalStore, op: &Operation) -> Result<()> {
    match op {
        Operation::Set { key, value } => {
            store.set(Key::from(key.as_str()), Value::from(value.as_str()));
            Ok(())
        }
        Operation::Unset { key } => {
            store.unset(Key::from(key.as_str()));
            Ok(())
        }
        Operation::Begin => {
            store.begin();
            Ok(())
        }
        Operation::Rollback => store.rollback(),
        Operation::Commit => store.commit(),
    }
}
