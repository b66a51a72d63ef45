//! The transactional store
//!
//! [`TransactionalStore`] layers a stack of [`Overlay`]s over a committed
//! base table and keeps a [`ValueIndex`] in step with the *effective* state
//! (base with every open overlay applied, innermost first).
//!
//! ## Write paths
//!
//! ```text
//! set/unset ──► stack empty? ──yes──► apply_to_base
//!                    │
//!                    no
//!                    ▼
//!              innermost overlay
//!
//! commit ──► flatten innermost → outermost ──► apply_to_base
//! ```
//!
//! Interactive writes adjust the index at write time. Rollback repairs the
//! index by the delta between the discarded entry and whatever it was
//! hiding. Commit never touches the index: it only moves already-counted
//! values from the overlays into the base.

use nestkv_core::{Error, Key, Result, Value};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::index::ValueIndex;
use crate::overlay::{Overlay, OverlayEntry};

/// In-memory key-value store with nested transaction blocks
///
/// Each instance is fully independent; there is no process-wide state.
/// Operations are synchronous and run to completion. Callers that share a
/// store between threads must wrap the whole store in one lock (see the
/// executor crate).
#[derive(Debug, Default, Clone)]
pub struct TransactionalStore {
    /// Committed state
    base: FxHashMap<Key, Value>,
    /// Open blocks, outermost first
    stack: Vec<Overlay>,
    /// Value → number of keys whose effective value it is
    index: ValueIndex,
}

impl TransactionalStore {
    /// Create an empty store with no open transaction
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`
    ///
    /// Writes into the innermost overlay when a transaction is open,
    /// otherwise straight into the base table.
    pub fn set(&mut self, key: Key, value: Value) {
        let previous = resolve(&self.stack, &self.base, &key);
        self.index.apply_change(previous, Some(&value));

        match self.stack.last_mut() {
            Some(overlay) => overlay.set(key, value),
            None => apply_to_base(&mut self.base, key, OverlayEntry::Set(value)),
        }
    }

    /// Effective value of `key`, or `None` if it is absent
    pub fn get(&self, key: &Key) -> Option<&Value> {
        resolve(&self.stack, &self.base, key)
    }

    /// Unset `key`
    ///
    /// Inside a transaction a tombstone is always recorded, even for keys
    /// that never existed, so that a later rollback or commit sees the
    /// block's intent. Outside a transaction the key is removed from the
    /// base table if present.
    pub fn unset(&mut self, key: Key) {
        let previous = resolve(&self.stack, &self.base, &key);
        self.index.apply_change(previous, None);

        match self.stack.last_mut() {
            Some(overlay) => overlay.tombstone(key),
            None => apply_to_base(&mut self.base, key, OverlayEntry::Tombstone),
        }
    }

    /// Number of keys whose effective value equals `value`
    pub fn num_equal_to(&self, value: &Value) -> u64 {
        self.index.count(value)
    }

    /// Open a new, innermost transaction block
    pub fn begin(&mut self) {
        self.stack.push(Overlay::new());
        debug!(depth = self.stack.len(), "transaction block opened");
    }

    /// Discard the innermost transaction block
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoTransaction`] if no block is open. State is left
    /// untouched in that case.
    pub fn rollback(&mut self) -> Result<()> {
        let discarded = self.stack.pop().ok_or(Error::NoTransaction)?;

        // Each key appears once in the overlay, so each is repaired once.
        for (key, entry) in discarded.iter() {
            let exposed = resolve(&self.stack, &self.base, key);
            self.index.apply_change(entry.value(), exposed);
        }

        debug!(
            depth = self.stack.len(),
            keys_repaired = discarded.len(),
            "transaction block rolled back"
        );
        Ok(())
    }

    /// Close every open transaction block and write the result to the base
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoTransaction`] if no block is open. State is left
    /// untouched in that case.
    pub fn commit(&mut self) -> Result<()> {
        if self.stack.is_empty() {
            return Err(Error::NoTransaction);
        }

        let blocks = std::mem::take(&mut self.stack);
        let depth = blocks.len();
        let mut finalized: FxHashSet<Key> = FxHashSet::default();

        for overlay in blocks.into_iter().rev() {
            for (key, entry) in overlay {
                // An inner block already decided this key.
                if !finalized.insert(key.clone()) {
                    continue;
                }
                apply_to_base(&mut self.base, key, entry);
            }
        }

        debug!(
            blocks_flattened = depth,
            keys_written = finalized.len(),
            "transactions committed"
        );
        Ok(())
    }

    /// Number of open transaction blocks
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Check if at least one transaction block is open
    pub fn in_transaction(&self) -> bool {
        !self.stack.is_empty()
    }

    /// The value-count index
    pub fn index(&self) -> &ValueIndex {
        &self.index
    }

    /// Number of keys in the committed base table
    pub fn committed_len(&self) -> usize {
        self.base.len()
    }
}

/// Effective value of `key` over `stack` and `base`: innermost overlay
/// that mentions the key wins, a tombstone hides everything beneath it.
fn resolve<'a>(
    stack: &'a [Overlay],
    base: &'a FxHashMap<Key, Value>,
    key: &Key,
) -> Option<&'a Value> {
    for overlay in stack.iter().rev() {
        if let Some(entry) = overlay.lookup(key) {
            return entry.value();
        }
    }
    base.get(key)
}

/// Write one entry straight into the base table. Never touches the index.
fn apply_to_base(base: &mut FxHashMap<Key, Value>, key: Key, entry: OverlayEntry) {
    match entry {
        OverlayEntry::Set(value) => {
            base.insert(key, value);
        }
        OverlayEntry::Tombstone => {
            base.remove(&key);
        }
    }
}
