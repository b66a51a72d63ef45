//! Value-count index
//!
//! Maps each value to the number of keys whose *effective* value equals it,
//! so `numequalto` is a single hash lookup instead of a scan. The index is
//! maintained incrementally by the store: every transition that changes a
//! key's effective value reports the old and new value through
//! [`ValueIndex::apply_change`].

use nestkv_core::Value;
use rustc_hash::FxHashMap;

/// Secondary index: Value → number of keys holding it
///
/// Counts never go below zero and entries that drop to zero are removed,
/// so the map only ever holds values present in the effective state.
#[derive(Debug, Default, Clone)]
pub struct ValueIndex {
    counts: FxHashMap<Value, u64>,
}

impl ValueIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self {
            counts: FxHashMap::default(),
        }
    }

    /// Number of keys currently holding `value` (0 if none)
    pub fn count(&self, value: &Value) -> u64 {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Record one more key holding `value`
    pub fn increment(&mut self, value: &Value) {
        *self.counts.entry(value.clone()).or_insert(0) += 1;
    }

    /// Record one fewer key holding `value`
    ///
    /// Saturates at zero: decrementing a value with no count is a no-op.
    /// The entry is removed once it reaches zero.
    pub fn decrement(&mut self, value: &Value) {
        if let Some(count) = self.counts.get_mut(value) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                self.counts.remove(value);
            }
        }
    }

    /// Move one key's contribution from `old` to `new`
    ///
    /// Either side may be absent. Equal values leave the index untouched.
    pub fn apply_change(&mut self, old: Option<&Value>, new: Option<&Value>) {
        if old == new {
            return;
        }
        if let Some(old) = old {
            self.decrement(old);
        }
        if let Some(new) = new {
            self.increment(new);
        }
    }

    /// Number of distinct values with a non-zero count
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(value, count)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&Value, u64)> {
        self.counts.iter().map(|(v, c)| (v, *c))
    }
}
