//! Per-block overlay tables
//!
//! Each open transaction block owns one [`Overlay`]: the set of pending
//! changes made while it was the innermost block. A key that an overlay does
//! not mention is unaffected by that block; a key it maps to
//! [`OverlayEntry::Tombstone`] is treated as absent from that block inward.

use nestkv_core::{Key, Value};
use rustc_hash::FxHashMap;

/// A pending change recorded in an overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayEntry {
    /// The key was set to this value in the block
    Set(Value),
    /// The key was unset in the block
    Tombstone,
}

impl OverlayEntry {
    /// The value this entry makes visible, `None` for a tombstone
    pub fn value(&self) -> Option<&Value> {
        match self {
            OverlayEntry::Set(v) => Some(v),
            OverlayEntry::Tombstone => None,
        }
    }

    /// Check if this entry is a tombstone
    pub fn is_tombstone(&self) -> bool {
        matches!(self, OverlayEntry::Tombstone)
    }
}

/// Pending changes of one transaction block
#[derive(Debug, Default, Clone)]
pub struct Overlay {
    entries: FxHashMap<Key, OverlayEntry>,
}

impl Overlay {
    /// Create a new empty overlay
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Record `key → value`, replacing any earlier entry in this overlay
    pub fn set(&mut self, key: Key, value: Value) {
        self.entries.insert(key, OverlayEntry::Set(value));
    }

    /// Record a tombstone for `key`, replacing any earlier entry in this overlay
    pub fn tombstone(&mut self, key: Key) {
        self.entries.insert(key, OverlayEntry::Tombstone);
    }

    /// Entry for `key` if this overlay mentions it
    pub fn lookup(&self, key: &Key) -> Option<&OverlayEntry> {
        self.entries.get(key)
    }

    /// Check if this overlay mentions `key`
    pub fn contains(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of keys this overlay mentions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the overlay mentions no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, entry)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &OverlayEntry)> {
        self.entries.iter()
    }
}

impl IntoIterator for Overlay {
    type Item = (Key, OverlayEntry);
    type IntoIter = std::collections::hash_map::IntoIter<Key, OverlayEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
