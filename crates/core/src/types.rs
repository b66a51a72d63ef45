//! Core types for NestKV
//!
//! This module defines the two opaque tokens the store deals in:
//! - Key: identifies an entry
//! - Value: what an entry holds, compared only for equality
//!
//! Neither type has a "null" variant. Absence is always expressed as
//! `Option::None` so that it can never be stored or counted.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Key of a store entry
///
/// Keys are opaque tokens. The store only hashes and compares them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(String);

impl Key {
    /// Create a key from anything string-like
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Borrow the key text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the key and return its text
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Value held by a store entry
///
/// Values are opaque, equality-comparable tokens. The value-count index
/// hashes them, so `Hash` must agree with `Eq`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Value(String);

impl Value {
    /// Create a value from anything string-like
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the value text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the value and return its text
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for Value {
    fn borrow(&self) -> &str {
        &self.0
    }
}
