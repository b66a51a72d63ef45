//! Reference model for tracking expected store state
//!
//! The reference model is the simplest thing that could be correct: one full
//! copy of the effective map per open transaction block, and counts computed
//! by scanning. It is slow on purpose and exists only so tests can compare
//! the real store against it after every operation.
//!
//! # Example
//!
//! ```
//! use nestkv_store::testing::{Operation, ReferenceModel};
//!
//! let mut model = ReferenceModel::new();
//! model.apply(&Operation::Set { key: "a".into(), value: "10".into() });
//! model.apply(&Operation::Begin);
//! model.apply(&Operation::Unset { key: "a".into() });
//! assert_eq!(model.get("a"), None);
//! model.apply(&Operation::Rollback);
//! assert_eq!(model.get("a"), Some("10"));
//! ```

use std::collections::HashMap;

use crate::TransactionalStore;
use nestkv_core::{Key, Value};

/// Operation recorded in (and replayed against) the reference model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Set a key
    Set {
        /// Key
        key: String,
        /// Value
        value: String,
    },
    /// Unset a key
    Unset {
        /// Key
        key: String,
    },
    /// Open a transaction block
    Begin,
    /// Discard the innermost block
    Rollback,
    /// Flatten every block into the committed state
    Commit,
}

/// A disagreement between the store and the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateMismatch {
    /// `get` returned different values
    Value {
        /// Key compared
        key: String,
        /// Model's answer
        expected: Option<String>,
        /// Store's answer
        actual: Option<String>,
    },
    /// `numequalto` returned different counts
    Count {
        /// Value compared
        value: String,
        /// Model's answer
        expected: u64,
        /// Store's answer
        actual: u64,
    },
    /// Open block counts differ
    Depth {
        /// Model's depth
        expected: usize,
        /// Store's depth
        actual: usize,
    },
}

/// Reference model tracking expected store state
#[derive(Debug, Clone)]
pub struct ReferenceModel {
    /// `levels[0]` is the committed state, `levels[n]` the effective state
    /// inside the n-th open block
    levels: Vec<HashMap<String, String>>,
    /// Every operation applied, in order
    history: Vec<Operation>,
}

impl ReferenceModel {
    /// Create a new empty reference model
    pub fn new() -> Self {
        ReferenceModel {
            levels: vec![HashMap::new()],
            history: Vec::new(),
        }
    }

    /// Apply an operation
    ///
    /// Returns `false` for rollback/commit with no open block, mirroring the
    /// store's `NoTransaction` error.
    pub fn apply(&mut self, op: &Operation) -> bool {
        self.history.push(op.clone());
        match op {
            Operation::Set { key, value } => {
                self.top_mut().insert(key.clone(), value.clone());
                true
            }
            Operation::Unset { key } => {
                self.top_mut().remove(key);
                true
            }
            Operation::Begin => {
                let snapshot = self.top().clone();
                self.levels.push(snapshot);
                true
            }
            Operation::Rollback => {
                if self.depth() == 0 {
                    return false;
                }
                self.levels.pop();
                true
            }
            Operation::Commit => {
                if self.depth() == 0 {
                    return false;
                }
                let effective = self.levels.pop().unwrap_or_default();
                self.levels.clear();
                self.levels.push(effective);
                true
            }
        }
    }

    /// Expected effective value of a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.top().get(key).map(String::as_str)
    }

    /// Expected count of keys holding `value`, by full scan
    pub fn num_equal_to(&self, value: &str) -> u64 {
        self.top().values().filter(|v| v.as_str() == value).count() as u64
    }

    /// Number of open blocks
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// Operations applied so far
    pub fn history(&self) -> &[Operation] {
        &self.history
    }

    /// Compare the store against the model over the given keys and values
    ///
    /// Returns every disagreement found; an empty vector means the store
    /// matches.
    pub fn compare(
        &self,
        store: &TransactionalStore,
        keys: &[String],
        values: &[String],
    ) -> Vec<StateMismatch> {
        let mut mismatches = Vec::new();

        if store.depth() != self.depth() {
            mismatches.push(StateMismatch::Depth {
                expected: self.depth(),
                actual: store.depth(),
            });
        }

        for key in keys {
            let expected = self.get(key).map(str::to_string);
            let actual = store.get(&Key::from(key.as_str())).map(|v| v.to_string());
            if expected != actual {
                mismatches.push(StateMismatch::Value {
                    key: key.clone(),
                    expected,
                    actual,
                });
            }
        }

        for value in values {
            let expected = self.num_equal_to(value);
            let actual = store.num_equal_to(&Value::from(value.as_str()));
            if expected != actual {
                mismatches.push(StateMismatch::Count {
                    value: value.clone(),
                    expected,
                    actual,
                });
            }
        }

        mismatches
    }

    fn top(&self) -> &HashMap<String, String> {
        // levels is never empty: new() seeds it and commit re-seeds it
        &self.levels[self.levels.len() - 1]
    }

    fn top_mut(&mut self) -> &mut HashMap<String, String> {
        let last = self.levels.len() - 1;
        &mut self.levels[last]
    }
}

impl Default for ReferenceModel {
    fn default() -> Self {
        Self::new()
    }
}
