//! The Executor - single entry point to the transactional store.
//!
//! The Executor routes each [`Command`] to exactly one store operation and
//! converts the result to an [`Output`].

use std::sync::Arc;

use nestkv_store::TransactionalStore;
use parking_lot::Mutex;
use tracing::trace;

use crate::{Command, Output, Result};

/// The command executor - single entry point to the store.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and cheap to clone; clones share the same
/// store. The whole store (base table, transaction stack, value index) sits
/// behind one mutex that is held for the duration of exactly one command,
/// so every command is an atomic transition. Rollback and commit touch
/// cross-cutting state, which rules out anything finer-grained.
///
/// Two executors created with [`Executor::new`] share nothing.
///
/// # Example
///
/// ```
/// use nestkv_executor::{Command, Executor, Key, Output, Value};
///
/// let executor = Executor::new();
///
/// // Single command execution
/// executor.execute(Command::Set { key: Key::from("a"), value: Value::from("10") })?;
///
/// // Batch execution
/// let results = executor.execute_many(vec![
///     Command::Get { key: Key::from("a") },
///     Command::NumEqualTo { value: Value::from("10") },
/// ]);
/// assert_eq!(results[1], Ok(Output::Count(1)));
/// # Ok::<(), nestkv_executor::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct Executor {
    store: Arc<Mutex<TransactionalStore>>,
}

impl Executor {
    /// Create an executor over a new, empty store.
    pub fn new() -> Self {
        Self::with_store(TransactionalStore::new())
    }

    /// Create an executor over an existing store.
    pub fn with_store(store: TransactionalStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Execute a single command.
    ///
    /// Returns the command result or an error.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        trace!(command = cmd.name(), "executing");
        let mut store = self.store.lock();

        match cmd {
            Command::Set { key, value } => {
                store.set(key, value);
                Ok(Output::Unit)
            }
            Command::Get { key } => Ok(Output::Maybe(store.get(&key).cloned())),
            Command::Unset { key } => {
                store.unset(key);
                Ok(Output::Unit)
            }
            Command::NumEqualTo { value } => Ok(Output::Count(store.num_equal_to(&value))),
            Command::Begin => {
                store.begin();
                Ok(Output::Unit)
            }
            Command::Rollback => {
                store.rollback()?;
                Ok(Output::Unit)
            }
            Command::Commit => {
                store.commit()?;
                Ok(Output::Unit)
            }
            Command::TxnInfo => Ok(Output::TxnInfo {
                depth: store.depth(),
            }),
        }
    }

    /// Execute multiple commands in order.
    ///
    /// Returns one result per command. A failing command does not stop the
    /// batch. Each command takes the store lock separately.
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }

    /// Number of open transaction blocks.
    pub fn depth(&self) -> usize {
        self.store.lock().depth()
    }

    /// Returns whether a transaction block is currently open.
    pub fn in_transaction(&self) -> bool {
        self.store.lock().in_transaction()
    }
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor")
            .field("depth", &self.depth())
            .finish()
    }
}
