//! Session wrapper around the executor.

use nestkv_executor::{Command, Executor, Output, Result};

/// Wraps the executor and renders the transaction context into the prompt.
pub struct SessionState {
    executor: Executor,
}

impl SessionState {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }

    /// Execute a command against the store.
    pub fn execute(&mut self, cmd: Command) -> Result<Output> {
        self.executor.execute(cmd)
    }

    /// Number of open transaction blocks.
    pub fn depth(&self) -> usize {
        self.executor.depth()
    }

    /// Build the REPL prompt string.
    ///
    /// - `nestkv> ` outside a transaction
    /// - `nestkv(txn:2)> ` with two open blocks
    pub fn prompt(&self) -> String {
        match self.depth() {
            0 => "nestkv> ".to_string(),
            depth => format!("nestkv(txn:{})> ", depth),
        }
    }
}
