//! Output → plain/human/json string formatting.
//!
//! Three modes:
//! - **Plain** (default): bare values, `NULL` for a missing key, nothing for
//!   commands without a result
//! - **Human** (`--human`): Redis-style, e.g. `"value"`, `(integer) 2`, `(nil)`
//! - **JSON** (`--json`): `serde_json::to_string_pretty`

use nestkv_executor::{Error, Output};

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Plain,
    Human,
    Json,
}

impl OutputMode {
    /// Whether errors are part of the result stream (stdout) rather than
    /// diagnostics (stderr).
    pub fn errors_inline(self) -> bool {
        matches!(self, OutputMode::Plain)
    }
}

/// Format a successful output. An empty string means print nothing.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Plain => format_plain(output),
        OutputMode::Human => format_human(output),
        OutputMode::Json => format_json(output),
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Plain => match err {
            Error::NoTransaction => "NO TRANSACTION".to_string(),
            Error::InvalidCommand { reason } => reason.clone(),
        },
        OutputMode::Human => format!("(error) {}", err),
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": err,
            "message": err.to_string(),
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
    }
}

// =========================================================================
// Plain mode
// =========================================================================

fn format_plain(output: &Output) -> String {
    match output {
        Output::Unit => String::new(),
        Output::Maybe(Some(v)) => v.to_string(),
        Output::Maybe(None) => "NULL".to_string(),
        Output::Count(n) => n.to_string(),
        Output::TxnInfo { depth } => depth.to_string(),
    }
}

// =========================================================================
// Human mode
// =========================================================================

fn format_human(output: &Output) -> String {
    match output {
        Output::Unit => "OK".to_string(),
        Output::Maybe(Some(v)) => format!("\"{}\"", v),
        Output::Maybe(None) => "(nil)".to_string(),
        Output::Count(n) => format!("(integer) {}", n),
        Output::TxnInfo { depth: 0 } => "(no transaction)".to_string(),
        Output::TxnInfo { depth } => format!("(transaction depth) {}", depth),
    }
}

// =========================================================================
// JSON mode
// =========================================================================

fn format_json(output: &Output) -> String {
    serde_json::to_string_pretty(output).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}
