//! Input line → Command/MetaCommand conversion.
//!
//! Lines are split on whitespace. Lines containing a quote character go
//! through `shlex` instead, so a quoted token may contain spaces. Verbs are
//! matched case-insensitively.

use nestkv_executor::{Command, Error, Key, Value};

/// Reported for a verb that is not part of the command set.
pub const UNKNOWN_VERB: &str = "Enter a valid command if you want to do something";

/// Reported for a known verb with the wrong number of arguments.
pub const WRONG_ARITY: &str = "Invalid command (check number of arguments)";

/// Reported when a line cannot be tokenized.
pub const INVALID_QUOTING: &str = "Invalid quoting";

/// Verbs accepted on the command line, in help order.
pub const VERBS: &[&str] = &[
    "SET",
    "GET",
    "UNSET",
    "NUMEQUALTO",
    "BEGIN",
    "ROLLBACK",
    "COMMIT",
    "END",
];

/// What a single input line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// Run a store command.
    Execute(Command),
    /// Stop reading input.
    End,
    /// Nothing to do (blank line or comment).
    Skip,
}

/// REPL meta-commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaCommand {
    Help,
    Quit,
    Clear,
}

/// Check for REPL meta-commands before parsing a store command.
///
/// Meta-commands are lowercase only, so they never shadow a verb.
pub fn check_meta_command(line: &str) -> Option<MetaCommand> {
    match line.trim() {
        "quit" | "exit" => Some(MetaCommand::Quit),
        "clear" => Some(MetaCommand::Clear),
        "help" => Some(MetaCommand::Help),
        _ => None,
    }
}

/// Parse one line of input.
pub fn parse_line(line: &str) -> Result<CliAction, Error> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(CliAction::Skip);
    }

    let tokens = tokenize(trimmed)?;
    let Some((verb, args)) = tokens.split_first() else {
        return Ok(CliAction::Skip);
    };

    let verb = verb.to_ascii_uppercase();
    let cmd = match (verb.as_str(), args) {
        ("SET", [key, value]) => Command::Set {
            key: Key::from(key.as_str()),
            value: Value::from(value.as_str()),
        },
        ("GET", [key]) => Command::Get {
            key: Key::from(key.as_str()),
        },
        ("UNSET", [key]) => Command::Unset {
            key: Key::from(key.as_str()),
        },
        ("NUMEQUALTO", [value]) => Command::NumEqualTo {
            value: Value::from(value.as_str()),
        },
        ("BEGIN", []) => Command::Begin,
        ("ROLLBACK", []) => Command::Rollback,
        ("COMMIT", []) => Command::Commit,
        ("END", []) => return Ok(CliAction::End),
        // Only a bare END stops input; anything after it is not a command.
        ("END", _) => return Err(Error::invalid_command(UNKNOWN_VERB)),
        (known, _) if VERBS.contains(&known) => return Err(Error::invalid_command(WRONG_ARITY)),
        _ => return Err(Error::invalid_command(UNKNOWN_VERB)),
    };

    Ok(CliAction::Execute(cmd))
}

/// Split a line into tokens.
///
/// `shlex` starts a comment at any word beginning with `#`, so it is only
/// used when the line needs quote handling. A `#` inside a quoted line is
/// still treated as a comment there.
fn tokenize(line: &str) -> Result<Vec<String>, Error> {
    if !line.contains(&['"', '\'', '\\'][..]) {
        return Ok(line.split_whitespace().map(str::to_string).collect());
    }
    shlex::split(line).ok_or_else(|| Error::invalid_command(INVALID_QUOTING))
}
