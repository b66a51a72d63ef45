//! Clap command tree definition.
//!
//! The binary takes no subcommands: every store command is read as a line
//! of text. Flags only choose the output mode and the input source.

use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command};

use crate::format::OutputMode;

/// Build the top-level CLI.
pub fn build_cli() -> Command {
    Command::new("nestkv")
        .about("In-memory key-value store with nested transactions")
        .long_about(
            "Reads commands one per line (SET, GET, UNSET, NUMEQUALTO, BEGIN, \
             ROLLBACK, COMMIT, END). Interactive when stdin is a terminal, \
             otherwise reads stdin until END or end of input.",
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(clap::ArgAction::SetTrue)
                .conflicts_with("human"),
        )
        .arg(
            Arg::new("human")
                .long("human")
                .help("Redis-style output mode (quoted values, type prefixes)")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Read commands from a file instead of stdin"),
        )
        .arg(
            Arg::new("no-history")
                .long("no-history")
                .help("Do not load or save the REPL history file")
                .action(clap::ArgAction::SetTrue),
        )
}

/// Settings resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub mode: OutputMode,
    pub file: Option<PathBuf>,
    pub history: bool,
}

impl CliConfig {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let mode = if matches.get_flag("json") {
            OutputMode::Json
        } else if matches.get_flag("human") {
            OutputMode::Human
        } else {
            OutputMode::Plain
        };

        Self {
            mode,
            file: matches.get_one::<PathBuf>("file").cloned(),
            history: !matches.get_flag("no-history"),
        }
    }
}
