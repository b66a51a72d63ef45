//! NestKV CLI: a line-oriented shell over the transactional store.
//!
//! Three modes:
//! - **REPL mode**: `nestkv` with a terminal on stdin: interactive prompt
//! - **Pipe mode**: `echo "SET a 10" | nestkv`: line-by-line from stdin
//! - **File mode**: `nestkv --file commands.txt`
//!
//! Every mode stops at `END` or end of input.

mod commands;
mod format;
mod parse;
mod repl;
mod state;

use std::io::{self, IsTerminal};
use std::process;

use nestkv_executor::Executor;
use tracing_subscriber::EnvFilter;

use commands::{build_cli, CliConfig};
use state::SessionState;

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "NESTKV_LOG";

fn main() {
    let matches = build_cli().get_matches();
    init_logging();

    let config = CliConfig::from_matches(&matches);
    let mut state = SessionState::new(Executor::new());

    if let Err(e) = run(&config, &mut state) {
        eprintln!("(error) {}", e);
        process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(config: &CliConfig, state: &mut SessionState) -> io::Result<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();

    if let Some(path) = &config.file {
        return repl::run_file(path, state, config.mode, &mut stdout.lock(), &mut stderr.lock());
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        repl::run_repl(state, config.mode, config.history).map_err(io::Error::other)
    } else {
        repl::run_pipe(
            stdin.lock(),
            state,
            config.mode,
            &mut stdout.lock(),
            &mut stderr.lock(),
        )
    }
}
