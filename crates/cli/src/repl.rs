//! REPL loop with rustyline.
//!
//! Interactive mode: prompt, meta-commands, history, TAB completion.
//! Pipe mode: read lines from any reader (stdin or a file), execute each.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, Editor, Helper};
use tracing::debug;

use crate::format::{format_error, format_output, OutputMode};
use crate::parse::{check_meta_command, parse_line, CliAction, MetaCommand, VERBS};
use crate::state::SessionState;

/// Whether the read loop should keep going after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Parse, execute and render one line.
///
/// Results go to `out`. Errors go to `out` in plain mode and to `err`
/// otherwise. A failed command never stops the loop; only `END` does.
pub fn process_line<W: Write, E: Write>(
    line: &str,
    state: &mut SessionState,
    mode: OutputMode,
    out: &mut W,
    err: &mut E,
) -> io::Result<Flow> {
    let result = match parse_line(line) {
        Ok(CliAction::Skip) => return Ok(Flow::Continue),
        Ok(CliAction::End) => return Ok(Flow::Stop),
        Ok(CliAction::Execute(cmd)) => state.execute(cmd),
        Err(e) => {
            debug!(line = line.trim(), error = %e, "rejected input");
            Err(e)
        }
    };

    match result {
        Ok(output) => {
            let formatted = format_output(&output, mode);
            if !formatted.is_empty() {
                writeln!(out, "{}", formatted)?;
            }
        }
        Err(e) => {
            let formatted = format_error(&e, mode);
            if mode.errors_inline() {
                writeln!(out, "{}", formatted)?;
            } else {
                writeln!(err, "{}", formatted)?;
            }
        }
    }

    Ok(Flow::Continue)
}

/// Run in pipe mode: read lines until `END` or end of input.
///
/// Lines are decoded lossily, so bytes that are not UTF-8 end up in the
/// tokens as U+FFFD instead of aborting the session.
pub fn run_pipe<R: BufRead, W: Write, E: Write>(
    mut reader: R,
    state: &mut SessionState,
    mode: OutputMode,
    out: &mut W,
    err: &mut E,
) -> io::Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        if process_line(&line, state, mode, out, err)? == Flow::Stop {
            break;
        }
    }
    out.flush()
}

/// Run commands from a file.
pub fn run_file<W: Write, E: Write>(
    path: &Path,
    state: &mut SessionState,
    mode: OutputMode,
    out: &mut W,
    err: &mut E,
) -> io::Result<()> {
    let file = File::open(path).map_err(|e| {
        io::Error::new(e.kind(), format!("failed to open {}: {}", path.display(), e))
    })?;
    debug!(path = %path.display(), "reading commands from file");
    run_pipe(BufReader::new(file), state, mode, out, err)
}

/// Run the interactive REPL.
pub fn run_repl(
    state: &mut SessionState,
    mode: OutputMode,
    history: bool,
) -> rustyline::Result<()> {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .build();

    let mut rl: Editor<NestHelper, DefaultHistory> = Editor::with_config(config)?;
    rl.set_helper(Some(NestHelper::new()));

    let history_path = if history { history_file() } else { None };
    if let Some(ref path) = history_path {
        // A missing history file is normal on first run.
        let _ = rl.load_history(path);
    }

    let stdout = io::stdout();
    let stderr = io::stderr();

    loop {
        let prompt = state.prompt();
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(trimmed);

                if let Some(meta) = check_meta_command(trimmed) {
                    match meta {
                        MetaCommand::Quit => break,
                        MetaCommand::Clear => {
                            // ANSI clear screen
                            print!("\x1B[2J\x1B[1;1H");
                        }
                        MetaCommand::Help => print_help(),
                    }
                    continue;
                }

                let flow = process_line(
                    trimmed,
                    state,
                    mode,
                    &mut stdout.lock(),
                    &mut stderr.lock(),
                )?;
                if flow == Flow::Stop {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C: just show a new prompt
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("(error) {:?}", err);
                break;
            }
        }
    }

    if let Some(ref path) = history_path {
        if let Err(e) = rl.save_history(path) {
            debug!(path = %path.display(), error = %e, "failed to save history");
        }
    }

    Ok(())
}

fn history_file() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".nestkv_history"))
}

fn print_help() {
    println!("Commands:");
    println!("  SET <key> <value>     Set a key");
    println!("  GET <key>             Print the value of a key, or NULL");
    println!("  UNSET <key>           Remove a key");
    println!("  NUMEQUALTO <value>    Count keys currently set to a value");
    println!("  BEGIN                 Open a transaction block");
    println!("  ROLLBACK              Undo the innermost transaction block");
    println!("  COMMIT                Close all transaction blocks, keeping changes");
    println!("  END                   Exit");
    println!();
    println!("Meta-commands:");
    println!("  help                  Show this help");
    println!("  quit / exit           Exit REPL");
    println!("  clear                 Clear screen");
}

// =========================================================================
// TAB Completion
// =========================================================================

/// Lowercase meta-commands offered alongside the verbs.
const META_COMMANDS: &[&str] = &["help", "quit", "exit", "clear"];

struct NestHelper;

impl NestHelper {
    fn new() -> Self {
        Self
    }
}

impl Helper for NestHelper {}
impl Validator for NestHelper {}
impl Highlighter for NestHelper {}
impl Hinter for NestHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Completer for NestHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_to_pos = &line[..pos];
        let parts: Vec<&str> = line_to_pos.split_whitespace().collect();
        let trailing_space = line_to_pos.ends_with(' ');

        // Only the verb position completes; keys and values are free text.
        if parts.len() > 1 || (parts.len() == 1 && trailing_space) {
            return Ok((pos, vec![]));
        }

        let prefix = parts.first().copied().unwrap_or("");
        let start = pos - prefix.len();
        Ok((start, verb_candidates(prefix)))
    }
}

/// Verbs and meta-commands matching `prefix`, in the case the user is typing.
fn verb_candidates(prefix: &str) -> Vec<Pair> {
    let lowercase = !prefix.is_empty() && prefix.chars().all(|c| !c.is_ascii_uppercase());
    let upper = prefix.to_ascii_uppercase();

    let verbs = VERBS.iter().filter(|v| v.starts_with(&upper)).map(|v| {
        if lowercase {
            v.to_ascii_lowercase()
        } else {
            v.to_string()
        }
    });
    let metas = META_COMMANDS
        .iter()
        .filter(|m| lowercase && m.starts_with(prefix))
        .map(|m| m.to_string());

    verbs
        .chain(metas)
        .map(|c| Pair {
            display: c.clone(),
            replacement: c,
        })
        .collect()
}
