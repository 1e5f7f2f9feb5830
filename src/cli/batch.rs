//! # Batch Script Runner
//!
//! Runs a CQL script (from `-e`, `-f`, stdin, or the `SOURCE` command)
//! through the statement recognizer and processes every returned statement
//! in order. Shell commands go through the command handler; other
//! statements go to the statement sink. Processing stops at the first
//! error, and a lex failure aborts the whole script with no statement
//! processed.
//!
//! ## Statement Sink
//!
//! cqlshell makes no cluster connection, so recognized CQL statements are
//! emitted instead of executed: to stdout, or to the capture file when
//! `CAPTURE` is active. With `EXPAND ON` each statement is prefixed with
//! its index and leading identifier.

use super::commands::{CommandHandler, CommandResult};
use super::session::SessionState;
use crate::cql::{is_shell_command, split, strip_comments};
use eyre::{bail, Result, WrapErr};
use std::fs::OpenOptions;
use std::io::Write;
use std::time::Instant;

/// Whether the caller should keep going after a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Continue,
    Exit,
}

/// Splits `text` and processes each statement in order, stopping at the
/// first error. Returns `Dispatch::Exit` when the script issued `EXIT`.
pub fn run_script(text: &str, session: &mut SessionState) -> Result<Dispatch> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Dispatch::Continue);
    }

    if session.debug() {
        eprintln!("script with comments stripped:\n{}", strip_comments(trimmed));
    }

    let started = Instant::now();
    let statements = split(trimmed).wrap_err("could not split input into statements")?;

    for (index, statement) in statements.iter().enumerate() {
        if let Dispatch::Exit = process_statement(index, statement, session)? {
            return Ok(Dispatch::Exit);
        }
    }

    if session.elapsed() {
        eprintln!(
            "({} statements, {:.3} sec)",
            statements.len(),
            started.elapsed().as_secs_f64()
        );
    }
    Ok(Dispatch::Continue)
}

/// Routes one rendered statement: shell commands to the handler, anything
/// else to the statement sink. A command error becomes `Err`, which the
/// batch path treats as fatal and the interactive loop merely displays.
pub fn process_statement(
    index: usize,
    statement: &str,
    session: &mut SessionState,
) -> Result<Dispatch> {
    let leading = statement.split_whitespace().next().unwrap_or("");
    if is_shell_command(leading) {
        match CommandHandler::execute(statement, session) {
            CommandResult::Exit => Ok(Dispatch::Exit),
            CommandResult::Output(text) => {
                println!("{text}");
                Ok(Dispatch::Continue)
            }
            CommandResult::Continue => Ok(Dispatch::Continue),
            CommandResult::Error(message) => bail!(message),
        }
    } else {
        emit_statement(index, statement, session)?;
        Ok(Dispatch::Continue)
    }
}

fn emit_statement(index: usize, statement: &str, session: &mut SessionState) -> Result<()> {
    let rendered = if session.expand() {
        let identifier = statement
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_ascii_uppercase();
        format!("-- [{}] {}\n{}", index + 1, identifier, statement)
    } else {
        statement.to_string()
    };

    match session.capture() {
        Some(path) => {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .wrap_err_with(|| format!("could not open capture file {}", path.display()))?;
            writeln!(file, "{rendered}")?;
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
