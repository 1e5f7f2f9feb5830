//! # Shell Command Handler
//!
//! Interprets the interactive shell commands the recognizer classifies
//! (`CONSISTENCY`, `PAGING`, `SOURCE`, ...). Commands are matched on their
//! first word, case-insensitively, with any trailing semicolon already
//! stripped by statement rendering.
//!
//! ## Implementation
//!
//! Each command returns a `CommandResult`:
//! - `Output`: text to display to the user
//! - `Exit`: signal to terminate the shell
//! - `Continue`: nothing to display
//! - `Error`: error message; the interactive loop displays it, the batch
//!   runner aborts on it
//!
//! Commands that would need a cluster connection (`DESCRIBE`, `LOGIN`)
//! report that none is available.

use super::batch::{self, Dispatch};
use super::session::SessionState;
use std::fs;

#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    Output(String),
    Exit,
    Continue,
    Error(String),
}

pub struct CommandHandler;

impl CommandHandler {
    pub fn execute(input: &str, session: &mut SessionState) -> CommandResult {
        let trimmed = input.trim();
        let trimmed = trimmed.strip_suffix(';').unwrap_or(trimmed).trim();
        let parts: Vec<&str> = trimmed.split_whitespace().collect();

        let Some(&first) = parts.first() else {
            return CommandResult::Continue;
        };
        let cmd = first.to_ascii_lowercase();
        let args = &parts[1..];
        let rest = trimmed[first.len()..].trim();

        match cmd.as_str() {
            "exit" | "quit" => CommandResult::Exit,
            "help" | "?" => CommandResult::Output(help_text().to_string()),
            "clear" | "cls" => CommandResult::Output("\x1b[2J\x1b[1;1H".to_string()),
            "consistency" => consistency(session, args),
            "serial" => serial_consistency(session, args),
            "paging" => paging(session, args),
            "tracing" => {
                toggle_flag("TRACING", args, session.tracing(), |v| session.set_tracing(v))
            }
            "expand" => toggle_flag("EXPAND", args, session.expand(), |v| session.set_expand(v)),
            "elapsed" => {
                toggle_flag("ELAPSED", args, session.elapsed(), |v| session.set_elapsed(v))
            }
            "debug" => toggle_flag("DEBUG", args, session.debug(), |v| session.set_debug(v)),
            "show" => show(session, args),
            "source" => source(session, rest),
            "capture" => capture(session, rest),
            "describe" | "desc" => CommandResult::Error(
                "DESCRIBE requires a cluster connection; cqlshell runs without one.".to_string(),
            ),
            "login" => CommandResult::Error(
                "LOGIN requires a cluster connection; cqlshell runs without one.".to_string(),
            ),
            "history" => CommandResult::Error(
                "HISTORY is only available in interactive mode.".to_string(),
            ),
            _ => CommandResult::Error(format!(
                "Unknown command: {first}. Type HELP for available commands."
            )),
        }
    }
}

fn consistency(session: &mut SessionState, args: &[&str]) -> CommandResult {
    match args.first() {
        None => CommandResult::Output(format!(
            "Current consistency level is {}.",
            session.consistency()
        )),
        Some(level) => match session.set_consistency(level) {
            Ok(()) => CommandResult::Output(format!(
                "Consistency level set to {}.",
                session.consistency()
            )),
            Err(err) => CommandResult::Error(err.to_string()),
        },
    }
}

fn serial_consistency(session: &mut SessionState, args: &[&str]) -> CommandResult {
    if args.first().map(|a| a.to_ascii_lowercase()).as_deref() != Some("consistency") {
        return CommandResult::Error(
            "Improper SERIAL command. Use SERIAL CONSISTENCY [level].".to_string(),
        );
    }
    match args.get(1) {
        None => CommandResult::Output(format!(
            "Current serial consistency level is {}.",
            session.serial_consistency()
        )),
        Some(level) => match session.set_serial_consistency(level) {
            Ok(()) => CommandResult::Output(format!(
                "Serial consistency level set to {}.",
                session.serial_consistency()
            )),
            Err(err) => CommandResult::Error(err.to_string()),
        },
    }
}

fn paging(session: &mut SessionState, args: &[&str]) -> CommandResult {
    match args.first().map(|a| a.to_ascii_lowercase()).as_deref() {
        None => CommandResult::Output(if session.paging() {
            format!(
                "Query paging is currently enabled. Page size: {}",
                session.page_size()
            )
        } else {
            "Query paging is currently disabled.".to_string()
        }),
        Some("on") => {
            session.set_paging(true);
            CommandResult::Output(format!(
                "Now Query paging is enabled. Page size: {}",
                session.page_size()
            ))
        }
        Some("off") => {
            session.set_paging(false);
            CommandResult::Output("Disabled Query paging.".to_string())
        }
        Some(value) => match value.parse::<u32>() {
            Ok(size) if size > 0 => {
                session.set_page_size(size);
                session.set_paging(true);
                CommandResult::Output(format!("Page size: {size}"))
            }
            _ => CommandResult::Error("Improper PAGING command. Use PAGING [ON|OFF|<rows>].".to_string()),
        },
    }
}

fn toggle_flag(
    name: &str,
    args: &[&str],
    current: bool,
    mut set: impl FnMut(bool),
) -> CommandResult {
    let on_off = |v: bool| if v { "enabled" } else { "disabled" };
    match args.first().map(|a| a.to_ascii_lowercase()).as_deref() {
        None => CommandResult::Output(format!("{name} is currently {}.", on_off(current))),
        Some("on") => {
            set(true);
            CommandResult::Output(format!("Now {name} is enabled."))
        }
        Some("off") => {
            set(false);
            CommandResult::Output(format!("Now {name} is disabled."))
        }
        Some(_) => CommandResult::Error(format!("Improper {name} command. Use {name} [ON|OFF].")),
    }
}

fn show(session: &SessionState, args: &[&str]) -> CommandResult {
    match args.first().map(|a| a.to_ascii_uppercase()).as_deref() {
        Some("VERSION") => CommandResult::Output(format!(
            "[cqlshell {} | CQL statement recognizer | no cluster connection]",
            env!("CARGO_PKG_VERSION")
        )),
        Some("SESSION") => CommandResult::Output(session.describe()),
        Some("HOST") => CommandResult::Error("Not connected to a cluster.".to_string()),
        _ => CommandResult::Error(
            "Improper SHOW command. Use SHOW VERSION or SHOW SESSION.".to_string(),
        ),
    }
}

fn source(session: &mut SessionState, rest: &str) -> CommandResult {
    let path = unquote(rest);
    if path.is_empty() {
        return CommandResult::Error(
            "SOURCE requires a file name, e.g. SOURCE 'statements.cql'.".to_string(),
        );
    }
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => return CommandResult::Error(format!("Could not open '{path}': {err}")),
    };
    match batch::run_script(&content, session) {
        Ok(Dispatch::Exit) => CommandResult::Exit,
        Ok(Dispatch::Continue) => CommandResult::Continue,
        Err(err) => CommandResult::Error(format!("{path}: {err}")),
    }
}

fn capture(session: &mut SessionState, rest: &str) -> CommandResult {
    if rest.is_empty() {
        return CommandResult::Output(match session.capture() {
            Some(path) => format!("Currently capturing query output to '{}'.", path.display()),
            None => "Capture is currently off.".to_string(),
        });
    }
    if rest.eq_ignore_ascii_case("off") {
        session.set_capture(None);
        return CommandResult::Output("Capture has been stopped.".to_string());
    }
    let path = unquote(rest).to_string();
    session.set_capture(Some(path.clone().into()));
    CommandResult::Output(format!("Now capturing query output to '{path}'."))
}

/// Strips one layer of matching single quotes from a command argument.
fn unquote(arg: &str) -> &str {
    arg.strip_prefix('\'')
        .and_then(|a| a.strip_suffix('\''))
        .unwrap_or(arg)
}

fn help_text() -> &'static str {
    r#"cqlshell commands:

  HELP, ?                      Show this help message
  CONSISTENCY [level]          Show or set the consistency level
  SERIAL CONSISTENCY [level]   Show or set the serial consistency level
  PAGING [ON|OFF|<rows>]       Show or set query paging and page size
  TRACING [ON|OFF]             Show or toggle request tracing
  EXPAND [ON|OFF]              Show or toggle expanded statement output
  ELAPSED [ON|OFF]             Show or toggle elapsed-time reporting
  DEBUG [ON|OFF]               Show or toggle debug diagnostics
  SHOW VERSION|SESSION         Report tool version or session settings
  SOURCE '<file>'              Run the statements in a CQL file
  CAPTURE ['<file>'|OFF]       Route statement output to a file
  HISTORY                      Show the statements entered this session
  CLEAR, CLS                   Clear the screen
  EXIT, QUIT                   Leave the shell

Shell commands end at a line break; CQL statements end with a semicolon
and may span multiple lines. BEGIN BATCH ... APPLY BATCH; blocks are
treated as a single statement."#
}
