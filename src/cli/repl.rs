//! # REPL - Read-Eval-Print Loop
//!
//! The interactive loop for cqlshell. Each submitted line is appended to a
//! pending buffer and the whole buffer is run through the statement
//! recognizer, which decides what happens next:
//!
//! - lex failure: a syntax error is reported and the buffer is kept, so
//!   the user can see and continue what they typed
//! - incomplete input (open literal, open comment, open batch) or a final
//!   statement with no terminator yet: the continuation prompt is shown
//!   and buffering continues
//! - otherwise: every recognized statement is processed in order and the
//!   buffer is cleared
//!
//! Shell commands are dispatched to the command handler; other statements
//! go through the statement sink. Ctrl+C clears the pending buffer,
//! Ctrl+D exits.
//!
//! ## Prompts
//!
//! ```text
//! cqlshell> BEGIN BATCH
//!       ... INSERT INTO t (a) VALUES (1);
//!       ... APPLY BATCH;
//! ```
//!
//! ## History
//!
//! Completed inputs are added to the rustyline history, persisted across
//! sessions via the history file, and to a session-local list served by
//! the `HISTORY` command.

use super::batch::{self, Dispatch};
use super::history::history_path;
use super::session::SessionState;
use crate::config::constants::{CONTINUATION_PROMPT, PRIMARY_PROMPT};
use crate::cql::recognize;
use eyre::{Result, WrapErr};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::time::Instant;

pub struct Repl {
    editor: DefaultEditor,
    session: SessionState,
    buffer: String,
    history: Vec<String>,
}

impl Repl {
    pub fn new(session: SessionState) -> Result<Self> {
        let mut editor = DefaultEditor::new().wrap_err("failed to initialize line editor")?;

        if let Some(history_file) = history_path() {
            let _ = editor.load_history(&history_file);
        }

        Ok(Self {
            editor,
            session,
            buffer: String::new(),
            history: Vec::new(),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.print_welcome();

        loop {
            let prompt = if self.buffer.is_empty() {
                PRIMARY_PROMPT
            } else {
                CONTINUATION_PROMPT
            };

            match self.editor.readline(prompt) {
                Ok(line) => {
                    if !self.handle_line(&line)? {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    self.buffer.clear();
                    println!("^C");
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye");
                    break;
                }
                Err(err) => {
                    eprintln!("Error reading input: {err}");
                    break;
                }
            }
        }

        self.save_history();
        Ok(())
    }

    /// Returns false when the shell should exit.
    fn handle_line(&mut self, line: &str) -> Result<bool> {
        self.buffer.push_str(line);
        self.buffer.push('\n');

        if self.buffer.trim().is_empty() {
            self.buffer.clear();
            return Ok(true);
        }

        let started = Instant::now();
        let statements = match recognize(&self.buffer) {
            Err(err) => {
                // The buffer is kept so the user can keep editing it.
                eprintln!("Syntax error: {err}");
                return Ok(true);
            }
            Ok(result) => {
                let awaiting_more = result.incomplete
                    || result.statements.last().is_some_and(|s| !s.is_terminated());
                if awaiting_more {
                    return Ok(true);
                }
                result.statement_strings()
            }
        };

        let input = std::mem::take(&mut self.buffer);
        let entry = input.trim().to_string();
        self.editor.add_history_entry(&entry).ok();
        self.history.push(entry);

        for (index, statement) in statements.iter().enumerate() {
            let first = statement.split_whitespace().next().unwrap_or("");
            if first.eq_ignore_ascii_case("history") {
                self.print_history();
                continue;
            }
            match batch::process_statement(index, statement, &mut self.session) {
                Ok(Dispatch::Exit) => {
                    println!("Bye");
                    return Ok(false);
                }
                Ok(Dispatch::Continue) => {}
                Err(err) => eprintln!("Error: {err}"),
            }
        }

        if self.session.elapsed() {
            println!("({:.3} sec)", started.elapsed().as_secs_f64());
        }
        Ok(true)
    }

    fn print_history(&self) {
        for (index, entry) in self.history.iter().enumerate() {
            println!("{:4}  {}", index + 1, entry);
        }
    }

    fn print_welcome(&self) {
        println!("cqlshell {}", env!("CARGO_PKG_VERSION"));
        println!("CQL statement recognizer; not connected to a cluster.");
        println!("Enter HELP for usage hints, EXIT to leave.");
        println!();
    }

    fn save_history(&mut self) {
        if let Some(history_file) = history_path() {
            if let Err(err) = self.editor.save_history(&history_file) {
                eprintln!("Warning: could not save history: {err}");
            }
        }
    }
}
