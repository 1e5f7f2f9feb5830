//! # cqlshell - CQL Statement Recognizer and Shell
//!
//! cqlshell is an interactive/batch front-end for the Cassandra Query
//! Language. Its core is a statement recognizer that turns raw, arbitrarily
//! chunked input text into a sequence of well-formed CQL statements while
//! handling multi-line input, embedded quoting, comments, and grouped
//! `BEGIN BATCH ... APPLY BATCH` units.
//!
//! Splitting on semicolons is not enough for CQL: semicolons, newlines, and
//! keyword-looking substrings legitimately occur inside string, name,
//! comment, and blob literals; shell commands such as `DESCRIBE` terminate
//! on a line break instead of a semicolon; and a contiguous batch block is
//! one logical statement even though it contains several internal
//! terminators. The recognizer also answers, incrementally, whether the
//! buffered input is complete enough to execute or whether the caller
//! should keep collecting lines.
//!
//! ## Quick Start
//!
//! ```ignore
//! use cqlshell::{recognize, split};
//!
//! let statements = split("SELECT * FROM t1; SELECT * FROM t2;")?;
//! assert_eq!(statements, ["SELECT * FROM t1;", "SELECT * FROM t2;"]);
//!
//! let result = recognize("SELECT * FROM t WHERE a = 'unclosed")?;
//! assert!(result.incomplete);
//! ```
//!
//! ## Architecture
//!
//! Input flows strictly forward through four stages; each stage produces a
//! new sequence and never mutates the previous stage's output:
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │        Tokenizer (cql::lexer)        │  text to borrowed tokens
//! ├──────────────────────────────────────┤
//! │    Token Massager (cql::massage)     │  newline termination for
//! ├──────────────────────────────────────┤  shell commands
//! │  Boundary Splitter (cql::splitter)   │  tokens to statements
//! ├──────────────────────────────────────┤
//! │ Batch Grouper + Completeness Oracle  │  BATCH merging, incomplete flag
//! └──────────────────────────────────────┘
//! ```
//!
//! The `cli` module layers an interactive REPL and a batch script runner on
//! top of the recognizer. Both consume statement strings from the same
//! pipeline; neither influences how statements are produced.
//!
//! ## Module Overview
//!
//! - [`cql`]: tokenizer, token massager, boundary splitter, batch grouper,
//!   shell-command set, comment stripping
//! - [`cli`]: REPL, shell-command handler, session state, batch runner
//! - [`config`]: centralized constants

pub mod cli;
pub mod config;
pub mod cql;

pub use cql::{
    is_shell_command, recognize, split, strip_comments, LexError, RecognitionResult, Statement,
    Token, TokenKind,
};
