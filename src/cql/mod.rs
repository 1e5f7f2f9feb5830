//! # CQL Statement Recognition Module
//!
//! This module turns raw CQL input text into a sequence of well-formed
//! statement strings. The implementation follows a zero-copy design: tokens
//! borrow from the original input string and statements are slices of the
//! token sequence, so a whole recognition pass allocates only the output
//! vectors.
//!
//! ## Module Structure
//!
//! - `token`: token kinds and the borrowed token value
//! - `lexer`: zero-copy tokenizer with ordered rule families
//! - `massage`: newline-to-terminator conversion for shell commands
//! - `splitter`: statement boundary splitting, batch grouping, and the
//!   public `split`/`recognize` entry points
//! - `commands`: the fixed shell-command set
//! - `strip`: line-oriented comment stripping for display and logging
//!
//! ## Pipeline
//!
//! ```text
//! text ──lexer──▶ tokens ──massage──▶ tokens ──splitter──▶ statements
//! ```
//!
//! Each stage produces a fresh sequence. Statement boundaries are decided
//! only by the tokenizer's output; the comment stripper in `strip` is
//! display support and is never consulted for boundaries.
//!
//! ## Incomplete Input
//!
//! Incomplete input is not an error. An unterminated string, name, dollar
//! quote, block comment, or batch block sets the `incomplete` flag on the
//! recognition result, telling an interactive caller to keep collecting
//! lines. A lex failure, by contrast, is fatal for the whole call: no
//! partial statement list is produced.

pub mod commands;
pub mod lexer;
pub mod massage;
pub mod splitter;
pub mod strip;
pub mod token;

pub use commands::is_shell_command;
pub use lexer::{tokenize, LexError};
pub use massage::massage_tokens;
pub use splitter::{recognize, split, RecognitionResult, Statement};
pub use strip::strip_comments;
pub use token::{Token, TokenKind};
