//! # Configuration Constants
//!
//! Shared tunables for the recognizer and the shell front-end.

/// Number of characters of unmatched input quoted in a lex error.
pub const LEX_ERROR_EXCERPT_CHARS: usize = 20;

/// Page size reported by `PAGING` until the user overrides it.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Consistency level a fresh session starts with.
pub const DEFAULT_CONSISTENCY: &str = "ONE";

/// Serial consistency level a fresh session starts with.
pub const DEFAULT_SERIAL_CONSISTENCY: &str = "SERIAL";

/// Prompt shown when the input buffer is empty.
pub const PRIMARY_PROMPT: &str = "cqlshell> ";

/// Prompt shown while a multi-line statement is being collected.
pub const CONTINUATION_PROMPT: &str = "      ... ";
