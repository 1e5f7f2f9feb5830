//! The fixed set of interactive shell commands.
//!
//! These commands terminate on a line break instead of a semicolon, and a
//! trailing semicolon is stripped from their rendered text. The set is a
//! compile-time perfect hash set; membership is checked against the
//! lower-cased first word of a statement.

use phf::phf_set;

static SHELL_COMMANDS: phf::Set<&'static str> = phf_set! {
    "help",
    "?",
    "consistency",
    "serial",
    "describe",
    "desc",
    "show",
    "source",
    "capture",
    "login",
    "debug",
    "tracing",
    "expand",
    "elapsed",
    "paging",
    "exit",
    "quit",
    "clear",
    "cls",
    "history",
};

/// Whether `word` is a shell command, matched case-insensitively.
pub fn is_shell_command(word: &str) -> bool {
    SHELL_COMMANDS.contains(word.to_ascii_lowercase().as_str())
}
