//! # Shell Front-End Module
//!
//! The interactive and batch front-ends layered on the statement
//! recognizer. Neither influences how statements are recognized; both
//! consume rendered statement strings from the same pipeline.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                      CLI Entry Point                       │
//! │                    (bin/cqlshell.rs)                       │
//! ├───────────────────────────┬────────────────────────────────┤
//! │        REPL Loop          │         Batch Runner           │
//! │  rustyline input, multi-  │  -e / -f / stdin / SOURCE,     │
//! │  line buffering driven    │  stops at the first error      │
//! │  by recognize()           │                                │
//! ├───────────────────────────┴────────────────────────────────┤
//! │   Command Handler      │   Session State    │   History    │
//! │ CONSISTENCY, PAGING,   │ levels, flags,     │ ~/.cqlshell_ │
//! │ SOURCE, CAPTURE, ...   │ capture target     │ history      │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - `repl`: read-eval-print loop with rustyline integration
//! - `commands`: shell-command parsing and execution
//! - `session`: per-session option state
//! - `batch`: script runner and statement sink
//! - `history`: history file path resolution

pub mod batch;
pub mod commands;
pub mod history;
pub mod repl;
pub mod session;

pub use repl::Repl;
pub use session::SessionState;
