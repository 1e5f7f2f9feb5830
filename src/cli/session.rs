//! # Session State
//!
//! Application-level state for one shell session: the interactive options
//! a user adjusts through shell commands (consistency levels, paging,
//! tracing, expand, elapsed, debug) and the active capture file. This is
//! separate from any cluster connection, which cqlshell does not make.
//!
//! The state is owned by the single-threaded shell loop, so no locking is
//! involved.

use crate::config::constants::{DEFAULT_CONSISTENCY, DEFAULT_PAGE_SIZE, DEFAULT_SERIAL_CONSISTENCY};
use eyre::{bail, Result};
use phf::phf_set;
use std::path::{Path, PathBuf};

static CONSISTENCY_LEVELS: phf::Set<&'static str> = phf_set! {
    "ANY",
    "ONE",
    "TWO",
    "THREE",
    "QUORUM",
    "ALL",
    "LOCAL_QUORUM",
    "EACH_QUORUM",
    "LOCAL_ONE",
    "SERIAL",
    "LOCAL_SERIAL",
};

static SERIAL_CONSISTENCY_LEVELS: phf::Set<&'static str> = phf_set! {
    "SERIAL",
    "LOCAL_SERIAL",
};

#[derive(Debug)]
pub struct SessionState {
    consistency: String,
    serial_consistency: String,
    paging: bool,
    page_size: u32,
    tracing: bool,
    expand: bool,
    elapsed: bool,
    debug: bool,
    capture: Option<PathBuf>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            consistency: DEFAULT_CONSISTENCY.to_string(),
            serial_consistency: DEFAULT_SERIAL_CONSISTENCY.to_string(),
            paging: true,
            page_size: DEFAULT_PAGE_SIZE,
            tracing: false,
            expand: false,
            elapsed: false,
            debug: false,
            capture: None,
        }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn consistency(&self) -> &str {
        &self.consistency
    }

    /// Sets the consistency level after validating it against the fixed
    /// Cassandra level set. The stored value is upper-cased.
    pub fn set_consistency(&mut self, level: &str) -> Result<()> {
        let level = level.to_ascii_uppercase();
        if !CONSISTENCY_LEVELS.contains(level.as_str()) {
            bail!("'{level}' is not a valid consistency level");
        }
        self.consistency = level;
        Ok(())
    }

    pub fn serial_consistency(&self) -> &str {
        &self.serial_consistency
    }

    pub fn set_serial_consistency(&mut self, level: &str) -> Result<()> {
        let level = level.to_ascii_uppercase();
        if !SERIAL_CONSISTENCY_LEVELS.contains(level.as_str()) {
            bail!("'{level}' is not a valid serial consistency level");
        }
        self.serial_consistency = level;
        Ok(())
    }

    pub fn paging(&self) -> bool {
        self.paging
    }

    pub fn set_paging(&mut self, enabled: bool) {
        self.paging = enabled;
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn set_page_size(&mut self, size: u32) {
        self.page_size = size;
    }

    pub fn tracing(&self) -> bool {
        self.tracing
    }

    pub fn set_tracing(&mut self, enabled: bool) {
        self.tracing = enabled;
    }

    pub fn expand(&self) -> bool {
        self.expand
    }

    pub fn set_expand(&mut self, enabled: bool) {
        self.expand = enabled;
    }

    pub fn elapsed(&self) -> bool {
        self.elapsed
    }

    pub fn set_elapsed(&mut self, enabled: bool) {
        self.elapsed = enabled;
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn set_debug(&mut self, enabled: bool) {
        self.debug = enabled;
    }

    pub fn capture(&self) -> Option<&Path> {
        self.capture.as_deref()
    }

    pub fn set_capture(&mut self, path: Option<PathBuf>) {
        self.capture = path;
    }

    /// Multi-line settings dump for `SHOW SESSION`.
    pub fn describe(&self) -> String {
        let on_off = |v: bool| if v { "ON" } else { "OFF" };
        format!(
            "Consistency: {}\n\
             Serial consistency: {}\n\
             Paging: {} (page size {})\n\
             Tracing: {}\n\
             Expand: {}\n\
             Elapsed: {}\n\
             Debug: {}\n\
             Capture: {}",
            self.consistency,
            self.serial_consistency,
            on_off(self.paging),
            self.page_size,
            on_off(self.tracing),
            on_off(self.expand),
            on_off(self.elapsed),
            on_off(self.debug),
            self.capture
                .as_deref()
                .map_or_else(|| "OFF".to_string(), |p| p.display().to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_fresh_cqlsh_session() {
        let session = SessionState::new();
        assert_eq!(session.consistency(), "ONE");
        assert_eq!(session.serial_consistency(), "SERIAL");
        assert!(session.paging());
        assert_eq!(session.page_size(), 100);
        assert!(!session.tracing());
        assert!(session.capture().is_none());
    }

    #[test]
    fn consistency_is_validated_and_uppercased() {
        let mut session = SessionState::new();
        session.set_consistency("local_quorum").unwrap();
        assert_eq!(session.consistency(), "LOCAL_QUORUM");
        assert!(session.set_consistency("SOMETIMES").is_err());
        assert_eq!(session.consistency(), "LOCAL_QUORUM");
    }

    #[test]
    fn serial_consistency_rejects_plain_levels() {
        let mut session = SessionState::new();
        assert!(session.set_serial_consistency("QUORUM").is_err());
        session.set_serial_consistency("local_serial").unwrap();
        assert_eq!(session.serial_consistency(), "LOCAL_SERIAL");
    }
}
