// src/exit.rs
//! Standardized process exit codes for `knotscan`.
//!
//! Provides a stable contract for scripts and CI jobs.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum KnotExit {
    /// Analysis completed.
    Success = 0,
    /// Generic error (configuration, invalid arguments).
    Error = 1,
    /// The project archive or directory could not be read.
    ArchiveFailure = 2,
    /// Nothing to analyse: no source files matched.
    NoSources = 3,
    /// Cycles were found and cycles are denied.
    CyclesFound = 6,
}

impl KnotExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for KnotExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
