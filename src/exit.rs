// src/exit.rs
//! Standardized process exit codes for `wordgraph`.
//!
//! Query subcommands report "not found", "no result" and "empty graph"
//! through distinct codes so scripts can tell them apart.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum WordGraphExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, config).
    Error = 1,
    /// Input validation failed (bad menu choice, empty sentence).
    InvalidInput = 2,
    /// One or more queried words are not nodes of the graph.
    WordNotFound = 3,
    /// The words exist but the relationship does not (no bridge, no path).
    NoResult = 4,
    /// The graph has no nodes.
    EmptyGraph = 5,
}

impl WordGraphExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for WordGraphExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
