//! Parse rejection reasons.
//!
//! There is no user-visible error channel: callers trace-log a rejected line
//! and drop it. The reasons are typed so rejection behavior stays testable.

use thiserror::Error;

/// Why an input line did not produce a [`Command`](crate::Command).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line held no tokens at all.
    #[error("empty line")]
    EmptyLine,

    /// The command word is not part of the instruction set.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Wrong number of arguments for the command word.
    #[error("{command} expects {expected} argument(s), got {got}")]
    ArityMismatch {
        /// Command word as written.
        command: &'static str,
        /// Arguments the command takes.
        expected: usize,
        /// Arguments the line carried.
        got: usize,
    },

    /// An argument was empty once its quotes were stripped.
    #[error("empty identifier in {command}")]
    EmptyIdentifier {
        /// Command word as written.
        command: &'static str,
    },
}
