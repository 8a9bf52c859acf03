//! Output enum for command execution results.
//!
//! Every command produces exactly one output variant, and the mapping is
//! deterministic: mutations yield `Unit`, `Report` yields the ordered
//! snapshot, `End` yields `Shutdown`.

use serde::{Deserialize, Serialize};

use reltrack_core::ReportEntry;

/// Successful command execution results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    /// No return value (entity and relation mutations).
    Unit,

    /// Ordered report snapshot, one entry per live relation type.
    Report(Vec<ReportEntry>),

    /// The session is finished; no further commands will be observed.
    Shutdown,
}
