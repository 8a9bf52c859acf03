//! Command enum defining all tracker operations.
//!
//! Commands are the instruction set of the tracker: every operation a client
//! can request is a variant of this enum. Commands are self-contained (all
//! parameters live in the variant), serializable, and pure data.

use serde::{Deserialize, Serialize};

/// A self-contained, serializable tracker operation.
///
/// Every command is total: semantically void requests (re-adding a known
/// entity, deleting an absent relation, naming an unknown entity) execute
/// as silent no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    /// Register an entity.
    /// Returns: `Output::Unit`
    AddEntity {
        /// Entity identifier.
        id: String,
    },

    /// Delete an entity and every relation it participates in.
    /// Returns: `Output::Unit`
    DelEntity {
        /// Entity identifier.
        id: String,
    },

    /// Add the typed directed relation `(from, to, ty)`.
    /// Returns: `Output::Unit`
    AddRelation {
        /// Source entity identifier.
        from: String,
        /// Destination entity identifier.
        to: String,
        /// Relation type name.
        ty: String,
    },

    /// Remove the typed directed relation `(from, to, ty)`.
    /// Returns: `Output::Unit`
    DelRelation {
        /// Source entity identifier.
        from: String,
        /// Destination entity identifier.
        to: String,
        /// Relation type name.
        ty: String,
    },

    /// Snapshot the per-type top-destination report.
    /// Returns: `Output::Report`
    Report,

    /// Finish the session.
    /// Returns: `Output::Shutdown`
    End,
}
