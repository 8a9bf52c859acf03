//! Contract types returned to callers.

use serde::{Deserialize, Serialize};

use crate::types::{EntityName, TypeName};

/// One relation type's report fragment.
///
/// `destinations` holds every entity whose incoming-relation set under `ty`
/// has size `count`, in ascending identifier order. `count` is the largest
/// incoming-set size currently achieved under `ty` and is always at least 1:
/// fragments are only produced for types with at least one live relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Relation type this fragment describes.
    pub ty: TypeName,
    /// Destinations tied at the current maximum, ascending by identifier.
    pub destinations: Vec<EntityName>,
    /// Number of distinct sources shared by every listed destination.
    pub count: u64,
}
