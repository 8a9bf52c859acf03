//! Entity record and its per-type incoming-relation map.
//!
//! Each entity owns one [`TypeMap`]: relation-type name → ordered set of the
//! distinct sources currently pointing at this entity under that type. The
//! number of distinct types observed in a run is small (low tens), so the
//! map is a linear-scan small vector rather than a hash table; lookups are
//! effectively constant for the workload.

use smallvec::SmallVec;

use reltrack_core::{EntityName, TypeName};

use crate::ordered_set::OrderedSet;

/// Relation types held inline before the map spills to the heap.
const INLINE_TYPES: usize = 4;

/// Per-entity map from relation type to the incoming-source set.
///
/// An entry's set is never empty across a command boundary: callers prune
/// the entry as soon as the last source is removed.
#[derive(Debug, Default)]
pub struct TypeMap {
    entries: SmallVec<[(TypeName, OrderedSet); INLINE_TYPES]>,
}

impl TypeMap {
    /// Look up the incoming set for a type.
    pub fn get(&self, ty: &str) -> Option<&OrderedSet> {
        self.entries
            .iter()
            .find(|(name, _)| name.as_str() == ty)
            .map(|(_, set)| set)
    }

    /// Look up the incoming set for a type, mutably.
    pub fn get_mut(&mut self, ty: &str) -> Option<&mut OrderedSet> {
        self.entries
            .iter_mut()
            .find(|(name, _)| name.as_str() == ty)
            .map(|(_, set)| set)
    }

    /// Look up the incoming set for a type, creating an empty one if absent.
    pub fn get_or_create(&mut self, ty: &TypeName) -> &mut OrderedSet {
        let idx = match self
            .entries
            .iter()
            .position(|(name, _)| name.as_str() == ty.as_str())
        {
            Some(idx) => idx,
            None => {
                self.entries.push((ty.clone(), OrderedSet::new()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }

    /// Drop the entry for a type. Returns `false` if there was none.
    pub fn remove(&mut self, ty: &str) -> bool {
        match self
            .entries
            .iter()
            .position(|(name, _)| name.as_str() == ty)
        {
            Some(idx) => {
                self.entries.swap_remove(idx);
                true
            }
            None => false,
        }
    }

    /// Iterate entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&TypeName, &OrderedSet)> {
        self.entries.iter().map(|(name, set)| (name, set))
    }

    /// Number of types with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no type has an entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A tracked entity: its interned identifier and its incoming-relation map.
///
/// The entity registry exclusively owns each `Entity`; every other container
/// in the engine refers to it through cheap [`EntityName`] handles.
#[derive(Debug)]
pub struct Entity {
    name: EntityName,
    incoming: TypeMap,
}

impl Entity {
    /// Create an entity with no incoming relations.
    pub fn new(name: EntityName) -> Self {
        Self {
            name,
            incoming: TypeMap::default(),
        }
    }

    /// The entity's identifier handle.
    pub fn name(&self) -> &EntityName {
        &self.name
    }

    /// The per-type incoming-relation map.
    pub fn incoming(&self) -> &TypeMap {
        &self.incoming
    }

    /// The per-type incoming-relation map, mutably.
    pub fn incoming_mut(&mut self) -> &mut TypeMap {
        &mut self.incoming
    }
}
