//! Relation graph dispatcher.
//!
//! [`RelationGraph`] owns the entity registry and the type leaderboard and
//! keeps them consistent across every mutation. All operations are total:
//! ill-formed preconditions (unknown entity, absent relation) silently
//! produce no effect, and commands run strictly sequentially.
//!
//! ## Index maintenance
//!
//! The leaderboard is maintained incrementally where the information to do
//! so is at hand:
//! - inserting a relation can only raise one destination's count by one, so
//!   comparing the new count against the type's current maximum suffices;
//! - removing a relation from a destination that shared the maximum with
//!   others just drops it from the top set.
//!
//! When the information is lost (the sole top destination dropped below the
//! maximum, or an entity deletion bulk-removed relations), the per-type
//! index falls back to a full recompute: a scan of the registry that
//! rebuilds the entry from the ground-truth incoming sets.

use tracing::{debug, trace};

use reltrack_core::{ReportEntry, TypeName};

use crate::leaderboard::Leaderboard;
use crate::registry::EntityRegistry;

/// The relation multigraph and its per-type top-destination index.
#[derive(Debug, Default)]
pub struct RelationGraph {
    entities: EntityRegistry,
    leaderboard: Leaderboard,
}

impl RelationGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the entity registry.
    pub fn entities(&self) -> &EntityRegistry {
        &self.entities
    }

    /// Read-only view of the type leaderboard.
    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Register an entity. Registering a known identifier is a no-op.
    pub fn add_entity(&mut self, id: &str) {
        if self.entities.register(id) {
            trace!(entity = id, "entity registered");
        } else {
            trace!(entity = id, "addent ignored: already registered");
        }
    }

    /// Add the relation `(from, to, ty)`. Silently does nothing when either
    /// entity is unknown or the relation is already present. `from == to` is
    /// an ordinary relation.
    pub fn add_relation(&mut self, from: &str, to: &str, ty: &str) {
        if !self.entities.contains(from) || !self.entities.contains(to) {
            trace!(from, to, ty, "addrel ignored: unknown entity");
            return;
        }
        // Share the registry's interned allocation rather than re-copying
        // the identifier into the incoming set.
        let from_name = match self.entities.get(from) {
            Some(entity) => entity.name().clone(),
            None => return,
        };
        let ty_name = TypeName::from(ty);

        let (inserted, count, to_name) = match self.entities.get_mut(to) {
            Some(dest) => {
                let to_name = dest.name().clone();
                let set = dest.incoming_mut().get_or_create(&ty_name);
                let inserted = set.insert(from_name);
                (inserted, set.len(), to_name)
            }
            None => return,
        };
        if !inserted {
            trace!(from, to, ty, "addrel ignored: relation already present");
            return;
        }

        let entry = self.leaderboard.ensure(&ty_name);
        if count == entry.current_maximum {
            entry.top_set.insert(to_name);
        } else if count > entry.current_maximum {
            entry.top_set.clear();
            entry.top_set.insert(to_name);
            entry.current_maximum = count;
            debug!(ty, max = count, "new maximum for type");
        }
        trace!(from, to, ty, count, "relation added");
    }

    /// Remove the relation `(from, to, ty)`. Silently does nothing when
    /// either entity is unknown, the type has no live relation, or the
    /// relation is absent.
    pub fn del_relation(&mut self, from: &str, to: &str, ty: &str) {
        if !self.entities.contains(from) || self.leaderboard.get(ty).is_none() {
            trace!(from, to, ty, "delrel ignored");
            return;
        }
        let Some(dest) = self.entities.get_mut(to) else {
            trace!(from, to, ty, "delrel ignored: unknown destination");
            return;
        };
        let (count_before, emptied) = match dest.incoming_mut().get_mut(ty) {
            Some(set) => {
                if !set.remove(from) {
                    trace!(from, to, ty, "delrel ignored: relation absent");
                    return;
                }
                (set.len() + 1, set.is_empty())
            }
            None => {
                trace!(from, to, ty, "delrel ignored: no incoming set");
                return;
            }
        };
        if emptied {
            dest.incoming_mut().remove(ty);
        }
        trace!(from, to, ty, "relation removed");

        let Some(entry) = self.leaderboard.get_mut(ty) else {
            return;
        };
        if count_before == entry.current_maximum {
            if entry.top_set.len() > 1 {
                // The destination leaves the tie; the rest still hold the
                // maximum.
                entry.top_set.remove(to);
            } else {
                // The sole top dropped below the maximum; the true maximum
                // is no longer known incrementally.
                debug!(ty, "sole top destination fell; recomputing");
                recompute(&self.entities, &mut self.leaderboard, ty);
            }
        }
    }

    /// Delete an entity together with every relation it participates in, as
    /// source or destination, under every type. Unknown identifiers are
    /// silently ignored.
    pub fn del_entity(&mut self, id: &str) {
        if !self.entities.contains(id) {
            trace!(entity = id, "delent ignored: unknown entity");
            return;
        }
        // Every type with any live relation has a leaderboard entry, so this
        // snapshot covers every type the entity can appear under.
        let types = self.leaderboard.type_names();
        for ty in &types {
            let ty = ty.as_str();
            // Relations id -> U: scrub the entity from every other incoming
            // set under this type.
            for entity in self.entities.iter_mut() {
                if entity.name().as_str() == id {
                    continue;
                }
                let emptied = match entity.incoming_mut().get_mut(ty) {
                    Some(set) => {
                        set.remove(id);
                        set.is_empty()
                    }
                    None => false,
                };
                if emptied {
                    entity.incoming_mut().remove(ty);
                }
            }
            // Relations U -> id: drop the entity's own incoming set wholesale.
            if let Some(entity) = self.entities.get_mut(id) {
                entity.incoming_mut().remove(ty);
            }
            if let Some(entry) = self.leaderboard.get_mut(ty) {
                entry.top_set.remove(id);
            }
            recompute(&self.entities, &mut self.leaderboard, ty);
        }
        self.entities.unregister(id);
        trace!(entity = id, "entity deleted");
    }

    /// Snapshot the per-type report: for each type with at least one live
    /// relation, ascending by type name, the destinations tied at the
    /// current maximum (ascending by identifier) and the maximum itself.
    ///
    /// Pure: repeated calls between mutations yield identical snapshots.
    pub fn report(&self) -> Vec<ReportEntry> {
        self.leaderboard
            .iter()
            .map(|(ty, entry)| ReportEntry {
                ty: ty.clone(),
                destinations: entry.top_set.iter().cloned().collect(),
                count: entry.current_maximum as u64,
            })
            .collect()
    }
}

/// Rebuild one type's leaderboard entry from the ground-truth incoming sets.
///
/// O(entities · log entities); only invoked when incremental maintenance has
/// lost the information needed to keep the entry exact (sole top fell, or a
/// bulk deletion). Drops the entry entirely when no incoming set under the
/// type is left non-empty.
fn recompute(entities: &EntityRegistry, leaderboard: &mut Leaderboard, ty: &str) {
    let drained = {
        let Some(entry) = leaderboard.get_mut(ty) else {
            return;
        };
        entry.current_maximum = 0;
        entry.top_set.clear();
        for entity in entities.iter() {
            let Some(set) = entity.incoming().get(ty) else {
                continue;
            };
            let size = set.len();
            if size == 0 {
                continue;
            }
            if size == entry.current_maximum {
                entry.top_set.insert(entity.name().clone());
            } else if size > entry.current_maximum {
                entry.top_set.clear();
                entry.top_set.insert(entity.name().clone());
                entry.current_maximum = size;
            }
        }
        entry.current_maximum == 0
    };
    if drained {
        leaderboard.drop_type(ty);
        debug!(ty, "type drained; leaderboard entry dropped");
    }
}
