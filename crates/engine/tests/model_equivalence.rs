//! The incremental per-type index must match a from-scratch recomputation
//! after every command in any command sequence.
//!
//! A naive reference model replays the same commands against a plain triple
//! set and derives each report by full recomputation. After every command the
//! engine's report must equal the model's, and the engine's internal
//! structures must satisfy their invariants.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;

use reltrack_engine::RelationGraph;

#[derive(Debug, Clone)]
enum Op {
    AddEnt(String),
    DelEnt(String),
    AddRel(String, String, String),
    DelRel(String, String, String),
}

/// Naive ground truth: live entities plus the set of live triples.
#[derive(Debug, Default)]
struct ReferenceModel {
    entities: BTreeSet<String>,
    triples: BTreeSet<(String, String, String)>,
}

impl ReferenceModel {
    fn apply(&mut self, op: &Op) {
        match op {
            Op::AddEnt(id) => {
                self.entities.insert(id.clone());
            }
            Op::DelEnt(id) => {
                if self.entities.remove(id) {
                    self.triples
                        .retain(|(from, to, _)| from != id && to != id);
                }
            }
            Op::AddRel(from, to, ty) => {
                if self.entities.contains(from) && self.entities.contains(to) {
                    self.triples.insert((from.clone(), to.clone(), ty.clone()));
                }
            }
            Op::DelRel(from, to, ty) => {
                self.triples.remove(&(from.clone(), to.clone(), ty.clone()));
            }
        }
    }

    /// Full recomputation of the expected report.
    fn report(&self) -> Vec<(String, Vec<String>, u64)> {
        let mut per_type: BTreeMap<&str, BTreeMap<&str, u64>> = BTreeMap::new();
        for (_from, to, ty) in &self.triples {
            *per_type
                .entry(ty.as_str())
                .or_default()
                .entry(to.as_str())
                .or_default() += 1;
        }
        per_type
            .into_iter()
            .map(|(ty, counts)| {
                let max = counts.values().copied().max().unwrap_or(0);
                let tops = counts
                    .iter()
                    .filter(|(_, &count)| count == max)
                    .map(|(to, _)| (*to).to_string())
                    .collect();
                (ty.to_string(), tops, max)
            })
            .collect()
    }
}

fn apply_to_graph(graph: &mut RelationGraph, op: &Op) {
    match op {
        Op::AddEnt(id) => graph.add_entity(id),
        Op::DelEnt(id) => graph.del_entity(id),
        Op::AddRel(from, to, ty) => graph.add_relation(from, to, ty),
        Op::DelRel(from, to, ty) => graph.del_relation(from, to, ty),
    }
}

fn graph_report(graph: &RelationGraph) -> Vec<(String, Vec<String>, u64)> {
    graph
        .report()
        .into_iter()
        .map(|entry| {
            (
                entry.ty.to_string(),
                entry.destinations.iter().map(|d| d.to_string()).collect(),
                entry.count,
            )
        })
        .collect()
}

/// Structural invariants that must hold after every command.
fn check_invariants(graph: &RelationGraph) -> Result<(), TestCaseError> {
    // Ground truth per type: destination -> incoming-set size.
    let mut sizes: BTreeMap<String, BTreeMap<&str, usize>> = BTreeMap::new();
    for entity in graph.entities().iter() {
        for (ty, set) in entity.incoming().iter() {
            // Incoming sets are pruned when drained and reference only live
            // entities.
            prop_assert!(!set.is_empty(), "empty incoming set for {ty}");
            for source in set.iter() {
                prop_assert!(
                    graph.entities().contains(source.as_str()),
                    "incoming set references dead entity {source}"
                );
            }
            sizes
                .entry(ty.to_string())
                .or_default()
                .insert(entity.name().as_str(), set.len());
        }
    }

    // A leaderboard entry exists exactly for the types with live relations.
    let leaderboard_types: BTreeSet<String> = graph
        .leaderboard()
        .iter()
        .map(|(ty, _)| ty.to_string())
        .collect();
    let live_types: BTreeSet<String> = sizes.keys().cloned().collect();
    prop_assert_eq!(leaderboard_types, live_types);

    for (ty, entry) in graph.leaderboard().iter() {
        let per_dest = &sizes[ty.as_str()];
        let true_max = per_dest.values().copied().max().unwrap_or(0);
        prop_assert!(entry.current_maximum >= 1);
        prop_assert_eq!(entry.current_maximum, true_max, "stale maximum for {}", ty);
        prop_assert!(!entry.top_set.is_empty());
        for dest in entry.top_set.iter() {
            prop_assert!(
                graph.entities().contains(dest.as_str()),
                "top set references dead entity {dest}"
            );
            prop_assert_eq!(
                per_dest.get(dest.as_str()).copied(),
                Some(true_max),
                "top set member {} not at maximum for {}",
                dest,
                ty
            );
        }
        let tied = per_dest.values().filter(|&&size| size == true_max).count();
        prop_assert_eq!(entry.top_set.len(), tied);
    }
    Ok(())
}

fn id_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["a", "b", "c", "d", "e", "f", "g", "h"])
        .prop_map(str::to_string)
}

fn ty_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["likes", "follows", "knows"]).prop_map(str::to_string)
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => id_strategy().prop_map(Op::AddEnt),
        1 => id_strategy().prop_map(Op::DelEnt),
        5 => (id_strategy(), id_strategy(), ty_strategy())
            .prop_map(|(from, to, ty)| Op::AddRel(from, to, ty)),
        2 => (id_strategy(), id_strategy(), ty_strategy())
            .prop_map(|(from, to, ty)| Op::DelRel(from, to, ty)),
    ]
}

proptest! {
    #[test]
    fn test_incremental_index_matches_reference(
        ops in prop::collection::vec(op_strategy(), 1..250),
    ) {
        let mut graph = RelationGraph::new();
        let mut model = ReferenceModel::default();
        for op in &ops {
            apply_to_graph(&mut graph, op);
            model.apply(op);
            prop_assert_eq!(graph_report(&graph), model.report());
            check_invariants(&graph)?;
        }
    }

    #[test]
    fn test_add_then_del_relation_restores_state(
        setup in prop::collection::vec(op_strategy(), 0..60),
        from in id_strategy(),
        to in id_strategy(),
        ty in ty_strategy(),
    ) {
        let mut graph = RelationGraph::new();
        for op in &setup {
            apply_to_graph(&mut graph, op);
        }
        graph.add_entity(&from);
        graph.add_entity(&to);
        // Only a relation that was absent before the pair restores exactly.
        graph.del_relation(&from, &to, &ty);
        let before = graph_report(&graph);
        graph.add_relation(&from, &to, &ty);
        graph.del_relation(&from, &to, &ty);
        prop_assert_eq!(graph_report(&graph), before);
    }
}
