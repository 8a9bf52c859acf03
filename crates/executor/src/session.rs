//! Stateful session: applies commands to one relation graph, in order.
//!
//! Commands execute strictly sequentially; the effects of one command are
//! fully observable to the next. `End` marks the session finished: the
//! caller stops feeding commands and tears the session down, releasing the
//! graph and everything it owns.

use tracing::trace;

use reltrack_engine::RelationGraph;

use crate::command::Command;
use crate::output::Output;

/// A session owning one [`RelationGraph`].
#[derive(Debug, Default)]
pub struct Session {
    graph: RelationGraph,
    finished: bool,
}

impl Session {
    /// Create a session over an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `End` has been executed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Read-only view of the underlying graph.
    pub fn graph(&self) -> &RelationGraph {
        &self.graph
    }

    /// Execute one command and return its output.
    pub fn execute(&mut self, command: Command) -> Output {
        match command {
            Command::AddEntity { id } => {
                self.graph.add_entity(&id);
                Output::Unit
            }
            Command::DelEntity { id } => {
                self.graph.del_entity(&id);
                Output::Unit
            }
            Command::AddRelation { from, to, ty } => {
                self.graph.add_relation(&from, &to, &ty);
                Output::Unit
            }
            Command::DelRelation { from, to, ty } => {
                self.graph.del_relation(&from, &to, &ty);
                Output::Unit
            }
            Command::Report => Output::Report(self.graph.report()),
            Command::End => {
                trace!("session finished");
                self.finished = true;
                Output::Shutdown
            }
        }
    }
}
