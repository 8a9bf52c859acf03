//! reltrack: command-driven, in-memory relation tracker.
//!
//! The system ingests a stream of textual commands that declare entities,
//! add and remove typed directed relations between them, and on demand
//! produce a report of, for each relation type currently in use, the
//! most-referenced destination entities and the count they share.
//!
//! This facade crate re-exports the public surface of the workspace:
//! - [`reltrack_core`]: identifier newtypes and contract types
//! - [`reltrack_engine`]: the relation multigraph and its per-type index
//! - [`reltrack_executor`]: command parsing, execution, and report rendering
//!
//! # Example
//!
//! ```
//! use reltrack::{parse_line, render_report, Output, Session};
//!
//! let mut session = Session::new();
//! for line in [
//!     "addent \"alice\"",
//!     "addent \"bob\"",
//!     "addrel \"alice\" \"bob\" \"follows\"",
//! ] {
//!     session.execute(parse_line(line).unwrap());
//! }
//! let Output::Report(entries) = session.execute(parse_line("report").unwrap()) else {
//!     unreachable!("report always yields Output::Report");
//! };
//! assert_eq!(render_report(&entries), "\"follows\" \"bob\" 1; \n");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use reltrack_core::{EntityName, ReportEntry, TypeName};
pub use reltrack_engine::{EntityRegistry, Leaderboard, OrderedSet, RelationGraph, TypeEntry};
pub use reltrack_executor::{parse_line, render_report, Command, Output, ParseError, Session};
