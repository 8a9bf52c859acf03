//! Command execution layer for the relation tracker.
//!
//! The executor turns input lines into typed [`Command`]s, applies them to a
//! [`reltrack_engine::RelationGraph`] through a stateful [`Session`], and
//! renders [`Output::Report`] snapshots into the exact wire format. The
//! engine itself never reads or writes bytes; this crate is the boundary
//! between text and operations.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod command;
pub mod error;
pub mod output;
pub mod parse;
pub mod render;
pub mod session;

pub use command::Command;
pub use error::ParseError;
pub use output::Output;
pub use parse::parse_line;
pub use render::render_report;
pub use session::Session;

pub use reltrack_core::{EntityName, ReportEntry, TypeName};
