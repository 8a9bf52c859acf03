//! Core types for the reltrack relation tracker
//!
//! This crate defines the foundational types used throughout the system:
//! - EntityName: Interned entity identifier, ordered by identifier bytes
//! - TypeName: Interned relation-type identifier, ordered by identifier bytes
//! - ReportEntry: Contract type for one relation type's report fragment

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contract;
pub mod types;

pub use contract::ReportEntry;
pub use types::{EntityName, TypeName};
