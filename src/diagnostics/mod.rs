//! Diagnostic model and aggregation pipeline.
//!
//! Raw diagnostic records stream out of the parse engine in source order as
//! flat `(severity, offset, message, ranges, fix-its)` tuples, with "note"
//! records always immediately following the error or warning they annotate.
//! This module turns that stream into finalized [`Diagnostic`] values:
//!
//! - [`raw`] - the structurally stable record shapes at the engine boundary
//! - [`DiagnosticConverter`] - raw offsets → resolved locations and fix-its
//! - [`DiagnosticAggregator`] - the look-behind state machine grouping notes

pub mod raw;

mod aggregator;
mod convert;
mod diagnostic;

pub use aggregator::DiagnosticAggregator;
pub use convert::DiagnosticConverter;
pub use diagnostic::{Diagnostic, FixIt, Note, Severity};

#[cfg(test)]
mod tests;
