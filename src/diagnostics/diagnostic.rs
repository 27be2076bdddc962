//! Finalized diagnostic types.
//!
//! A [`Diagnostic`] is created only once all of its trailing notes have been
//! observed (see [`DiagnosticAggregator`](super::DiagnosticAggregator)) and is
//! immutable thereafter.

use crate::base::{SourceLocation, SourceRange};

/// Severity of a finalized diagnostic.
///
/// "note" never appears here: notes are attached to the diagnostic they
/// annotate rather than surfaced standalone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// A hard error in the source
    #[default]
    Error,
    /// A warning that does not prevent parsing
    Warning,
}

impl Severity {
    /// Check if this is an error
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// A suggested textual edit attached to a diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixIt {
    /// Insert `text` at a single position
    Insert { at: SourceLocation, text: String },
    /// Delete the covered range
    Remove { range: SourceRange },
    /// Replace the covered range with `text`
    Replace { range: SourceRange, text: String },
}

/// An informational annotation owned by exactly one [`Diagnostic`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub message: String,
    pub location: SourceLocation,
    pub highlights: Vec<SourceRange>,
    pub fixits: Vec<FixIt>,
}

/// A finalized diagnostic with its attached notes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// Primary location the diagnostic points at
    pub location: SourceLocation,
    /// Highlighted source ranges, in emission order
    pub highlights: Vec<SourceRange>,
    /// Suggested edits, in emission order
    pub fixits: Vec<FixIt>,
    /// Trailing notes annotating this diagnostic
    pub notes: Vec<Note>,
}

impl Diagnostic {
    /// Check if this diagnostic has any attached notes
    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }

    /// Check if this diagnostic carries fix-its
    pub fn has_fixits(&self) -> bool {
        !self.fixits.is_empty()
    }

    /// Format the diagnostic for display, one line per note
    pub fn format(&self) -> String {
        let mut result = format!("{}: {}: {}", self.location, self.severity.as_str(), self.message);
        for note in &self.notes {
            result.push_str(&format!("\n{}: note: {}", note.location, note.message));
        }
        result
    }
}
