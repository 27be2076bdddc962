//! Translation of raw engine records into resolved diagnostics.
//!
//! A [`DiagnosticConverter`] is bound to one (file name, line index) pair and
//! is otherwise stateless: every raw byte offset it sees is resolved through
//! the line index rather than by rescanning the source.

use text_size::TextSize;

use crate::base::{LineIndex, SourceLocation, SourceRange};

use super::diagnostic::{FixIt, Note};
use super::raw::{RawDiagnostic, RawFixItEdit, RawRange};

/// Converts raw byte-offset records into resolved locations and fix-its
pub struct DiagnosticConverter<'a> {
    file: Option<&'a str>,
    line_index: &'a LineIndex,
}

impl<'a> DiagnosticConverter<'a> {
    pub fn new(file: Option<&'a str>, line_index: &'a LineIndex) -> Self {
        Self { file, line_index }
    }

    /// Resolve a byte offset into a full source location
    pub fn location(&self, offset: u32) -> SourceLocation {
        let offset = TextSize::new(offset);
        let line_col = self.line_index.line_col(offset);
        match self.file {
            Some(file) => SourceLocation::resolved(offset, file, line_col),
            None => SourceLocation {
                offset,
                file: None,
                line_col: Some(line_col),
            },
        }
    }

    /// Resolve a raw (offset, length) pair into a source range
    pub fn range(&self, raw: RawRange) -> SourceRange {
        SourceRange::new(
            self.location(raw.offset),
            self.location(raw.offset + raw.len),
        )
    }

    /// Classify a raw edit into one of the three fix-it kinds.
    ///
    /// Zero-length range ⇒ insertion; non-empty range with empty replacement
    /// text ⇒ removal; otherwise a replacement.
    pub fn fixit(&self, raw: RawFixItEdit) -> FixIt {
        if raw.range.is_empty() {
            FixIt::Insert {
                at: self.location(raw.range.offset),
                text: raw.text,
            }
        } else if raw.text.is_empty() {
            FixIt::Remove {
                range: self.range(raw.range),
            }
        } else {
            FixIt::Replace {
                range: self.range(raw.range),
                text: raw.text,
            }
        }
    }

    /// Convert the body of a raw record into a note.
    ///
    /// The aggregator decides whether the record becomes a [`Note`] or the
    /// head of a new diagnostic; both share this conversion.
    pub(super) fn note(&self, raw: RawDiagnostic) -> Note {
        Note {
            location: self.location(raw.offset),
            message: raw.message,
            highlights: raw.highlights.into_iter().map(|r| self.range(r)).collect(),
            fixits: raw.fixits.into_iter().map(|f| self.fixit(f)).collect(),
        }
    }
}
