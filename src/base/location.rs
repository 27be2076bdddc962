//! Resolved source locations and ranges.
//!
//! A [`SourceLocation`] is a byte offset that may additionally carry the
//! resolved (file, line, column) triple once a [`LineIndex`](super::LineIndex)
//! has been consulted. Both types are immutable once created.

use smol_str::SmolStr;
use text_size::TextSize;

use super::LineCol;

/// A position in source code: byte offset plus optional resolved coordinates
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    /// Byte offset into the source buffer
    pub offset: TextSize,
    /// File-name label, when known
    pub file: Option<SmolStr>,
    /// Resolved line/column, when a line index was available
    pub line_col: Option<LineCol>,
}

impl SourceLocation {
    /// Create an unresolved location from a bare byte offset
    pub fn raw(offset: TextSize) -> Self {
        Self {
            offset,
            file: None,
            line_col: None,
        }
    }

    /// Create a fully resolved location
    pub fn resolved(offset: TextSize, file: impl Into<SmolStr>, line_col: LineCol) -> Self {
        Self {
            offset,
            file: Some(file.into()),
            line_col: Some(line_col),
        }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.file, self.line_col) {
            (Some(file), Some(lc)) => write!(f, "{}:{}:{}", file, lc.line + 1, lc.col + 1),
            (None, Some(lc)) => write!(f, "{}:{}", lc.line + 1, lc.col + 1),
            _ => write!(f, "@{}", u32::from(self.offset)),
        }
    }
}

/// An ordered pair of locations: start inclusive, end exclusive
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceRange {
    start: SourceLocation,
    end: SourceLocation,
}

impl SourceRange {
    /// Create a range.
    ///
    /// # Panics
    /// Panics in debug builds if `start.offset > end.offset`.
    pub fn new(start: SourceLocation, end: SourceLocation) -> Self {
        debug_assert!(
            start.offset <= end.offset,
            "source range start {:?} past end {:?}",
            start.offset,
            end.offset
        );
        Self { start, end }
    }

    pub fn start(&self) -> &SourceLocation {
        &self.start
    }

    pub fn end(&self) -> &SourceLocation {
        &self.end
    }

    /// Length of the range in bytes
    pub fn len(&self) -> TextSize {
        self.end.offset - self.start.offset
    }

    /// Whether the range covers zero bytes
    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }
}

impl std::fmt::Display for SourceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", u32::from(self.start.offset), u32::from(self.end.offset))
    }
}
