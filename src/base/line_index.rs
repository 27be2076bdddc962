//! Line/column conversion for byte offsets.
//!
//! Diagnostics arrive from the engine as raw byte offsets; callers want
//! line/column positions. [`LineIndex`] precomputes the start offset of every
//! line once so each conversion is a binary search instead of a rescan of the
//! source.

use text_size::TextSize;

/// A line/column position (0-indexed, column in UTF-8 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// Maps byte offsets to line/column positions for one source text.
///
/// Stateless with respect to parsing: build it once per (file, source) pair
/// and share it across all diagnostics of that parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Start offset of each line; `line_starts[0]` is always 0
    line_starts: Vec<TextSize>,
    /// Total length of the indexed text
    len: TextSize,
}

impl LineIndex {
    /// Build the index by scanning the text once for newlines.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::new(i as u32 + 1));
            }
        }
        Self {
            line_starts,
            len: TextSize::of(text),
        }
    }

    /// Convert a byte offset to a line/column position.
    ///
    /// Offsets past the end of the text clamp to the last line.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts[line];
        LineCol {
            line: line as u32,
            col: (offset - line_start).into(),
        }
    }

    /// Convert a line/column position back to a byte offset.
    ///
    /// Returns `None` if the line does not exist or the column runs past the
    /// end of the indexed text.
    pub fn offset(&self, line_col: LineCol) -> Option<TextSize> {
        let line_start = *self.line_starts.get(line_col.line as usize)?;
        let offset = line_start + TextSize::new(line_col.col);
        (offset <= self.len).then_some(offset)
    }

    /// Number of lines in the indexed text (at least 1, even when empty)
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
