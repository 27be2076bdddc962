//! Raw diagnostic record shapes at the engine boundary.
//!
//! These types mirror what the engine emits and must remain structurally
//! stable across engine versions; the driver's compatibility check exists to
//! detect drift here. Offsets and lengths are plain byte counts into the
//! source buffer handed to the engine.

/// Severity tag as emitted by the engine.
///
/// Kept as a raw tag rather than an enum so that an out-of-range value coming
/// across the boundary is representable, and can be rejected loudly, instead
/// of being silently coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawSeverity(pub u8);

impl RawSeverity {
    pub const ERROR: Self = Self(1);
    pub const WARNING: Self = Self(2);
    pub const NOTE: Self = Self(3);
}

/// A raw byte range: offset plus length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRange {
    pub offset: u32,
    pub len: u32,
}

impl RawRange {
    pub fn new(offset: u32, len: u32) -> Self {
        Self { offset, len }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// A raw fix-it edit: replace `range` with `text`
///
/// The three caller-facing edit kinds (insert/remove/replace) are all encoded
/// this way on the wire; [`DiagnosticConverter`](super::DiagnosticConverter)
/// classifies them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFixItEdit {
    pub range: RawRange,
    pub text: String,
}

impl RawFixItEdit {
    pub fn new(range: RawRange, text: impl Into<String>) -> Self {
        Self {
            range,
            text: text.into(),
        }
    }
}

/// One diagnostic record as emitted by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDiagnostic {
    pub severity: RawSeverity,
    /// Primary byte offset the diagnostic points at
    pub offset: u32,
    pub message: String,
    /// Highlighted source ranges, in emission order
    pub highlights: Vec<RawRange>,
    /// Suggested edits, in emission order
    pub fixits: Vec<RawFixItEdit>,
}

impl RawDiagnostic {
    pub fn new(severity: RawSeverity, offset: u32, message: impl Into<String>) -> Self {
        Self {
            severity,
            offset,
            message: message.into(),
            highlights: Vec::new(),
            fixits: Vec::new(),
        }
    }

    pub fn with_highlight(mut self, range: RawRange) -> Self {
        self.highlights.push(range);
        self
    }

    pub fn with_fixit(mut self, fixit: RawFixItEdit) -> Self {
        self.fixits.push(fixit);
        self
    }
}
