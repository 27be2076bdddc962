//! # laurel
//!
//! Full-fidelity syntax tree parsing with incremental subtree reuse and
//! diagnostic aggregation.
//!
//! Every byte of the input, whitespace and comments included, is
//! represented in the resulting tree, so rendering the tree reproduces the
//! source exactly. When a document is edited, a [`ParseTransition`] built
//! from the previous tree lets the parse engine splice unchanged subtrees
//! back in instead of re-parsing them.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! driver      → parse / parse_file entry points, Parse result
//!   ↓
//! parser      → built-in engine: logos lexer, SyntaxKind, grammar
//!   ↓
//! engine      → engine boundary: RawNode, callbacks, ParseSession
//!   ↓
//! reuse       → ParseTransition, edit-aware reuse index
//!   ↓
//! diagnostics → Severity, FixIt, Note, Diagnostic, aggregation
//!   ↓
//! base        → Primitives (LineIndex, SourceLocation, SourceRange)
//! ```

// ============================================================================
// MODULES (dependency order: base → diagnostics → reuse → engine → driver)
// ============================================================================

/// Foundation types: LineIndex, LineCol, SourceLocation, SourceRange
pub mod base;

/// Diagnostic model: Severity, FixIt, Note, Diagnostic, converter, aggregator
pub mod diagnostics;

/// Incremental reuse: source edits, parse transitions, the reuse index
pub mod reuse;

/// Engine boundary: raw record shapes, materializer seam, parse sessions
pub mod engine;

/// Built-in reference engine: logos lexer, SyntaxKind, grammar
pub mod parser;

/// Parse driver: caller-facing parse / parse_file, Parse result, ParserError
pub mod driver;

// Re-export the caller-facing surface
pub use base::{LineCol, LineIndex, SourceLocation, SourceRange};
pub use diagnostics::{Diagnostic, FixIt, Note, Severity};
pub use driver::{Parse, ParserError, parse, parse_file, parse_with};
pub use reuse::{ParseTransition, SourceEdit};

// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
