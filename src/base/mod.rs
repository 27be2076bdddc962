//! Foundation types for the laurel parsing layer.
//!
//! This module provides the primitives used throughout the crate:
//! - [`LineIndex`], [`LineCol`] - byte offset to line/column conversion
//! - [`SourceLocation`], [`SourceRange`] - resolved source positions
//!
//! This module has NO dependencies on other laurel modules.

mod line_index;
mod location;

pub use line_index::{LineCol, LineIndex};
pub use location::{SourceLocation, SourceRange};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
