//! Caller-facing parse entry points.
//!
//! The driver owns everything around one engine invocation: the one-time
//! layout compatibility check, wiring the session callbacks (materializer,
//! optional reuse index, optional diagnostic pipeline), running the engine
//! synchronously, and validating the handle it returns. Diagnostics are
//! flushed on every exit path, success or not.

use std::io;
use std::path::{Path, PathBuf};

use rowan::{GreenNode, NodeOrToken, TextRange};
use thiserror::Error;
use tracing::debug;

use crate::base::LineIndex;
use crate::diagnostics::{Diagnostic, DiagnosticAggregator, DiagnosticConverter};
use crate::engine::{GreenMaterializer, ParseEngine, ParseSession, verify_compatibility};
use crate::parser::{NativeEngine, SyntaxNode};
use crate::reuse::{ParseTransition, ReuseIndex};

/// Errors produced by the parse driver
#[derive(Debug, Error)]
pub enum ParserError {
    /// The engine was built against a different boundary record layout.
    /// The engine was never invoked.
    #[error("incompatible parse engine: expected layout {expected:#018x}, engine reports {actual:#018x}")]
    CompatibilityMismatch { expected: u64, actual: u64 },

    /// The engine failed to produce a valid top-level node
    #[error("parse engine returned invalid syntax data")]
    InvalidSyntaxData,

    /// Reading the source file failed
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The result of a successful parse: the green tree plus the log of subtree
/// ranges spliced from the previous parse.
#[derive(Debug, Clone)]
pub struct Parse {
    green: GreenNode,
    reused: Vec<TextRange>,
}

impl Parse {
    /// The root of the green tree
    pub fn green(&self) -> &GreenNode {
        &self.green
    }

    /// A red (syntax) tree view over the green tree.
    ///
    /// Cheap: the green tree is shared, not copied.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    /// Render the tree back to source text.
    ///
    /// This is lossless: the output is byte-identical to the parsed input.
    pub fn text(&self) -> String {
        self.syntax().text().to_string()
    }

    /// Ranges of the new source (in new-source coordinates) that were covered
    /// by subtrees reused from the previous parse. Empty for a non-incremental
    /// parse.
    pub fn reused_ranges(&self) -> &[TextRange] {
        &self.reused
    }
}

/// Parse `source` with the built-in engine.
///
/// `transition` enables incremental reuse against a previous parse.
/// `file_name` labels diagnostic locations; `on_diagnostic` receives each
/// aggregated diagnostic as soon as it is complete. With no sink installed,
/// diagnostics are dropped and the line index is never consulted.
pub fn parse(
    source: &str,
    transition: Option<&ParseTransition>,
    file_name: Option<&str>,
    on_diagnostic: Option<&mut dyn FnMut(Diagnostic)>,
) -> Result<Parse, ParserError> {
    parse_with(&NativeEngine, source, transition, file_name, on_diagnostic)
}

/// Read and parse a file with the built-in engine.
///
/// The path becomes the file label on diagnostic locations.
pub fn parse_file(
    path: &Path,
    on_diagnostic: Option<&mut dyn FnMut(Diagnostic)>,
) -> Result<Parse, ParserError> {
    let source = std::fs::read_to_string(path).map_err(|source| ParserError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let label = path.to_string_lossy();
    parse(&source, None, Some(&label), on_diagnostic)
}

/// Parse `source` with an arbitrary engine.
///
/// The engine's layout fingerprint is verified before it is invoked; a
/// mismatched engine never sees the session. Pending diagnostics are flushed
/// even when the engine fails.
pub fn parse_with(
    engine: &dyn ParseEngine,
    source: &str,
    transition: Option<&ParseTransition>,
    file_name: Option<&str>,
    on_diagnostic: Option<&mut dyn FnMut(Diagnostic)>,
) -> Result<Parse, ParserError> {
    verify_compatibility(engine)
        .map_err(|(expected, actual)| ParserError::CompatibilityMismatch { expected, actual })?;

    let line_index = LineIndex::new(source);
    let aggregator = on_diagnostic.map(|sink| {
        DiagnosticAggregator::new(DiagnosticConverter::new(file_name, &line_index), sink)
    });
    let reuse = transition.map(ReuseIndex::new);
    let incremental = reuse.is_some();

    let mut session = ParseSession::new(&GreenMaterializer, reuse, aggregator);
    let top = engine.parse(source, &mut session);
    let reused = session.finish();

    match top {
        Some(NodeOrToken::Node(green)) => {
            debug!(
                len = source.len(),
                incremental,
                reused = reused.len(),
                "parse complete"
            );
            Ok(Parse { green, reused })
        }
        Some(NodeOrToken::Token(_)) | None => Err(ParserError::InvalidSyntaxData),
    }
}
