//! Per-parse wiring of the engine callbacks.

use rowan::{SyntaxKind, TextRange, TextSize};

use crate::diagnostics::DiagnosticAggregator;
use crate::diagnostics::raw::RawDiagnostic;
use crate::reuse::ReuseIndex;

use super::{GreenElement, NodeMaterializer, RawNode};

/// One parse invocation's view of the three boundary callbacks.
///
/// A session is created inside `parse`, handed to the engine for the duration
/// of the synchronous parse, and consumed by [`finish`](Self::finish) on every
/// exit path. It is exclusively owned by that one invocation: concurrent
/// parses each build their own session and aggregator.
pub struct ParseSession<'a> {
    materializer: &'a dyn NodeMaterializer,
    reuse: Option<ReuseIndex<'a>>,
    diagnostics: Option<DiagnosticAggregator<'a>>,
    reused: Vec<TextRange>,
}

impl<'a> ParseSession<'a> {
    pub(crate) fn new(
        materializer: &'a dyn NodeMaterializer,
        reuse: Option<ReuseIndex<'a>>,
        diagnostics: Option<DiagnosticAggregator<'a>>,
    ) -> Self {
        Self {
            materializer,
            reuse,
            diagnostics,
            reused: Vec::new(),
        }
    }

    /// Node-materialize callback: wrap one engine-emitted record.
    pub fn materialize(&self, raw: RawNode<'_>) -> Option<GreenElement> {
        self.materializer.materialize(raw)
    }

    /// Node-lookup callback: ask for a reusable subtree of exactly `kind`
    /// starting at `offset` in the new source.
    ///
    /// A pure query: the index tracks no engine state. A zero-length
    /// candidate is treated as a miss here as well, so no engine can be
    /// handed a zero-byte skip.
    pub fn lookup(&mut self, offset: TextSize, kind: SyntaxKind) -> Option<(TextSize, GreenElement)> {
        let (len, green) = self.reuse.as_ref()?.lookup(offset, kind)?;
        if len == TextSize::new(0) {
            return None;
        }
        Some((len, green))
    }

    /// Record that the engine honored a lookup hit by splicing the subtree
    /// and skipping `len` source bytes at `offset`. The log feeds the
    /// reuse probe exposed on the parse result.
    pub fn splice(&mut self, offset: TextSize, len: TextSize) {
        self.reused.push(TextRange::at(offset, len));
    }

    /// Diagnostic callback: push one raw record into the aggregation
    /// pipeline. Dropped when the caller installed no sink.
    pub fn diagnostic(&mut self, raw: RawDiagnostic) {
        if let Some(aggregator) = &mut self.diagnostics {
            aggregator.consume(raw);
        }
    }

    /// Whether a reuse lookup is installed for this parse
    pub fn is_incremental(&self) -> bool {
        self.reuse.is_some()
    }

    /// Close the session: flush any pending diagnostic and hand back the log
    /// of spliced ranges (new-source coordinates).
    pub(crate) fn finish(mut self) -> Vec<TextRange> {
        if let Some(aggregator) = &mut self.diagnostics {
            aggregator.finish();
        }
        self.reused
    }
}
