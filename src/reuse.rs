//! Incremental reuse of subtrees from a previous parse.
//!
//! When a document is edited, most of the previous tree is still valid. A
//! [`ParseTransition`] carries the previous tree plus the edited regions; the
//! crate builds a [`ReuseIndex`] from it once per reparse, and the engine asks
//! the index, through the session's lookup callback, whether a node of a
//! given kind starts at the position it is about to parse. Hits are spliced
//! into the new tree and the covered bytes are skipped.
//!
//! The index is a pure map from original start offset to candidate subtrees:
//! it never tracks the engine's position, and the engine stays responsible
//! for its own bookkeeping after a hit.

use rowan::{GreenNode, NodeOrToken, SyntaxKind, TextRange, TextSize, WalkEvent};
use rustc_hash::FxHashMap;

use crate::engine::GreenElement;

/// One edited region, in pre-edit coordinates: `old_len` bytes starting at
/// `offset` were replaced by `new_len` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceEdit {
    pub offset: TextSize,
    pub old_len: TextSize,
    pub new_len: TextSize,
}

impl SourceEdit {
    pub fn new(offset: u32, old_len: u32, new_len: u32) -> Self {
        Self {
            offset: TextSize::new(offset),
            old_len: TextSize::new(old_len),
            new_len: TextSize::new(new_len),
        }
    }

    /// The replaced region in the original source
    pub fn old_range(&self) -> TextRange {
        TextRange::at(self.offset, self.old_len)
    }
}

/// Previous tree plus the edits separating it from the new source.
///
/// Constructed by the caller before a reparse and borrowed for the duration
/// of that single `parse` call.
#[derive(Debug, Clone)]
pub struct ParseTransition {
    previous: GreenNode,
    edits: Vec<SourceEdit>,
}

impl ParseTransition {
    /// Create a transition from the previous tree and its edits.
    ///
    /// Edits are sorted by offset.
    ///
    /// # Panics
    /// Panics if two edits overlap in the original source.
    pub fn new(previous: GreenNode, mut edits: Vec<SourceEdit>) -> Self {
        edits.sort_by_key(|e| e.offset);
        for pair in edits.windows(2) {
            assert!(
                pair[0].offset + pair[0].old_len <= pair[1].offset,
                "overlapping edits: {:?} and {:?}",
                pair[0],
                pair[1]
            );
        }
        Self { previous, edits }
    }

    pub fn previous(&self) -> &GreenNode {
        &self.previous
    }

    pub fn edits(&self) -> &[SourceEdit] {
        &self.edits
    }
}

/// Rowan language with pass-through kinds, for walking a previous tree whose
/// concrete language is unknown to this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum RawLanguage {}

impl rowan::Language for RawLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: SyntaxKind) -> Self::Kind {
        raw
    }

    fn kind_to_raw(kind: Self::Kind) -> SyntaxKind {
        kind
    }
}

/// Offset-keyed index of reusable subtrees from the previous parse.
///
/// Built once per transition in O(size of previous tree); each lookup is
/// amortized O(1) in the number of candidates sharing a start offset.
pub(crate) struct ReuseIndex<'t> {
    transition: &'t ParseTransition,
    /// Original start offset → candidates starting there, in preorder
    /// (outermost first). Subtrees intersecting an edit are never recorded.
    entries: FxHashMap<u32, Vec<(SyntaxKind, GreenElement)>>,
}

impl<'t> ReuseIndex<'t> {
    pub(crate) fn new(transition: &'t ParseTransition) -> Self {
        let root = rowan::SyntaxNode::<RawLanguage>::new_root(transition.previous().clone());
        let mut entries: FxHashMap<u32, Vec<(SyntaxKind, GreenElement)>> = FxHashMap::default();
        let mut indexed = 0usize;

        for event in root.preorder_with_tokens() {
            let WalkEvent::Enter(element) = event else {
                continue;
            };
            let range = element.text_range();
            if range.is_empty() || intersects_edit(range, transition.edits()) {
                // Children may still fall outside the edit; keep descending.
                continue;
            }
            let green = match &element {
                NodeOrToken::Node(node) => NodeOrToken::Node(node.green().into_owned()),
                NodeOrToken::Token(token) => NodeOrToken::Token(token.green().to_owned()),
            };
            entries
                .entry(range.start().into())
                .or_default()
                .push((element.kind(), green));
            indexed += 1;
        }

        tracing::debug!(candidates = indexed, edits = transition.edits().len(), "reuse index built");
        Self { transition, entries }
    }

    /// Look up a reusable subtree of exactly `kind` whose original extent
    /// begins at the original-source position corresponding to `new_offset`.
    ///
    /// Returns the subtree and its byte length; the engine skips that many
    /// source bytes on a hit. A partial kind match (same category, different
    /// concrete kind) is a miss: substituting it would corrupt every offset
    /// after the edit, not just the edited area.
    pub(crate) fn lookup(
        &self,
        new_offset: TextSize,
        kind: SyntaxKind,
    ) -> Option<(TextSize, GreenElement)> {
        let old_offset = self.old_offset(new_offset)?;
        let candidates = self.entries.get(&old_offset.into())?;

        // Preorder recorded outermost first; scan from the back so the
        // deepest unaffected node wins at equal offsets.
        for (candidate_kind, green) in candidates.iter().rev() {
            if *candidate_kind != kind {
                continue;
            }
            let len = match green {
                NodeOrToken::Node(node) => node.text_len(),
                NodeOrToken::Token(token) => token.text_len(),
            };
            tracing::trace!(offset = u32::from(new_offset), kind = kind.0, len = u32::from(len), "reuse hit");
            return Some((len, green.clone()));
        }
        None
    }

    /// Translate a position in the edited source back to the original
    /// coordinates the index is keyed by. Positions inside a replaced region
    /// have no original counterpart.
    fn old_offset(&self, new_offset: TextSize) -> Option<TextSize> {
        let n = i64::from(u32::from(new_offset));
        let mut delta = 0i64; // new minus old, accumulated over prior edits
        for edit in self.transition.edits() {
            let new_start = i64::from(u32::from(edit.offset)) + delta;
            let new_end = new_start + i64::from(u32::from(edit.new_len));
            if n >= new_end {
                delta += i64::from(u32::from(edit.new_len)) - i64::from(u32::from(edit.old_len));
            } else if n < new_start {
                break;
            } else {
                return None;
            }
        }
        u32::try_from(n - delta).ok().map(TextSize::new)
    }
}

/// Strict half-open intersection: a subtree merely touching an edit boundary
/// is still reusable.
fn intersects_edit(range: TextRange, edits: &[SourceEdit]) -> bool {
    edits.iter().any(|edit| {
        let old = edit.old_range();
        range.start() < old.end() && old.start() < range.end()
    })
}
