//! Node materialization: engine-emitted records become tree nodes.

use rowan::{GreenNode, GreenToken, NodeOrToken, SyntaxKind, TextSize};

use super::GreenElement;

/// A subtree record emitted by the engine, not yet part of the tree.
///
/// Ownership transfers to the materialized node exactly once: the record is
/// consumed by value, so materializing it twice is unrepresentable.
#[derive(Debug)]
pub enum RawNode<'src> {
    /// A leaf carrying its source text (trivia included)
    Token { kind: SyntaxKind, text: &'src str },
    /// An interior node over already-materialized children
    Node {
        kind: SyntaxKind,
        children: Vec<GreenElement>,
    },
}

impl RawNode<'_> {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            Self::Token { kind, .. } | Self::Node { kind, .. } => *kind,
        }
    }

    /// Total byte extent of this record's source text
    pub fn text_len(&self) -> TextSize {
        match self {
            Self::Token { text, .. } => TextSize::of(*text),
            Self::Node { children, .. } => children
                .iter()
                .map(|child| match child {
                    NodeOrToken::Node(node) => node.text_len(),
                    NodeOrToken::Token(token) => token.text_len(),
                })
                .sum(),
        }
    }
}

/// Capability seam between the engine and the tree: turns one [`RawNode`]
/// into an owned tree handle.
///
/// Implementations must be total for any record the engine can legally
/// produce; a `None` return is surfaced by the driver as invalid syntax data.
/// The single-method shape exists so tests can inject a double.
pub trait NodeMaterializer {
    fn materialize(&self, raw: RawNode<'_>) -> Option<GreenElement>;
}

/// The production materializer: builds rowan green nodes and tokens.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreenMaterializer;

impl NodeMaterializer for GreenMaterializer {
    fn materialize(&self, raw: RawNode<'_>) -> Option<GreenElement> {
        Some(match raw {
            RawNode::Token { kind, text } => NodeOrToken::Token(GreenToken::new(kind, text)),
            RawNode::Node { kind, children } => NodeOrToken::Node(GreenNode::new(kind, children)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: SyntaxKind = SyntaxKind(1);
    const NODE: SyntaxKind = SyntaxKind(2);

    #[test]
    fn materialize_token_preserves_text() {
        let element = GreenMaterializer
            .materialize(RawNode::Token { kind: TOKEN, text: "let " })
            .unwrap();
        let token = element.into_token().unwrap();
        assert_eq!(token.text(), "let ");
        assert_eq!(token.kind(), TOKEN);
    }

    #[test]
    fn materialize_node_spans_its_children() {
        let child = GreenMaterializer
            .materialize(RawNode::Token { kind: TOKEN, text: "abc" })
            .unwrap();
        let raw = RawNode::Node { kind: NODE, children: vec![child] };
        assert_eq!(raw.text_len(), TextSize::new(3));

        let element = GreenMaterializer.materialize(raw).unwrap();
        assert_eq!(element.into_node().unwrap().text_len(), TextSize::new(3));
    }
}
