//! Recursive-descent grammar for the built-in engine.
//!
//! Every produced subtree goes through the session's materialize callback;
//! statement and token boundaries consult the session's reuse lookup first.
//! Error recovery wraps skipped tokens in ERROR nodes, so the tree renders
//! back to the input byte-for-byte even for malformed source.

use rowan::{NodeOrToken, TextSize};

use crate::diagnostics::raw::{RawDiagnostic, RawFixItEdit, RawRange, RawSeverity};
use crate::engine::{GreenElement, LAYOUT_FINGERPRINT, ParseEngine, ParseSession, RawNode};

use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;

/// The built-in parse engine
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeEngine;

impl ParseEngine for NativeEngine {
    fn layout_fingerprint(&self) -> u64 {
        LAYOUT_FINGERPRINT
    }

    fn parse(&self, source: &str, session: &mut ParseSession<'_>) -> Option<GreenElement> {
        let tokens: Vec<_> = Lexer::new(source).collect();
        let mut parser = Parser {
            tokens: &tokens,
            pos: 0,
            eof: TextSize::of(source),
            session,
        };
        parser.source_file()
    }
}

/// Tokens that would have been pulled into the preceding statement by a
/// fresh parse.
fn continues_statement(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::PLUS
            | SyntaxKind::MINUS
            | SyntaxKind::STAR
            | SyntaxKind::SLASH
            | SyntaxKind::SEMICOLON
    )
}

/// The parser state.
///
/// Grammar methods return `None` only when the materializer refused a node;
/// missing or malformed input never aborts the parse. It is reported through
/// the diagnostic callback and recovered with ERROR nodes.
struct Parser<'p, 'a, 's> {
    tokens: &'p [Token<'a>],
    pos: usize,
    eof: TextSize,
    session: &'p mut ParseSession<'s>,
}

impl Parser<'_, '_, '_> {
    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current_kind(&self) -> Option<SyntaxKind> {
        self.tokens.get(self.pos).map(|t| t.kind)
    }

    fn peek_nontrivia(&self) -> Option<&Token<'_>> {
        self.tokens[self.pos..].iter().find(|t| !t.kind.is_trivia())
    }

    fn peek_nontrivia_kind(&self) -> Option<SyntaxKind> {
        self.peek_nontrivia().map(|t| t.kind)
    }

    /// Offset of the next non-trivia token, or end of input
    fn peek_nontrivia_offset(&self) -> TextSize {
        self.peek_nontrivia().map_or(self.eof, |t| t.offset)
    }

    // =========================================================================
    // Token consumption and materialization
    // =========================================================================

    /// Consume the current token into `children`, splicing the previous
    /// parse's token when the reuse lookup offers one of the same extent.
    fn bump_into(&mut self, children: &mut Vec<GreenElement>) -> Option<()> {
        let token = self.tokens[self.pos];
        if self.session.is_incremental() {
            if let Some((len, green)) = self.session.lookup(token.offset, token.kind.into()) {
                if len == TextSize::of(token.text) {
                    self.session.splice(token.offset, len);
                    children.push(green);
                    self.pos += 1;
                    return Some(());
                }
            }
        }

        let element = self.session.materialize(RawNode::Token {
            kind: token.kind.into(),
            text: token.text,
        })?;
        children.push(element);
        self.pos += 1;
        Some(())
    }

    fn eat_trivia_into(&mut self, children: &mut Vec<GreenElement>) -> Option<()> {
        while self.current_kind().is_some_and(SyntaxKind::is_trivia) {
            self.bump_into(children)?;
        }
        Some(())
    }

    fn node(&mut self, kind: SyntaxKind, children: Vec<GreenElement>) -> Option<GreenElement> {
        self.session.materialize(RawNode::Node {
            kind: kind.into(),
            children,
        })
    }

    fn diag(&mut self, raw: RawDiagnostic) {
        self.session.diagnostic(raw);
    }

    // =========================================================================
    // Incremental reuse
    // =========================================================================

    /// Try to splice a whole statement from the previous parse.
    ///
    /// A hit is honored only when its extent ends exactly on a boundary of
    /// the new token stream; a reused extent that would split a token (the
    /// token-merge case at an edit boundary) is treated as a miss.
    fn try_reuse(&mut self, kind: SyntaxKind) -> Option<GreenElement> {
        if !self.session.is_incremental() {
            return None;
        }
        let offset = self.tokens.get(self.pos)?.offset;
        let (len, green) = self.session.lookup(offset, kind.into())?;
        let end = offset + len;

        let mut idx = self.pos;
        while idx < self.tokens.len() && self.tokens[idx].offset < end {
            idx += 1;
        }
        if idx == self.pos || self.tokens[idx - 1].end() != end {
            return None;
        }

        // The token after the candidate must not extend the statement: a
        // trailing operator or ';' would have been absorbed by a fresh parse.
        let next = self.tokens[idx..].iter().find(|t| !t.kind.is_trivia());
        if next.is_some_and(|t| continues_statement(t.kind)) {
            return None;
        }

        self.session.splice(offset, len);
        self.pos = idx;
        Some(green)
    }

    // =========================================================================
    // Grammar
    // =========================================================================

    fn source_file(&mut self) -> Option<GreenElement> {
        let mut children = Vec::new();
        self.eat_trivia_into(&mut children)?;
        while self.pos < self.tokens.len() {
            let stmt = self.statement()?;
            children.push(stmt);
            self.eat_trivia_into(&mut children)?;
        }
        self.node(SyntaxKind::SOURCE_FILE, children)
    }

    fn statement(&mut self) -> Option<GreenElement> {
        let kind = if self.current_kind() == Some(SyntaxKind::LET_KW) {
            SyntaxKind::LET_STMT
        } else {
            SyntaxKind::EXPR_STMT
        };
        if let Some(reused) = self.try_reuse(kind) {
            return Some(reused);
        }
        match kind {
            SyntaxKind::LET_STMT => self.let_stmt(),
            _ => self.expr_stmt(),
        }
    }

    fn let_stmt(&mut self) -> Option<GreenElement> {
        let mut children = Vec::new();
        self.bump_into(&mut children)?; // 'let'

        if self.peek_nontrivia_kind() == Some(SyntaxKind::IDENT) {
            self.eat_trivia_into(&mut children)?;
            self.bump_into(&mut children)?;
        } else {
            let offset = self.peek_nontrivia_offset();
            self.diag(RawDiagnostic::new(
                RawSeverity::ERROR,
                offset.into(),
                "expected a name after 'let'",
            ));
        }

        match self.peek_nontrivia_kind() {
            Some(SyntaxKind::EQ) => {
                self.eat_trivia_into(&mut children)?;
                self.bump_into(&mut children)?;
            }
            Some(SyntaxKind::EQ_EQ) => {
                self.eat_trivia_into(&mut children)?;
                let token = self.tokens[self.pos];
                self.diag(
                    RawDiagnostic::new(
                        RawSeverity::ERROR,
                        token.offset.into(),
                        "expected '=', found '=='",
                    )
                    .with_highlight(RawRange::new(token.offset.into(), 2))
                    .with_fixit(RawFixItEdit::new(RawRange::new(token.offset.into(), 2), "=")),
                );
                self.bump_into(&mut children)?;
            }
            _ => {
                let offset = self.peek_nontrivia_offset();
                self.diag(
                    RawDiagnostic::new(RawSeverity::ERROR, offset.into(), "expected '=' in let binding")
                        .with_fixit(RawFixItEdit::new(RawRange::new(offset.into(), 0), "= ")),
                );
            }
        }

        match self.peek_nontrivia_kind() {
            Some(kind) if kind.starts_expression() => {
                self.eat_trivia_into(&mut children)?;
                let expr = self.expr()?;
                children.push(expr);
            }
            _ => {
                let offset = self.peek_nontrivia_offset();
                self.diag(RawDiagnostic::new(
                    RawSeverity::ERROR,
                    offset.into(),
                    "expected expression",
                ));
            }
        }

        self.terminator(&mut children)?;
        self.node(SyntaxKind::LET_STMT, children)
    }

    fn expr_stmt(&mut self) -> Option<GreenElement> {
        let start = self.tokens[self.pos].offset;
        let expr = self.expr()?;
        if let NodeOrToken::Node(node) = &expr {
            if node.kind() == SyntaxKind::LITERAL.into() {
                self.diag(RawDiagnostic::new(
                    RawSeverity::WARNING,
                    start.into(),
                    "literal expression has no effect",
                ));
            }
        }

        let mut children = vec![expr];
        self.terminator(&mut children)?;
        self.node(SyntaxKind::EXPR_STMT, children)
    }

    /// Optional `;` after a statement; extra semicolons are warned about.
    fn terminator(&mut self, children: &mut Vec<GreenElement>) -> Option<()> {
        if self.peek_nontrivia_kind() != Some(SyntaxKind::SEMICOLON) {
            return Some(());
        }
        self.eat_trivia_into(children)?;
        self.bump_into(children)?;

        while self.peek_nontrivia_kind() == Some(SyntaxKind::SEMICOLON) {
            self.eat_trivia_into(children)?;
            let token = self.tokens[self.pos];
            self.diag(
                RawDiagnostic::new(RawSeverity::WARNING, token.offset.into(), "redundant ';'")
                    .with_fixit(RawFixItEdit::new(RawRange::new(token.offset.into(), 1), "")),
            );
            self.bump_into(children)?;
        }
        Some(())
    }

    fn expr(&mut self) -> Option<GreenElement> {
        let mut lhs = self.term()?;
        while matches!(
            self.peek_nontrivia_kind(),
            Some(SyntaxKind::PLUS | SyntaxKind::MINUS)
        ) {
            let mut children = vec![lhs];
            self.eat_trivia_into(&mut children)?;
            self.bump_into(&mut children)?;
            self.eat_trivia_into(&mut children)?;
            let rhs = self.term()?;
            children.push(rhs);
            lhs = self.node(SyntaxKind::BIN_EXPR, children)?;
        }
        Some(lhs)
    }

    fn term(&mut self) -> Option<GreenElement> {
        let mut lhs = self.factor()?;
        while matches!(
            self.peek_nontrivia_kind(),
            Some(SyntaxKind::STAR | SyntaxKind::SLASH)
        ) {
            let mut children = vec![lhs];
            self.eat_trivia_into(&mut children)?;
            self.bump_into(&mut children)?;
            self.eat_trivia_into(&mut children)?;
            let rhs = self.factor()?;
            children.push(rhs);
            lhs = self.node(SyntaxKind::BIN_EXPR, children)?;
        }
        Some(lhs)
    }

    fn factor(&mut self) -> Option<GreenElement> {
        match self.current_kind() {
            Some(SyntaxKind::INTEGER | SyntaxKind::STRING) => {
                let mut children = Vec::new();
                self.bump_into(&mut children)?;
                self.node(SyntaxKind::LITERAL, children)
            }
            Some(SyntaxKind::IDENT) => {
                let mut children = Vec::new();
                self.bump_into(&mut children)?;
                self.node(SyntaxKind::NAME_REF, children)
            }
            Some(SyntaxKind::L_PAREN) => self.paren_expr(),
            Some(_) => {
                let token = self.tokens[self.pos];
                self.diag(RawDiagnostic::new(
                    RawSeverity::ERROR,
                    token.offset.into(),
                    format!("expected expression, found '{}'", token.text),
                ));
                // Always consume the offending token to make progress.
                let mut children = Vec::new();
                self.bump_into(&mut children)?;
                self.node(SyntaxKind::ERROR, children)
            }
            None => {
                self.diag(RawDiagnostic::new(
                    RawSeverity::ERROR,
                    self.eof.into(),
                    "expected expression",
                ));
                self.node(SyntaxKind::ERROR, Vec::new())
            }
        }
    }

    fn paren_expr(&mut self) -> Option<GreenElement> {
        let open = self.tokens[self.pos];
        let mut children = Vec::new();
        self.bump_into(&mut children)?; // '('

        match self.peek_nontrivia_kind() {
            Some(kind) if kind.starts_expression() => {
                self.eat_trivia_into(&mut children)?;
                let inner = self.expr()?;
                children.push(inner);
            }
            _ => {
                let offset = self.peek_nontrivia_offset();
                self.diag(RawDiagnostic::new(
                    RawSeverity::ERROR,
                    offset.into(),
                    "expected expression",
                ));
            }
        }

        if self.peek_nontrivia_kind() == Some(SyntaxKind::R_PAREN) {
            self.eat_trivia_into(&mut children)?;
            self.bump_into(&mut children)?;
        } else {
            let gap = self.peek_nontrivia_offset();
            self.diag(
                RawDiagnostic::new(RawSeverity::ERROR, gap.into(), "expected ')'")
                    .with_fixit(RawFixItEdit::new(RawRange::new(gap.into(), 0), ")")),
            );
            self.diag(
                RawDiagnostic::new(RawSeverity::NOTE, open.offset.into(), "to match this '('")
                    .with_highlight(RawRange::new(open.offset.into(), 1)),
            );
        }

        self.node(SyntaxKind::PAREN_EXPR, children)
    }
}
