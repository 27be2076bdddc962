//! Built-in reference engine.
//!
//! The bridging layer treats the parse engine as a black box; this module is
//! one concrete engine so the layer is exercisable end-to-end without a
//! foreign stub. It parses a small binding/expression language:
//!
//! ```text
//! source_file = statement*
//! statement   = let_stmt | expr_stmt
//! let_stmt    = 'let' NAME '=' expr ';'?
//! expr_stmt   = expr ';'?
//! expr        = term (('+'|'-') term)*
//! term        = factor (('*'|'/') factor)*
//! factor      = INTEGER | STRING | IDENT | '(' expr ')'
//! ```
//!
//! The lexer preserves all trivia and the grammar bumps every token into the
//! tree, so rendering the tree reproduces the source byte-for-byte even
//! through error recovery.

mod grammar;
mod lexer;
mod syntax_kind;

pub use grammar::NativeEngine;
pub use lexer::{Lexer, Token};
pub use syntax_kind::{
    LaurelLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken,
};
