//! Syntax kinds for the built-in language.
//!
//! Tokens are leaf kinds (identifiers, literals, punctuation); nodes are
//! composite (statements, expressions). The discriminants double as the raw
//! kind tags crossing the engine boundary.

/// All syntax kinds (tokens and nodes) in the built-in language
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,     // identifier
    INTEGER,   // 42
    STRING,    // "hello"

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_PAREN,   // (
    R_PAREN,   // )
    PLUS,      // +
    MINUS,     // -
    STAR,      // *
    SLASH,     // /
    EQ,        // =
    EQ_EQ,     // ==
    SEMICOLON, // ;

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    LET_KW,

    /// Unrecognized input, and the recovery node wrapping skipped tokens
    ERROR,

    // =========================================================================
    // NODES
    // =========================================================================
    SOURCE_FILE,
    LET_STMT,
    EXPR_STMT,
    BIN_EXPR,
    PAREN_EXPR,
    LITERAL,
    NAME_REF,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is whitespace or a comment
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Check if a token of this kind can start an expression
    pub fn starts_expression(self) -> bool {
        matches!(
            self,
            Self::INTEGER | Self::STRING | Self::IDENT | Self::L_PAREN
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LaurelLanguage {}

impl rowan::Language for LaurelLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<LaurelLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<LaurelLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<LaurelLanguage>;
