//! Logos-based lexer for the built-in language.
//!
//! Nothing is skipped: trivia comes out as ordinary tokens so the tree can
//! preserve every input byte.

use logos::Logos;
use rowan::TextSize;

use super::syntax_kind::SyntaxKind;

/// A token with its kind, text, and position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    /// Byte offset one past the end of this token
    pub fn end(&self) -> TextSize {
        self.offset + TextSize::of(self.text)
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // TRIVIA
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*[^/])*\*/")]
    BlockComment,

    // KEYWORDS (before the identifier regex)
    #[token("let")]
    LetKw,

    // LITERALS
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"[0-9]+")]
    Integer,

    #[regex(r#""([^"\\]|\\.)*""#)]
    String,

    // PUNCTUATION (multi-character first)
    #[token("==")]
    EqEq,

    #[token("=")]
    Eq,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token(";")]
    Semicolon,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Whitespace => Self::WHITESPACE,
            LogosToken::LineComment => Self::LINE_COMMENT,
            LogosToken::BlockComment => Self::BLOCK_COMMENT,
            LogosToken::LetKw => Self::LET_KW,
            LogosToken::Ident => Self::IDENT,
            LogosToken::Integer => Self::INTEGER,
            LogosToken::String => Self::STRING,
            LogosToken::EqEq => Self::EQ_EQ,
            LogosToken::Eq => Self::EQ,
            LogosToken::LParen => Self::L_PAREN,
            LogosToken::RParen => Self::R_PAREN,
            LogosToken::Plus => Self::PLUS,
            LogosToken::Minus => Self::MINUS,
            LogosToken::Star => Self::STAR,
            LogosToken::Slash => Self::SLASH,
            LogosToken::Semicolon => Self::SEMICOLON,
        }
    }
}
