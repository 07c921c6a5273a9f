//! Token model for the Nocta scanner.
//!
//! A [`Token`] is an immutable value: a classification tag, the exact
//! source substring it was scanned from, and the position of its first
//! character. The scanner appends exactly one [`TokenKind::Eof`] token
//! (empty lexeme) at the end of every scan.

use std::fmt;

use crate::span::Span;

/// Token classification.
///
/// Closed set: operators and punctuation from the dispatch table,
/// literals, one variant per reserved keyword, and the end-of-input
/// sentinel.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    /// `[]` scanned as one token.
    EmptyBrackets,
    Comma,
    Semicolon,
    Tilde,
    Hash,

    // Operators
    Plus,
    PlusPlus,
    PlusEqual,
    Minus,
    MinusMinus,
    MinusEqual,
    /// `->`
    Arrow,
    Star,
    StarEqual,
    Slash,
    SlashEqual,
    Percent,
    PercentEqual,
    Caret,
    CaretCaret,
    CaretEqual,
    Amp,
    AmpAmp,
    AmpEqual,
    Pipe,
    PipePipe,
    PipeEqual,
    Bang,
    BangBang,
    BangEqual,
    Equal,
    EqualEqual,
    /// `=>`
    FatArrow,
    Less,
    LessEqual,
    LessLess,
    LessLessEqual,
    Greater,
    GreaterEqual,
    GreaterGreater,
    GreaterGreaterEqual,
    Question,
    QuestionQuestion,
    Colon,
    ColonColon,
    Dot,
    DotDot,

    // Literals
    Int,
    Float,
    Str,
    Ident,

    // Keywords
    Break,
    Continue,
    Else,
    Enum,
    False,
    Fn,
    For,
    If,
    Import,
    In,
    Let,
    Match,
    Null,
    Return,
    Struct,
    True,
    While,

    /// End-of-input sentinel, always the last token of a scan.
    Eof,
}

impl TokenKind {
    /// Whether this kind is a reserved keyword.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Break
                | TokenKind::Continue
                | TokenKind::Else
                | TokenKind::Enum
                | TokenKind::False
                | TokenKind::Fn
                | TokenKind::For
                | TokenKind::If
                | TokenKind::Import
                | TokenKind::In
                | TokenKind::Let
                | TokenKind::Match
                | TokenKind::Null
                | TokenKind::Return
                | TokenKind::Struct
                | TokenKind::True
                | TokenKind::While
        )
    }
}

/// A classified token.
///
/// The lexeme borrows the source text the token was scanned from;
/// `line`/`col` are the 1-based position of its first character.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src str,
    pub line: u32,
    pub col: u32,
    pub span: Span,
}

impl<'src> Token<'src> {
    #[inline]
    pub fn new(kind: TokenKind, lexeme: &'src str, line: u32, col: u32, span: Span) -> Self {
        Token {
            kind,
            lexeme,
            line,
            col,
            span,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lexeme.is_empty() {
            write!(f, "{:?} @ {}:{}", self.kind, self.line, self.col)
        } else {
            write!(
                f,
                "{:?} `{}` @ {}:{}",
                self.kind, self.lexeme, self.line, self.col
            )
        }
    }
}
