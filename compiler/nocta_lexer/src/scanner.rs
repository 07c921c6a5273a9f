//! Hand-written scanner producing classified tokens.
//!
//! Single pass over an immutable source buffer. The scanner keeps a
//! cursor pair (`start` of the token in flight, `current` read position)
//! and a position pair (`line`, `col`) used to stamp tokens and
//! diagnostics with the location of their first character.
//!
//! Multi-character operators are resolved by cascading [`match_byte`]
//! calls: each call consumes input only on success, so checking longer
//! candidates first implements greedy longest-match with one byte of
//! lookahead and no backtracking.
//!
//! Lexical errors never stop the scan. Both error kinds (unexpected
//! character, unterminated string) are recorded as diagnostics and
//! scanning resumes at the next character, so one pass surfaces every
//! problem in a source unit.
//!
//! [`match_byte`]: Scanner::match_byte

use nocta_diagnostic::Diagnostic;

use crate::keywords;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Columns a tab advances the position counter between tokens.
const TAB_WIDTH: u32 = 4;

/// Everything one scan produces: the token sequence (always terminated
/// by exactly one `Eof`) and the diagnostics reported along the way.
///
/// There is no shared error state anywhere; callers decide exit behavior
/// from [`has_errors`](ScanResult::has_errors).
#[derive(Clone, Debug)]
pub struct ScanResult<'src> {
    pub tokens: Vec<Token<'src>>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ScanResult<'_> {
    /// Whether the scan reported any error.
    pub fn has_errors(&self) -> bool {
        nocta_diagnostic::has_errors(&self.diagnostics)
    }
}

/// Scan a complete source unit.
///
/// Convenience for `Scanner::new(source).scan_tokens()`.
pub fn scan(source: &str) -> ScanResult<'_> {
    Scanner::new(source).scan_tokens()
}

/// Single-pass state machine over an immutable source buffer.
///
/// Construct one per source unit and call [`scan_tokens`], which
/// consumes the scanner, so a scan runs exactly once.
///
/// [`scan_tokens`]: Scanner::scan_tokens
pub struct Scanner<'src> {
    source: &'src str,
    bytes: &'src [u8],
    /// Offset of the first byte of the token being scanned.
    start: usize,
    /// Offset of the next unread byte.
    current: usize,
    /// 1-based line of the next unread byte.
    line: u32,
    /// 1-based column of the next unread byte.
    col: u32,
    /// Position of the first byte of the token being scanned.
    start_line: u32,
    start_col: u32,
    tokens: Vec<Token<'src>>,
    diagnostics: Vec<Diagnostic>,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Scanner {
            source,
            bytes: source.as_bytes(),
            start: 0,
            current: 0,
            line: 1,
            col: 1,
            start_line: 1,
            start_col: 1,
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Scan the whole buffer and hand back tokens plus diagnostics.
    ///
    /// The returned sequence always ends with exactly one `Eof` token
    /// carrying an empty lexeme, regardless of how many real tokens
    /// preceded it.
    pub fn scan_tokens(mut self) -> ScanResult<'src> {
        while !self.is_at_end() {
            self.begin_token();
            self.scan_token();
        }
        self.begin_token();
        self.add_token(TokenKind::Eof);

        ScanResult {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    /// Mark the current cursor position as the start of the next token.
    fn begin_token(&mut self) {
        self.start = self.current;
        self.start_line = self.line;
        self.start_col = self.col;
    }

    /// Consume one character and decide, by cascading `match_byte`
    /// calls, how many more belong to the same token.
    fn scan_token(&mut self) {
        let c = self.advance();
        match c {
            b'^' => {
                let kind = if self.match_byte(b'^') {
                    TokenKind::CaretCaret
                } else if self.match_byte(b'=') {
                    TokenKind::CaretEqual
                } else {
                    TokenKind::Caret
                };
                self.add_token(kind);
            }
            b'<' => {
                let kind = if self.match_byte(b'<') {
                    if self.match_byte(b'=') {
                        TokenKind::LessLessEqual
                    } else {
                        TokenKind::LessLess
                    }
                } else if self.match_byte(b'=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            b'=' => {
                let kind = if self.match_byte(b'=') {
                    TokenKind::EqualEqual
                } else if self.match_byte(b'>') {
                    TokenKind::FatArrow
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            }
            b'>' => {
                let kind = if self.match_byte(b'>') {
                    if self.match_byte(b'=') {
                        TokenKind::GreaterGreaterEqual
                    } else {
                        TokenKind::GreaterGreater
                    }
                } else if self.match_byte(b'=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }
            b'|' => {
                let kind = if self.match_byte(b'|') {
                    TokenKind::PipePipe
                } else if self.match_byte(b'=') {
                    TokenKind::PipeEqual
                } else {
                    TokenKind::Pipe
                };
                self.add_token(kind);
            }
            b'-' => {
                let kind = if self.match_byte(b'-') {
                    TokenKind::MinusMinus
                } else if self.match_byte(b'>') {
                    TokenKind::Arrow
                } else if self.match_byte(b'=') {
                    TokenKind::MinusEqual
                } else {
                    TokenKind::Minus
                };
                self.add_token(kind);
            }
            b':' => {
                let kind = if self.match_byte(b':') {
                    TokenKind::ColonColon
                } else {
                    TokenKind::Colon
                };
                self.add_token(kind);
            }
            b'!' => {
                let kind = if self.match_byte(b'!') {
                    TokenKind::BangBang
                } else if self.match_byte(b'=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            b'?' => {
                let kind = if self.match_byte(b'?') {
                    TokenKind::QuestionQuestion
                } else {
                    TokenKind::Question
                };
                self.add_token(kind);
            }
            b'/' => {
                if self.match_byte(b'/') {
                    self.skip_line_comment();
                } else {
                    let kind = if self.match_byte(b'=') {
                        TokenKind::SlashEqual
                    } else {
                        TokenKind::Slash
                    };
                    self.add_token(kind);
                }
            }
            b'.' => {
                let kind = if self.match_byte(b'.') {
                    TokenKind::DotDot
                } else {
                    TokenKind::Dot
                };
                self.add_token(kind);
            }
            b'[' => {
                let kind = if self.match_byte(b']') {
                    TokenKind::EmptyBrackets
                } else {
                    TokenKind::LeftBracket
                };
                self.add_token(kind);
            }
            b'*' => {
                let kind = if self.match_byte(b'=') {
                    TokenKind::StarEqual
                } else {
                    TokenKind::Star
                };
                self.add_token(kind);
            }
            b'&' => {
                let kind = if self.match_byte(b'&') {
                    TokenKind::AmpAmp
                } else if self.match_byte(b'=') {
                    TokenKind::AmpEqual
                } else {
                    TokenKind::Amp
                };
                self.add_token(kind);
            }
            b'%' => {
                let kind = if self.match_byte(b'=') {
                    TokenKind::PercentEqual
                } else {
                    TokenKind::Percent
                };
                self.add_token(kind);
            }
            b'+' => {
                let kind = if self.match_byte(b'+') {
                    TokenKind::PlusPlus
                } else if self.match_byte(b'=') {
                    TokenKind::PlusEqual
                } else {
                    TokenKind::Plus
                };
                self.add_token(kind);
            }
            b'~' => self.add_token(TokenKind::Tilde),
            b',' => self.add_token(TokenKind::Comma),
            b';' => self.add_token(TokenKind::Semicolon),
            b'(' => self.add_token(TokenKind::LeftParen),
            b')' => self.add_token(TokenKind::RightParen),
            b']' => self.add_token(TokenKind::RightBracket),
            b'{' => self.add_token(TokenKind::LeftBrace),
            b'}' => self.add_token(TokenKind::RightBrace),
            b'#' => self.add_token(TokenKind::Hash),
            b'"' => self.string(),
            b'\t' => {
                // advance() already counted one column
                self.col += TAB_WIDTH - 1;
            }
            b' ' => {}
            b'\n' => {
                self.line += 1;
                self.col = 1;
            }
            b'0'..=b'9' => self.number(),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(),
            _ => self.unexpected_character(),
        }
    }

    // ─── Sub-scanners ───────────────────────────────────────────────

    /// Scan a string literal; the opening `"` is already consumed.
    ///
    /// A newline inside the literal closes it in place of the quote
    /// and is included in the lexeme. A literal still open at end of
    /// input reports a diagnostic and emits no token; scanning resumes
    /// with whatever follows either way.
    fn string(&mut self) {
        // The body may not contain `"` or `\n`; skip straight to the
        // nearest delimiter.
        let rest = &self.bytes[self.current..];
        match memchr::memchr2(b'"', b'\n', rest) {
            None => {
                self.col += offset32(rest.len());
                self.current = self.bytes.len();
                self.diagnostics.push(Diagnostic::error(
                    self.start_line,
                    self.start_col,
                    "unterminated string",
                ));
            }
            Some(off) => {
                self.current += off;
                self.col += offset32(off);
                // Eat the closing `"`, or the newline standing in for it.
                if self.advance() == b'\n' {
                    self.line += 1;
                    self.col = 1;
                }
                self.add_token(TokenKind::Str);
            }
        }
    }

    /// Scan a numeric literal; the first digit is already consumed.
    ///
    /// A dot is absorbed only when the character after it is another
    /// digit: `3.14` is one float, `3.field` is an int followed by a
    /// dot left for the next dispatch cycle.
    fn number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.peek() == b'.' && self.peek_next().is_ascii_digit() {
            // Consume the '.'
            self.advance();
            while self.peek().is_ascii_digit() {
                self.advance();
            }
            self.add_token(TokenKind::Float);
        } else {
            self.add_token(TokenKind::Int);
        }
    }

    /// Scan an identifier or keyword; the first letter/underscore is
    /// already consumed. Classification happens after the full lexeme
    /// is known.
    fn identifier(&mut self) {
        while is_ident_continue(self.peek()) {
            self.advance();
        }

        let text = &self.source[self.start..self.current];
        let kind = keywords::lookup(text).unwrap_or(TokenKind::Ident);
        self.add_token(kind);
    }

    /// Skip a `//` comment to the end of the line. The newline itself
    /// is left for the dispatch loop so line accounting stays in one
    /// place. Comments produce no token.
    fn skip_line_comment(&mut self) {
        let rest = &self.bytes[self.current..];
        match memchr::memchr(b'\n', rest) {
            Some(off) => {
                self.current += off;
                self.col += offset32(off);
            }
            None => {
                self.current = self.bytes.len();
                self.col += offset32(rest.len());
            }
        }
    }

    /// Report an unexpected character, consuming it whole so scanning
    /// resumes at the next character. No token is emitted.
    fn unexpected_character(&mut self) {
        // advance() consumed one byte; for a multi-byte UTF-8 character
        // eat the continuation bytes too (they count as one column).
        let ch = self.source[self.start..]
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        self.current = self.start + ch.len_utf8();

        self.diagnostics.push(Diagnostic::error(
            self.start_line,
            self.start_col,
            format!("unexpected character `{}`", ch.escape_debug()),
        ));
    }

    // ─── Cursor primitives ──────────────────────────────────────────

    /// True iff every byte of the source has been consumed.
    #[inline]
    fn is_at_end(&self) -> bool {
        self.current >= self.bytes.len()
    }

    /// Consume and return the byte at `current`.
    ///
    /// Callers must guard with [`is_at_end`](Self::is_at_end).
    #[inline]
    fn advance(&mut self) -> u8 {
        let b = self.bytes[self.current];
        self.current += 1;
        self.col += 1;
        b
    }

    /// The byte at `current` without consuming it; NUL at end of input.
    #[inline]
    fn peek(&self) -> u8 {
        if self.is_at_end() {
            b'\0'
        } else {
            self.bytes[self.current]
        }
    }

    /// One byte of lookahead past `current`; NUL when out of range.
    #[inline]
    fn peek_next(&self) -> u8 {
        if self.current + 1 >= self.bytes.len() {
            b'\0'
        } else {
            self.bytes[self.current + 1]
        }
    }

    /// Consume the next byte iff it equals `expected`.
    ///
    /// The single primitive behind maximal munch: it only advances on
    /// success, so cascaded calls never need to back up.
    #[inline]
    fn match_byte(&mut self, expected: u8) -> bool {
        if self.is_at_end() || self.bytes[self.current] != expected {
            return false;
        }
        self.current += 1;
        self.col += 1;
        true
    }

    /// Append a token for `source[start..current]`, stamped with the
    /// position of its first character.
    fn add_token(&mut self, kind: TokenKind) {
        let span = Span::new(offset32(self.start), offset32(self.current));
        self.tokens.push(Token::new(
            kind,
            &self.source[self.start..self.current],
            self.start_line,
            self.start_col,
            span,
        ));
    }
}

/// Whether `b` may continue an identifier.
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Byte offset as u32, saturating for absurdly large inputs.
fn offset32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
