//! Reserved keyword resolution.
//!
//! The scanner consumes a full identifier first and classifies after:
//! the finished lexeme is looked up here, and anything that is not an
//! exact, case-sensitive match stays an identifier.
//!
//! The lookup uses the identifier's length as a first-pass filter
//! (keywords range from 2 to 8 characters), then matches against the
//! keywords of that length.

use crate::token::TokenKind;

/// Look up a reserved keyword by text.
///
/// Returns the corresponding `TokenKind` if the text is a reserved
/// keyword, `None` if it is a regular identifier. Identifiers whose
/// length falls outside the 2-8 range are rejected without any string
/// comparison.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let len = text.len();

    // Guard: all keywords are 2-8 chars and start with a lowercase letter
    if !(2..=8).contains(&len) {
        return None;
    }
    if !text.as_bytes()[0].is_ascii_lowercase() {
        return None;
    }

    match len {
        2 => match text {
            "fn" => Some(TokenKind::Fn),
            "if" => Some(TokenKind::If),
            "in" => Some(TokenKind::In),
            _ => None,
        },
        3 => match text {
            "for" => Some(TokenKind::For),
            "let" => Some(TokenKind::Let),
            _ => None,
        },
        4 => match text {
            "else" => Some(TokenKind::Else),
            "enum" => Some(TokenKind::Enum),
            "null" => Some(TokenKind::Null),
            "true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match text {
            "break" => Some(TokenKind::Break),
            "false" => Some(TokenKind::False),
            "match" => Some(TokenKind::Match),
            "while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match text {
            "import" => Some(TokenKind::Import),
            "return" => Some(TokenKind::Return),
            "struct" => Some(TokenKind::Struct),
            _ => None,
        },
        8 => match text {
            "continue" => Some(TokenKind::Continue),
            _ => None,
        },
        _ => None,
    }
}
