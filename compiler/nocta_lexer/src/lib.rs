//! Lexical front end for Nocta.
//!
//! [`scan`] converts raw source text into a flat, ordered token sequence
//! plus whatever diagnostics the pass produced:
//!
//! ```text
//! source text
//!     │
//!     ▼
//! Scanner ──► ScanResult { tokens (ends with Eof), diagnostics }
//! ```
//!
//! The scanner is single-pass and never aborts: lexical errors are
//! recorded as [`nocta_diagnostic::Diagnostic`] values and scanning
//! continues to the end of the buffer. Tokens borrow their lexemes from
//! the source string, so the source must outlive the result.

mod keywords;
mod scanner;
mod span;
mod token;

pub use scanner::{scan, ScanResult, Scanner};
pub use span::Span;
pub use token::{Token, TokenKind};
