//! Core diagnostic types for structured error reporting.
//!
//! A [`Diagnostic`] carries a severity, a 1-based source position, and a
//! message. Rendering via `Display` produces the console form the driver
//! writes to stderr: `[line L, col C] error: message`.

use std::fmt;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single reported problem, positioned by line and column.
///
/// Diagnostics never halt whatever produced them; they accumulate in the
/// producer's result and are rendered by the caller.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub severity: Severity,
    /// 1-based source line.
    pub line: u32,
    /// 1-based source column.
    pub col: u32,
    pub message: String,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(line: u32, col: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Error,
            line,
            col,
            message: message.into(),
        }
    }

    /// Create a warning diagnostic.
    pub fn warning(line: u32, col: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            line,
            col,
            message: message.into(),
        }
    }

    /// Whether this diagnostic is an error (as opposed to a warning).
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}, col {}] {}: {}",
            self.line, self.col, self.severity, self.message
        )
    }
}

/// Whether any diagnostic in the slice is an error.
pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(Diagnostic::is_error)
}
