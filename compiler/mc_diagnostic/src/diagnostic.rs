use std::fmt;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// A renderable diagnostic: severity, code, message, and 1-based position.
///
/// The front end produces at most one of these per parse (fail-fast);
/// the CLI or embedding host decides what to do with it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: ErrorCode,
    pub message: String,
    pub line: u32,
    pub column: u32,
}

impl Diagnostic {
    /// Create an error-severity diagnostic.
    pub fn error(code: ErrorCode, message: impl Into<String>, line: u32, column: u32) -> Self {
        Diagnostic {
            severity: Severity::Error,
            code,
            message: message.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}]: {} at {}:{}",
            self.severity, self.code, self.message, self.line, self.column
        )
    }
}
