//! Parse error type.

use mc_diagnostic::{Diagnostic, ErrorCode};
use thiserror::Error;

/// A fatal parse failure: code, message, and 1-based source position.
///
/// The parser produces at most one of these per parse; whether it halts
/// the process is the caller's decision, not the library's.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
#[error("error[{code}]: {message} at {line}:{column}")]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub line: u32,
    pub column: u32,
}

impl ParseError {
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, line: u32, column: u32) -> Self {
        ParseError {
            code,
            message: message.into(),
            line,
            column,
        }
    }

    /// Convert into the renderable diagnostic form.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code, self.message.clone(), self.line, self.column)
    }
}
