//! Diagnostic system for the mc compiler.
//!
//! Every fatal front-end failure is surfaced as one structured value:
//! an error code for searchability, a human-readable message, and the
//! 1-based source position. There is no diagnostic batching -- the front
//! end fails fast on the first error -- so there is no queue or emitter
//! here, just the value and its rendering.

mod diagnostic;
mod error_code;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
