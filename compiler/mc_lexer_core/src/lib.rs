//! Batch byte-range classifiers for the mc lexer.
//!
//! Each primitive scans a byte slice in fixed 16-byte lanes and reports
//! how far to skip plus the line/column bookkeeping needed to resume
//! scalar scanning after the span. The lane path and a byte-at-a-time
//! reference implementation agree exactly on every input -- that
//! equivalence is the core correctness contract, property-tested in
//! `scan/tests.rs`.
//!
//! The primitives are pure functions of their input slice, never read
//! past it, and are therefore reentrant.

mod scan;

pub use scan::{
    block_comment_span, find_past, line_comment_span, string_literal_span, whitespace_span,
    ScanResult, LANE,
};
