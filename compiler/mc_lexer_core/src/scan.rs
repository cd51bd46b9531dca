//! Lane-at-a-time scan primitives.
//!
//! Within a lane, per-byte equality against each delimiter is OR-ed into
//! a 16-bit match mask; `trailing_zeros` finds the first hit. A lane with
//! no hit is skipped whole. Fewer than 16 remaining bytes fall back to a
//! byte-at-a-time loop with identical matching rules. The mask loop is
//! written so the optimizer can lower it to a single compare+movemask on
//! targets with 128-bit vectors; targets without them still get the exact
//! same observable results.

/// Width of one scan lane in bytes.
pub const LANE: usize = 16;

/// Mask value when all 16 lane bytes match.
const LANE_FULL: u32 = 0xFFFF;

/// Result of one batch scan.
///
/// `advance` is how many bytes the caller should skip. `newlines` is the
/// number of `\n` crossed inside the span. `tail_col` resumes column
/// bookkeeping: while no newline has been crossed it is the byte delta to
/// add to the current column; once `newlines > 0` it is the 1-based
/// column of the first byte after the span.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ScanResult {
    pub advance: u32,
    pub newlines: u32,
    pub tail_col: u32,
}

/// Per-byte equality mask for one lane: bit `i` is set when
/// `lane[i] == needle`.
#[inline]
fn lane_mask(lane: &[u8], needle: u8) -> u32 {
    debug_assert_eq!(lane.len(), LANE);
    let mut mask = 0u32;
    for (i, &b) in lane.iter().enumerate() {
        mask |= u32::from(b == needle) << i;
    }
    mask
}

#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Fold a finished span into a [`ScanResult`], deriving the newline count
/// and resume column from the span contents.
#[allow(
    clippy::cast_possible_truncation,
    reason = "span lengths fit in u32 for any realistic source buffer"
)]
fn summarize(buf: &[u8], advance: usize) -> ScanResult {
    let span = &buf[..advance];
    let newlines = memchr::memchr_iter(b'\n', span).count() as u32;
    let tail_col = match memchr::memrchr(b'\n', span) {
        // Byte right after the last newline sits at column 1.
        Some(last) => (advance - last) as u32,
        None => advance as u32,
    };
    ScanResult {
        advance: advance as u32,
        newlines,
        tail_col,
    }
}

/// Count the leading whitespace bytes (space, tab, CR, LF).
///
/// Stops at the first non-matching byte or end of input. The result
/// carries the newline count and resume column for the skipped span.
pub fn whitespace_span(buf: &[u8]) -> ScanResult {
    let mut i = 0;
    while i + LANE <= buf.len() {
        let lane = &buf[i..i + LANE];
        let ws = lane_mask(lane, b' ')
            | lane_mask(lane, b'\t')
            | lane_mask(lane, b'\r')
            | lane_mask(lane, b'\n');
        if ws == LANE_FULL {
            i += LANE;
        } else {
            i += (!ws).trailing_zeros() as usize;
            return summarize(buf, i);
        }
    }
    while i < buf.len() && is_whitespace(buf[i]) {
        i += 1;
    }
    summarize(buf, i)
}

/// Offset just past the first occurrence of `delim`, or the full length
/// if it never occurs. No line bookkeeping; `memchr` already does the
/// wide scan.
#[allow(
    clippy::cast_possible_truncation,
    reason = "span lengths fit in u32 for any realistic source buffer"
)]
pub fn find_past(buf: &[u8], delim: u8) -> u32 {
    match memchr::memchr(delim, buf) {
        Some(i) => (i + 1) as u32,
        None => buf.len() as u32,
    }
}

/// Span of a line comment body: offset of the first `\n` (not consumed)
/// or end of input. Never crosses a newline, so `newlines` is always 0
/// and `tail_col` equals `advance`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "span lengths fit in u32 for any realistic source buffer"
)]
pub fn line_comment_span(buf: &[u8]) -> ScanResult {
    let mut i = 0;
    while i + LANE <= buf.len() {
        let nl = lane_mask(&buf[i..i + LANE], b'\n');
        if nl == 0 {
            i += LANE;
        } else {
            i += nl.trailing_zeros() as usize;
            break;
        }
    }
    while i < buf.len() && buf[i] != b'\n' {
        i += 1;
    }
    ScanResult {
        advance: i as u32,
        newlines: 0,
        tail_col: i as u32,
    }
}

/// Span of a block comment body: offset just past the closing `*/`, or
/// end of input when unterminated. `buf` starts at the first byte after
/// the opening `/*`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "span lengths fit in u32 for any realistic source buffer"
)]
pub fn block_comment_span(buf: &[u8]) -> ScanResult {
    let mut i = 0;
    let mut newlines = 0u32;
    let mut tail = 0u32;

    // Lane prefix: fast-skip the run before the first `*` or `\n`. The
    // scalar loop below owns `*/` pairing and newline bookkeeping.
    while i + LANE <= buf.len() {
        let lane = &buf[i..i + LANE];
        let hits = lane_mask(lane, b'*') | lane_mask(lane, b'\n');
        if hits == 0 {
            i += LANE;
            tail += LANE as u32;
            continue;
        }
        let idx = hits.trailing_zeros() as usize;
        i += idx;
        tail += idx as u32;
        break;
    }

    while i < buf.len() {
        let b = buf[i];
        if b == b'*' && i + 1 < buf.len() && buf[i + 1] == b'/' {
            i += 2;
            tail += 2;
            break;
        }
        i += 1;
        if b == b'\n' {
            newlines += 1;
            tail = 1;
        } else {
            tail += 1;
        }
    }

    ScanResult {
        advance: i as u32,
        newlines,
        tail_col: tail,
    }
}

/// Span of a quoted literal: offset just past the matching closing
/// `quote`, or end of input when unterminated. `buf` starts at the first
/// content byte after the opening quote. A backslash escapes exactly the
/// one following byte, even if that byte is the quote or another
/// backslash. Embedded newlines are tracked like block comments.
#[allow(
    clippy::cast_possible_truncation,
    reason = "span lengths fit in u32 for any realistic source buffer"
)]
pub fn string_literal_span(buf: &[u8], quote: u8) -> ScanResult {
    let mut i = 0;
    let mut newlines = 0u32;
    let mut tail = 0u32;

    // Lane prefix: ordinary content up to the first quote, escape, or
    // newline is skipped in bulk.
    while i + LANE <= buf.len() {
        let lane = &buf[i..i + LANE];
        let hits = lane_mask(lane, quote) | lane_mask(lane, b'\\') | lane_mask(lane, b'\n');
        if hits == 0 {
            i += LANE;
            tail += LANE as u32;
            continue;
        }
        let idx = hits.trailing_zeros() as usize;
        i += idx;
        tail += idx as u32;
        break;
    }

    while i < buf.len() {
        let b = buf[i];
        i += 1;
        tail += 1;
        if b == quote {
            break;
        }
        if b == b'\\' {
            if i < buf.len() {
                i += 1;
                tail += 1;
            }
            continue;
        }
        if b == b'\n' {
            newlines += 1;
            tail = 1;
        }
    }

    ScanResult {
        advance: i as u32,
        newlines,
        tail_col: tail,
    }
}

#[cfg(test)]
mod tests;
