use pretty_assertions::assert_eq;

use super::*;

// ─── Scalar reference implementations ──────────────────────────
//
// Byte-at-a-time versions of each primitive with no lane logic at all.
// The lane path must agree with these on every input.

fn scalar_whitespace_span(buf: &[u8]) -> ScanResult {
    let mut i = 0u32;
    let mut newlines = 0u32;
    let mut tail = 0u32;
    for &b in buf {
        match b {
            b' ' | b'\t' | b'\r' => {
                i += 1;
                tail += 1;
            }
            b'\n' => {
                i += 1;
                newlines += 1;
                tail = 1;
            }
            _ => break,
        }
    }
    ScanResult {
        advance: i,
        newlines,
        tail_col: tail,
    }
}

fn scalar_find_past(buf: &[u8], delim: u8) -> u32 {
    let mut i = 0u32;
    for &b in buf {
        i += 1;
        if b == delim {
            return i;
        }
    }
    i
}

fn scalar_line_comment_span(buf: &[u8]) -> ScanResult {
    let mut i = 0u32;
    for &b in buf {
        if b == b'\n' {
            break;
        }
        i += 1;
    }
    ScanResult {
        advance: i,
        newlines: 0,
        tail_col: i,
    }
}

fn scalar_block_comment_span(buf: &[u8]) -> ScanResult {
    let mut i = 0usize;
    let mut newlines = 0u32;
    let mut tail = 0u32;
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
        advance: u32::try_from(i).unwrap_or(u32::MAX),
        newlines,
        tail_col: tail,
    }
}

fn scalar_string_literal_span(buf: &[u8], quote: u8) -> ScanResult {
    let mut i = 0usize;
    let mut newlines = 0u32;
    let mut tail = 0u32;
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
        advance: u32::try_from(i).unwrap_or(u32::MAX),
        newlines,
        tail_col: tail,
    }
}

// ─── Whitespace span ───────────────────────────────────────────

#[test]
fn whitespace_empty_input_is_zero() {
    assert_eq!(whitespace_span(b""), ScanResult::default());
}

#[test]
fn whitespace_stops_at_first_non_match() {
    let res = whitespace_span(b"   x   ");
    assert_eq!(res.advance, 3);
    assert_eq!(res.newlines, 0);
    assert_eq!(res.tail_col, 3);
}

#[test]
fn whitespace_counts_newlines_and_resume_column() {
    // "\n  " -- one newline, two spaces after it: next byte is column 3.
    let res = whitespace_span(b"\n  x");
    assert_eq!(res.advance, 3);
    assert_eq!(res.newlines, 1);
    assert_eq!(res.tail_col, 3);
}

#[test]
fn whitespace_span_ending_on_newline_resumes_at_column_one() {
    let res = whitespace_span(b"  \nx");
    assert_eq!(res.advance, 3);
    assert_eq!(res.newlines, 1);
    assert_eq!(res.tail_col, 1);
}

#[test]
fn whitespace_all_boundary_lengths_match_scalar() {
    // Lengths 0..=31 cross the 16-byte lane boundary both ways.
    for len in 0..=31usize {
        let all_ws = vec![b' '; len];
        assert_eq!(
            whitespace_span(&all_ws),
            scalar_whitespace_span(&all_ws),
            "all-whitespace input of length {len}"
        );
        // Non-match at every position.
        for stop in 0..len {
            let mut bytes = vec![b'\t'; len];
            bytes[stop] = b'x';
            assert_eq!(
                whitespace_span(&bytes),
                scalar_whitespace_span(&bytes),
                "stop byte at {stop} in length {len}"
            );
        }
    }
}

#[test]
fn whitespace_mixed_newlines_match_scalar() {
    let input = b" \t\r\n \n\t\t\n                    end";
    assert_eq!(whitespace_span(input), scalar_whitespace_span(input));
}

// ─── Delimiter search ──────────────────────────────────────────

#[test]
fn find_past_empty_is_zero() {
    assert_eq!(find_past(b"", b';'), 0);
}

#[test]
fn find_past_returns_offset_just_past_delimiter() {
    assert_eq!(find_past(b"abc;def", b';'), 4);
    assert_eq!(find_past(b";", b';'), 1);
}

#[test]
fn find_past_without_match_returns_full_length() {
    assert_eq!(find_past(b"abcdef", b';'), 6);
}

#[test]
fn find_past_all_boundary_lengths_match_scalar() {
    for len in 0..=31usize {
        let no_match = vec![b'a'; len];
        assert_eq!(find_past(&no_match, b';'), scalar_find_past(&no_match, b';'));
        for hit in 0..len {
            let mut bytes = vec![b'a'; len];
            bytes[hit] = b';';
            assert_eq!(
                find_past(&bytes, b';'),
                scalar_find_past(&bytes, b';'),
                "delimiter at {hit} in length {len}"
            );
        }
    }
}

// ─── Line comment span ─────────────────────────────────────────

#[test]
fn line_comment_stops_before_newline() {
    let res = line_comment_span(b" rest of line\nnext");
    assert_eq!(res.advance, 13);
    assert_eq!(res.newlines, 0);
    assert_eq!(res.tail_col, 13);
}

#[test]
fn line_comment_runs_to_end_without_newline() {
    let res = line_comment_span(b"no newline here");
    assert_eq!(res.advance, 15);
    assert_eq!(res.tail_col, 15);
}

#[test]
fn line_comment_all_boundary_lengths_match_scalar() {
    for len in 0..=31usize {
        let no_match = vec![b'-'; len];
        assert_eq!(line_comment_span(&no_match), scalar_line_comment_span(&no_match));
        for hit in 0..len {
            let mut bytes = vec![b'-'; len];
            bytes[hit] = b'\n';
            assert_eq!(
                line_comment_span(&bytes),
                scalar_line_comment_span(&bytes),
                "newline at {hit} in length {len}"
            );
        }
    }
}

// ─── Block comment span ────────────────────────────────────────

#[test]
fn block_comment_consumes_closing_marker() {
    let res = block_comment_span(b" body */after");
    assert_eq!(res.advance, 8);
    assert_eq!(res.newlines, 0);
    assert_eq!(res.tail_col, 8);
}

#[test]
fn block_comment_immediately_closed() {
    let res = block_comment_span(b"*/x");
    assert_eq!(res.advance, 2);
    assert_eq!(res.tail_col, 2);
}

#[test]
fn block_comment_tracks_newlines_and_tail_column() {
    // After the newline, `*` and `/` sit at columns 1 and 2; the byte
    // following the span is at column 3.
    let res = block_comment_span(b"line one\n*/x");
    assert_eq!(res.advance, 11);
    assert_eq!(res.newlines, 1);
    assert_eq!(res.tail_col, 3);
}

#[test]
fn block_comment_unterminated_runs_to_end() {
    let res = block_comment_span(b"never closed\nstill open");
    assert_eq!(res.advance, 23);
    assert_eq!(res.newlines, 1);
    assert_eq!(res.tail_col, 11);
}

#[test]
fn block_comment_lone_star_at_end() {
    let res = block_comment_span(b"body *");
    assert_eq!(res.advance, 6);
    assert_eq!(res.tail_col, 6);
}

#[test]
fn block_comment_star_slash_split_across_lane_boundary() {
    // `*` at offset 15, `/` at 16: the pair straddles the lane edge.
    let mut bytes = vec![b'a'; 15];
    bytes.push(b'*');
    bytes.push(b'/');
    bytes.push(b'x');
    let res = block_comment_span(&bytes);
    assert_eq!(res, scalar_block_comment_span(&bytes));
    assert_eq!(res.advance, 17);
}

#[test]
fn block_comment_all_boundary_lengths_match_scalar() {
    for len in 0..=31usize {
        let open = vec![b'a'; len];
        assert_eq!(block_comment_span(&open), scalar_block_comment_span(&open));
        for pos in 0..len.saturating_sub(1) {
            let mut bytes = vec![b'a'; len];
            bytes[pos] = b'*';
            bytes[pos + 1] = b'/';
            assert_eq!(
                block_comment_span(&bytes),
                scalar_block_comment_span(&bytes),
                "close marker at {pos} in length {len}"
            );
        }
    }
}

// ─── String literal span ───────────────────────────────────────

#[test]
fn string_consumes_closing_quote() {
    let res = string_literal_span(b"hello\"after", b'"');
    assert_eq!(res.advance, 6);
    assert_eq!(res.newlines, 0);
    assert_eq!(res.tail_col, 6);
}

#[test]
fn string_backslash_escapes_quote() {
    let res = string_literal_span(b"a\\\"b\"x", b'"');
    assert_eq!(res.advance, 5);
}

#[test]
fn string_backslash_escapes_backslash() {
    // Content `a\\` then the real closing quote.
    let res = string_literal_span(b"a\\\\\"x", b'"');
    assert_eq!(res.advance, 4);
}

#[test]
fn string_trailing_backslash_at_end_of_input() {
    let res = string_literal_span(b"abc\\", b'"');
    assert_eq!(res.advance, 4);
    assert_eq!(res, scalar_string_literal_span(b"abc\\", b'"'));
}

#[test]
fn string_unterminated_tracks_embedded_newlines() {
    let res = string_literal_span(b"line\nmore", b'"');
    assert_eq!(res.advance, 9);
    assert_eq!(res.newlines, 1);
    assert_eq!(res.tail_col, 4);
}

#[test]
fn string_empty_input_is_zero() {
    assert_eq!(string_literal_span(b"", b'"'), ScanResult::default());
}

#[test]
fn string_all_boundary_lengths_match_scalar() {
    for len in 0..=31usize {
        let open = vec![b'a'; len];
        assert_eq!(
            string_literal_span(&open, b'"'),
            scalar_string_literal_span(&open, b'"')
        );
        for pos in 0..len {
            let mut bytes = vec![b'a'; len];
            bytes[pos] = b'"';
            assert_eq!(
                string_literal_span(&bytes, b'"'),
                scalar_string_literal_span(&bytes, b'"'),
                "quote at {pos} in length {len}"
            );
        }
    }
}

// ─── Property tests: lane path == scalar path ──────────────────

mod proptests {
    use proptest::prelude::*;

    use super::*;

    /// Alphabet skewed toward the bytes the primitives care about, so
    /// random inputs actually exercise matches, escapes, and newlines.
    fn scan_bytes() -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(
            prop_oneof![
                Just(b' '),
                Just(b'\t'),
                Just(b'\r'),
                Just(b'\n'),
                Just(b'*'),
                Just(b'/'),
                Just(b'"'),
                Just(b'\\'),
                Just(b';'),
                any::<u8>(),
            ],
            0..256,
        )
    }

    proptest! {
        #[test]
        fn whitespace_matches_scalar(bytes in scan_bytes()) {
            prop_assert_eq!(whitespace_span(&bytes), scalar_whitespace_span(&bytes));
        }

        #[test]
        fn find_past_matches_scalar(bytes in scan_bytes(), delim in any::<u8>()) {
            prop_assert_eq!(find_past(&bytes, delim), scalar_find_past(&bytes, delim));
        }

        #[test]
        fn line_comment_matches_scalar(bytes in scan_bytes()) {
            prop_assert_eq!(line_comment_span(&bytes), scalar_line_comment_span(&bytes));
        }

        #[test]
        fn block_comment_matches_scalar(bytes in scan_bytes()) {
            prop_assert_eq!(block_comment_span(&bytes), scalar_block_comment_span(&bytes));
        }

        #[test]
        fn string_literal_matches_scalar(bytes in scan_bytes(), quote in any::<u8>()) {
            prop_assert_eq!(
                string_literal_span(&bytes, quote),
                scalar_string_literal_span(&bytes, quote)
            );
        }

        #[test]
        fn whitespace_prefix_heavy(prefix in 0usize..48, suffix in scan_bytes()) {
            let mut bytes = vec![b' '; prefix];
            bytes.extend_from_slice(&suffix);
            prop_assert_eq!(whitespace_span(&bytes), scalar_whitespace_span(&bytes));
        }
    }
}
