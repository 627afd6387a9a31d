//! Lenient JSON parsing: three escalating repair passes, each followed by
//! a strict `serde_json` parse, stopping at the first success.
//!
//! The passes exist only as repair attempts; their errors are discarded.
//! Only the final attempt's error reaches the caller, and diagnosing it is
//! the job of the structural locator in [`crate::scan`], not of this module.

use memchr::{memchr, memchr2};
use serde_json::Value;

use crate::error::{ParseError, TextPosition};
use crate::options::ParseOptions;
use crate::scan::find_error_pos;

/// Strip a leading BOM, drop zero-width characters (U+200B..U+200D and
/// U+FEFF) anywhere, map smart quotes to ASCII, and trim outer whitespace.
///
/// Applying this twice yields the same string as applying it once.
pub fn normalize(input: &str) -> String {
    normalize_with(input, true)
}

pub(crate) fn normalize_with(input: &str, smart_quotes: bool) -> String {
    let s = input.strip_prefix('\u{FEFF}').unwrap_or(input);
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\u{200B}'..='\u{200D}' | '\u{FEFF}' => {}
            '\u{201C}' | '\u{201D}' if smart_quotes => out.push('"'),
            '\u{2018}' | '\u{2019}' if smart_quotes => out.push('\''),
            _ => out.push(ch),
        }
    }
    out.trim().to_string()
}

/// Remove `//` line comments and `/* */` block comments outside string
/// literals. Runs in a single pass; a `//` inside a double-quoted string
/// (think `"http://example.com"`) is never touched.
///
/// Line comments keep their terminating newline so line numbers survive;
/// an unterminated block comment swallows the rest of the input.
pub(crate) fn strip_comments(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut i = 0usize;
    while i < bytes.len() {
        // Copy everything up to the next character that could open a
        // string or a comment; anything else passes through untouched.
        let Some(p) = memchr2(b'"', b'/', &bytes[i..]) else {
            out.push_str(&s[i..]);
            break;
        };
        out.push_str(&s[i..i + p]);
        i += p;
        if bytes[i] == b'"' {
            // String literal: copy verbatim, honoring backslash escapes.
            let start = i;
            i += 1;
            let mut esc = false;
            while i < bytes.len() {
                let b = bytes[i];
                i += 1;
                if esc {
                    esc = false;
                } else if b == b'\\' {
                    esc = true;
                } else if b == b'"' {
                    break;
                }
            }
            out.push_str(&s[start..i]);
            continue;
        }
        match bytes.get(i + 1) {
            Some(b'/') => {
                // Line comment: drop up to (but not including) the newline.
                match memchr(b'\n', &bytes[i + 2..]) {
                    Some(nl) => i += 2 + nl,
                    None => i = bytes.len(),
                }
            }
            Some(b'*') => {
                let mut j = i + 2;
                let mut closed = false;
                while let Some(star) = memchr(b'*', &bytes[j..]) {
                    let k = j + star;
                    if bytes.get(k + 1) == Some(&b'/') {
                        i = k + 2;
                        closed = true;
                        break;
                    }
                    j = k + 1;
                }
                if !closed {
                    i = bytes.len();
                }
            }
            _ => {
                // Lone slash, not a comment.
                out.push('/');
                i += 1;
            }
        }
    }
    out
}

/// Drop any comma whose next non-whitespace character is `}` or `]`.
///
/// Deliberately string-unaware, matching the original regex
/// `,(?=\s*[}\]])` replacement; this pass only ever runs as a last
/// resort after the stricter attempts have failed.
pub(crate) fn strip_trailing_commas(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut i = 0usize;
    while i < bytes.len() {
        let Some(p) = memchr(b',', &bytes[i..]) else {
            out.push_str(&s[i..]);
            break;
        };
        let c = i + p;
        out.push_str(&s[i..c]);
        let next = s[c + 1..].trim_start().as_bytes().first().copied();
        if !matches!(next, Some(b'}') | Some(b']')) {
            out.push(',');
        }
        i = c + 1;
    }
    out
}

pub(crate) fn parse_lenient_impl(input: &str, opts: &ParseOptions) -> Result<Value, ParseError> {
    // Pass 1: normalize, then strict parse.
    let normalized = normalize_with(input, opts.normalize_quotes);
    if let Ok(v) = serde_json::from_str(&normalized) {
        return Ok(v);
    }

    // Pass 2: strip comments, retry.
    let decommented = if opts.strip_comments {
        let t = strip_comments(&normalized);
        if let Ok(v) = serde_json::from_str(&t) {
            return Ok(v);
        }
        t
    } else {
        normalized
    };

    // Pass 3: drop trailing commas; this attempt's error propagates.
    let finalized = if opts.strip_trailing_commas {
        strip_trailing_commas(&decommented)
    } else {
        decommented
    };
    serde_json::from_str(&finalized).map_err(|source| ParseError::Unrepairable { source })
}

pub(crate) fn validate_impl(input: &str) -> Result<(), ParseError> {
    let s = normalize(input);
    match serde_json::from_str::<serde::de::IgnoredAny>(&s) {
        Ok(_) => Ok(()),
        Err(source) => match position_of_error(&s, &source) {
            Some(position) => Err(ParseError::SyntaxAt { position, source }),
            None => Err(ParseError::Syntax { source }),
        },
    }
}

pub(crate) fn locate_error_impl(input: &str) -> Option<TextPosition> {
    let s = normalize(input);
    match serde_json::from_str::<serde::de::IgnoredAny>(&s) {
        Ok(_) => None,
        Err(e) => position_of_error(&s, &e),
    }
}

/// Pin a strict-parse failure to a position in `s`.
///
/// The structural scanner is the precise source; the line/column carried
/// by the `serde_json` error is only a fallback for failures the scanner
/// cannot reproduce (for example trailing garbage after a valid value is
/// reported by the scanner, but a duplicate-key error is not).
fn position_of_error(s: &str, err: &serde_json::Error) -> Option<TextPosition> {
    if let Some(offset) = find_error_pos(s) {
        return Some(TextPosition::from_offset(s, offset));
    }
    if err.line() == 0 || err.column() == 0 {
        return None;
    }
    Some(position_from_line_col(s, err.line(), err.column()))
}

fn position_from_line_col(s: &str, line: usize, column: usize) -> TextPosition {
    let mut start = 0usize;
    for _ in 1..line {
        match memchr(b'\n', &s.as_bytes()[start..]) {
            Some(p) => start += p + 1,
            None => break,
        }
    }
    let offset = (start + column.saturating_sub(1)).min(s.len());
    TextPosition::from_offset(s, offset)
}
