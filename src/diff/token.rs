use std::borrow::Cow;

use super::{DiffMode, DiffOptions};

/// Parallel raw/comparison sequences for one side of a diff.
///
/// `raw` is what gets displayed, `key` is what gets compared; the two are
/// index-aligned and always the same length.
pub(super) struct TokenSeq<'a> {
    pub raw: Vec<&'a str>,
    pub key: Vec<Cow<'a, str>>,
}

pub(super) fn tokenize<'a>(text: &'a str, opts: &DiffOptions) -> TokenSeq<'a> {
    let raw: Vec<&str> = match opts.mode {
        DiffMode::Line => text.split('\n').collect(),
        DiffMode::Word => split_words(text, opts.ignore_whitespace),
    };
    let key = raw.iter().map(|t| comparison_key(t, opts)).collect();
    TokenSeq { raw, key }
}

/// Split into alternating non-whitespace and whitespace-run tokens, the
/// latter dropped when `ignore_ws` is set.
fn split_words(text: &str, ignore_ws: bool) -> Vec<&str> {
    let mut out = Vec::new();
    let mut rest = text;
    while let Some(first) = rest.chars().next() {
        let in_ws = first.is_whitespace();
        let end = rest
            .char_indices()
            .find(|(_, c)| c.is_whitespace() != in_ws)
            .map_or(rest.len(), |(i, _)| i);
        if !(in_ws && ignore_ws) {
            out.push(&rest[..end]);
        }
        rest = &rest[end..];
    }
    out
}

fn comparison_key<'a>(tok: &'a str, opts: &DiffOptions) -> Cow<'a, str> {
    let mut key = Cow::Borrowed(tok);
    if opts.mode == DiffMode::Line && opts.ignore_whitespace {
        let collapsed = collapse_whitespace(&key);
        if collapsed != key {
            key = Cow::Owned(collapsed);
        }
    }
    if opts.ignore_case && key.chars().any(char::is_uppercase) {
        key = Cow::Owned(key.to_lowercase());
    }
    key
}

/// Trim and collapse interior whitespace runs to a single space.
fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, word) in s.split_whitespace().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
