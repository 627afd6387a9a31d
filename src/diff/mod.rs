//! Line- and word-level text diffing via dynamic-programming LCS.
//!
//! Normalization (case folding, whitespace handling) applies only to the
//! comparison keys; every emitted operation carries the raw text of the
//! side it came from, so a case-insensitive diff still displays the
//! original casing of each side.

mod lcs;
mod render;
mod token;

use serde::Serialize;

use token::tokenize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiffMode {
    /// Tokens are lines, split on `\n`.
    #[default]
    Line,
    /// Tokens are words; whitespace runs are tokens of their own unless
    /// `ignore_whitespace` drops them.
    Word,
}

#[derive(Debug, Clone, Default)]
pub struct DiffOptions {
    pub mode: DiffMode,
    /// Line mode: compare lines with whitespace runs collapsed.
    /// Word mode: drop whitespace tokens entirely.
    pub ignore_whitespace: bool,
    /// Compare tokens case-folded; displayed text keeps its casing.
    pub ignore_case: bool,
}

/// One step of the edit script. Serializes as the `{kind, left, right}`
/// record a tabular renderer consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DiffOp {
    Equal { left: String, right: String },
    Delete { left: String },
    Insert { right: String },
    Replace { left: String, right: String },
}

impl DiffOp {
    /// Raw left-side text; present for equal/delete/replace.
    pub fn left(&self) -> Option<&str> {
        match self {
            DiffOp::Equal { left, .. } | DiffOp::Delete { left } | DiffOp::Replace { left, .. } => {
                Some(left)
            }
            DiffOp::Insert { .. } => None,
        }
    }

    /// Raw right-side text; present for equal/insert/replace.
    pub fn right(&self) -> Option<&str> {
        match self {
            DiffOp::Equal { right, .. }
            | DiffOp::Insert { right }
            | DiffOp::Replace { right, .. } => Some(right),
            DiffOp::Delete { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffResult {
    pub ops: Vec<DiffOp>,
    /// Token count of side A, for the unified header.
    pub left_len: usize,
    /// Token count of side B.
    pub right_len: usize,
}

impl DiffResult {
    /// True when the edit script contains only `Equal` operations.
    pub fn is_identical(&self) -> bool {
        self.ops.iter().all(|op| matches!(op, DiffOp::Equal { .. }))
    }

    /// Simplified unified-diff rendering: one header line, then one line
    /// per operation (` `/`-`/`+`; replace renders as `-` then `+`).
    pub fn unified(&self) -> String {
        render::unified(self)
    }
}

/// Diff two texts. Never fails; pathological input sizes cost time and
/// memory (the LCS table is O(n·m)), not correctness.
pub fn diff(a: &str, b: &str, opts: &DiffOptions) -> DiffResult {
    let ta = tokenize(a, opts);
    let tb = tokenize(b, opts);
    let ops = lcs::merge_replacements(lcs::edit_script(&ta, &tb));
    DiffResult {
        left_len: ta.raw.len(),
        right_len: tb.raw.len(),
        ops,
    }
}
