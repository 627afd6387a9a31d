pub mod diff;
pub mod error;
pub mod options;
mod repair;
mod scan;
pub mod value;

pub use diff::{DiffMode, DiffOp, DiffOptions, DiffResult, diff};
pub use error::{ParseError, TextPosition};
pub use options::ParseOptions;
pub use repair::normalize;
pub use scan::find_error_pos;

/// Parse possibly-malformed JSON, applying escalating repair passes:
/// normalization (BOM, zero-width characters, smart quotes), comment
/// stripping, then trailing-comma removal, with a strict parse attempted
/// after each pass. The first success wins; if every pass fails, the
/// final attempt's error is returned.
pub fn parse_lenient(
    input: &str,
    opts: &ParseOptions,
) -> Result<serde_json::Value, ParseError> {
    repair::parse_lenient_impl(input, opts)
}

/// Strictly validate `input` after normalization. On failure the error
/// carries the located line/column when one could be pinned down; callers
/// must show a generic message otherwise, never a fabricated position.
pub fn validate(input: &str) -> Result<(), ParseError> {
    repair::validate_impl(input)
}

/// Normalize `input` and, if it fails a strict parse, locate the error.
/// `None` means either the input is valid or no confident position exists.
pub fn locate_error(input: &str) -> Option<TextPosition> {
    repair::locate_error_impl(input)
}

#[cfg(test)]
mod tests;
