use memchr::memrchr_iter;
use serde::Serialize;
use thiserror::Error;

/// A position inside the (normalized) input text.
///
/// `offset` is a zero-based byte offset; `line` and `column` are 1-based,
/// with column counted in characters since the last newline. This is the
/// shape an editing surface consumes to move its cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextPosition {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl TextPosition {
    /// Derive line/column from a byte offset into `s`.
    ///
    /// Offsets past the end of `s` are clamped to the end, matching the
    /// behavior of counting "up to pos or end, whichever comes first".
    pub fn from_offset(s: &str, offset: usize) -> Self {
        let offset = clamp_to_char_boundary(s, offset);
        let bytes = &s.as_bytes()[..offset];
        let line = memchr::memchr_iter(b'\n', bytes).count() + 1;
        let line_start = memrchr_iter(b'\n', bytes).next().map_or(0, |i| i + 1);
        let column = s[line_start..offset].chars().count() + 1;
        Self {
            offset,
            line,
            column,
        }
    }
}

fn clamp_to_char_boundary(s: &str, mut offset: usize) -> usize {
    if offset >= s.len() {
        return s.len();
    }
    while !s.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Failure surface of the lenient parser and the strict validator.
///
/// The UI layer owns presentation: it branches on `position()` and must
/// fall back to a generic message when no position is available rather
/// than fabricating position 0.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Every repair pass failed; `source` is the strict parse error from
    /// the final (trailing-comma-stripped) attempt.
    #[error("invalid JSON after repair: {source}")]
    Unrepairable {
        #[source]
        source: serde_json::Error,
    },
    /// Strict validation failed and the error was pinned to a position.
    #[error("invalid JSON at line {}, column {}", .position.line, .position.column)]
    SyntaxAt {
        position: TextPosition,
        #[source]
        source: serde_json::Error,
    },
    /// Strict validation failed but no confident position was found.
    #[error("invalid JSON")]
    Syntax {
        #[source]
        source: serde_json::Error,
    },
}

impl ParseError {
    /// The located error position, when one was pinned down.
    pub fn position(&self) -> Option<TextPosition> {
        match self {
            ParseError::SyntaxAt { position, .. } => Some(*position),
            ParseError::Unrepairable { .. } | ParseError::Syntax { .. } => None,
        }
    }
}
