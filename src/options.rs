#[derive(Clone, Debug)]
pub struct ParseOptions {
    /// Map Unicode "smart" quotes to their ASCII forms during normalization
    /// (U+201C/U+201D to `"`, U+2018/U+2019 to `'`).
    pub normalize_quotes: bool,
    /// Second repair pass: strip `//` line comments and `/* */` block
    /// comments outside string literals before retrying the strict parse.
    pub strip_comments: bool,
    /// Third repair pass: drop commas whose next non-whitespace character
    /// is `}` or `]` before the final strict parse attempt.
    pub strip_trailing_commas: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            normalize_quotes: true,
            strip_comments: true,
            strip_trailing_commas: true,
        }
    }
}
