use super::Cursor;

/// Consume a string literal, cursor on the opening quote.
///
/// Returns false without advancing past the offending character when the
/// literal hits an unescaped newline or end of input before closing; the
/// cursor then sits exactly where the caller should report the error.
pub(super) fn scan_string(cur: &mut Cursor<'_>) -> bool {
    cur.bump(); // opening quote
    let mut esc = false;
    while let Some(ch) = cur.peek() {
        if esc {
            esc = false;
            cur.bump();
            continue;
        }
        match ch {
            '\\' => {
                esc = true;
                cur.bump();
            }
            '"' => {
                cur.bump();
                return true;
            }
            '\n' | '\r' => return false,
            _ => cur.bump(),
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(s: &str) -> (bool, usize) {
        let mut cur = Cursor::new(s);
        let ok = scan_string(&mut cur);
        (ok, cur.pos())
    }

    #[test]
    fn closed_string_consumes_through_quote() {
        assert_eq!(scan(r#""abc" rest"#), (true, 5));
    }

    #[test]
    fn escaped_quote_does_not_terminate() {
        assert_eq!(scan(r#""a\"b""#), (true, 6));
    }

    #[test]
    fn raw_newline_fails_at_newline() {
        let (ok, pos) = scan("\"ab\ncd\"");
        assert!(!ok);
        assert_eq!(pos, 3);
    }

    #[test]
    fn open_at_eof_fails_at_end() {
        let (ok, pos) = scan("\"abc");
        assert!(!ok);
        assert_eq!(pos, 4);
    }

    #[test]
    fn multibyte_content_is_consumed() {
        let s = "\"héllo\"";
        assert_eq!(scan(s), (true, s.len()));
    }
}
