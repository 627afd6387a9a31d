use super::Cursor;

/// Consume a number matching `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`.
///
/// Explicit character-class checks instead of a regex keep this linear on
/// any input. On a grammar violation the cursor is left at the offending
/// character and false is returned.
pub(super) fn scan_number(cur: &mut Cursor<'_>) -> bool {
    if cur.peek() == Some('-') {
        cur.bump();
    }
    match cur.peek() {
        Some('0') => cur.bump(),
        Some('1'..='9') => {
            while matches!(cur.peek(), Some('0'..='9')) {
                cur.bump();
            }
        }
        _ => return false,
    }
    if cur.peek() == Some('.') {
        cur.bump();
        if !matches!(cur.peek(), Some('0'..='9')) {
            return false;
        }
        while matches!(cur.peek(), Some('0'..='9')) {
            cur.bump();
        }
    }
    if matches!(cur.peek(), Some('e' | 'E')) {
        cur.bump();
        if matches!(cur.peek(), Some('+' | '-')) {
            cur.bump();
        }
        if !matches!(cur.peek(), Some('0'..='9')) {
            return false;
        }
        while matches!(cur.peek(), Some('0'..='9')) {
            cur.bump();
        }
    }
    true
}
