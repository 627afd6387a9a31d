//! Structural error locator: a single-pass scanner over a reduced JSON
//! grammar, used to pin down where a strict parse went wrong.
//!
//! The scanner is an explicit state machine with an explicit container
//! stack; nesting depth never grows the call stack. It is intentionally
//! independent of `serde_json` so its answer can be trusted even when the
//! strict parser's own message is vague.

mod number;
mod string;

use number::scan_number;
use string::scan_string;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    Object,
    Array,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Expect the start of a value.
    Value,
    /// Inside an object: expect a quoted key or `}`.
    KeyOrEnd,
    /// Expect `:` between a key and its value.
    Colon,
    /// Inside an array: expect a value or `]`.
    ValueOrEnd,
    /// After a complete value: expect `,`, the container's closer, or EOF.
    AfterValue,
}

pub(crate) struct Cursor<'a> {
    s: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(s: &'a str) -> Self {
        Self { s, pos: 0 }
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        self.s[self.pos..].chars().next()
    }

    #[inline]
    pub(crate) fn bump(&mut self) {
        if let Some(ch) = self.peek() {
            self.pos += ch.len_utf8();
        }
    }

    fn skip_ws(&mut self) {
        while let Some(ch) = self.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.bump();
        }
    }

    fn eat_keyword(&mut self, kw: &str) -> bool {
        if self.s[self.pos..].starts_with(kw) {
            self.pos += kw.len();
            true
        } else {
            false
        }
    }
}

/// Byte offset of the first character the reduced grammar cannot consume,
/// or `None` when no error position can be pinned down.
///
/// `None` covers two cases the caller must not conflate with offset 0:
/// the whole input was consumable as a single well-formed value, and
/// end-of-input was reached while a token was still expected (empty input
/// included). A string literal left open at end-of-input is different: it
/// reports the concrete offset where the scan stopped. Callers branch on
/// `Some` and fall back to a generic message on `None`.
pub fn find_error_pos(s: &str) -> Option<usize> {
    let mut cur = Cursor::new(s);
    let mut stack: Vec<Container> = Vec::new();
    let mut state = State::Value;
    loop {
        cur.skip_ws();
        match state {
            State::Value => {
                let ch = cur.peek()?;
                match ch {
                    '"' => {
                        if !scan_string(&mut cur) {
                            return Some(cur.pos());
                        }
                        state = State::AfterValue;
                    }
                    '{' => {
                        stack.push(Container::Object);
                        cur.bump();
                        state = State::KeyOrEnd;
                    }
                    '[' => {
                        stack.push(Container::Array);
                        cur.bump();
                        state = State::ValueOrEnd;
                    }
                    '-' | '0'..='9' => {
                        if !scan_number(&mut cur) {
                            return Some(cur.pos());
                        }
                        state = State::AfterValue;
                    }
                    _ => {
                        if cur.eat_keyword("true")
                            || cur.eat_keyword("false")
                            || cur.eat_keyword("null")
                        {
                            state = State::AfterValue;
                        } else {
                            return Some(cur.pos());
                        }
                    }
                }
            }
            State::KeyOrEnd => {
                let ch = cur.peek()?;
                match ch {
                    '}' => {
                        stack.pop();
                        cur.bump();
                        state = State::AfterValue;
                    }
                    '"' => {
                        if !scan_string(&mut cur) {
                            return Some(cur.pos());
                        }
                        state = State::Colon;
                    }
                    _ => return Some(cur.pos()),
                }
            }
            State::Colon => {
                let ch = cur.peek()?;
                if ch != ':' {
                    return Some(cur.pos());
                }
                cur.bump();
                state = State::Value;
            }
            State::ValueOrEnd => {
                let ch = cur.peek()?;
                if ch == ']' {
                    stack.pop();
                    cur.bump();
                    state = State::AfterValue;
                } else {
                    state = State::Value;
                }
            }
            State::AfterValue => match stack.last().copied() {
                None => {
                    // Trailing garbage after a complete root value is an
                    // error at its own offset; clean EOF is success.
                    return if cur.pos() < s.len() {
                        Some(cur.pos())
                    } else {
                        None
                    };
                }
                Some(Container::Array) => match cur.peek() {
                    Some(',') => {
                        cur.bump();
                        state = State::Value;
                    }
                    Some(']') => {
                        cur.bump();
                        stack.pop();
                    }
                    // EOF with the array still open reports the end offset.
                    _ => return Some(cur.pos()),
                },
                Some(Container::Object) => match cur.peek() {
                    Some(',') => {
                        cur.bump();
                        state = State::KeyOrEnd;
                    }
                    Some('}') => {
                        cur.bump();
                        stack.pop();
                    }
                    _ => return Some(cur.pos()),
                },
            },
        }
    }
}
