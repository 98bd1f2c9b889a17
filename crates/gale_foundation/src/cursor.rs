//! Input cursor and lexical primitives.
//!
//! A [`Cursor`] is a position over an immutable input line. Copies are O(1)
//! and share the backing string, which is what makes backtracking cheap:
//! the dispatcher clones a cursor per candidate branch and simply discards
//! the clone when the branch fails.
//!
//! Every fallible read primitive either advances the cursor and succeeds,
//! or restores the position it had on entry and fails. Callers never roll
//! back by hand after a single call; composite reads like [`Cursor::read_number`]
//! roll back internally.

use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::marker::Marker;

/// A cheap-to-clone cursor over an immutable input string.
#[derive(Clone, Debug)]
pub struct Cursor {
    source: Arc<str>,
    pos: usize,
}

impl Cursor {
    /// Creates a cursor at the start of `input`.
    pub fn new(input: impl Into<Arc<str>>) -> Self {
        Self {
            source: input.into(),
            pos: 0,
        }
    }

    /// The full input line.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Shared handle to the backing string.
    #[must_use]
    pub fn source_arc(&self) -> Arc<str> {
        Arc::clone(&self.source)
    }

    /// Current byte position.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Moves the cursor to an absolute byte position.
    pub fn set_pos(&mut self, pos: usize) {
        debug_assert!(self.source.is_char_boundary(pos.min(self.source.len())));
        self.pos = pos.min(self.source.len());
    }

    /// Returns `true` if any input remains.
    #[must_use]
    pub fn has_remaining(&self) -> bool {
        self.pos < self.source.len()
    }

    /// Returns `true` if at least `n` characters remain.
    #[must_use]
    pub fn can_read(&self, n: usize) -> bool {
        self.source[self.pos..].chars().take(n).count() == n
    }

    /// The unconsumed remainder of the input.
    #[must_use]
    pub fn remaining(&self) -> &str {
        &self.source[self.pos..]
    }

    /// Peeks at the next character without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Peeks `offset` characters ahead of the current position.
    #[must_use]
    pub fn peek_at(&self, offset: usize) -> Option<char> {
        self.remaining().chars().nth(offset)
    }

    /// Consumes and returns the next character.
    pub fn next(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consumes `c` if it is next. Returns whether anything was consumed.
    pub fn skip_char(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.next();
            true
        } else {
            false
        }
    }

    /// Consumes whitespace until the next non-whitespace character.
    pub fn skip_space(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.next();
        }
    }

    /// Consumes `c` or fails with `message` at the current position.
    ///
    /// # Errors
    ///
    /// Fails without advancing when the next character is not `c`.
    pub fn expect(&mut self, c: char, message: &str) -> Result<()> {
        if self.skip_char(c) {
            Ok(())
        } else {
            Err(Error::custom(message).with_marker(self.marker_here()))
        }
    }

    /// Consumes characters while `pred` holds and returns them.
    pub fn read_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.next();
        }
        self.source[start..self.pos].to_string()
    }

    /// Reads up to (not including) `terminator`, or to end of input.
    ///
    /// When `escape` is given, an escape character followed by the
    /// terminator produces a literal terminator instead of stopping.
    pub fn read_until(&mut self, terminator: char, escape: Option<char>) -> String {
        let mut out = String::new();
        while let Some(c) = self.peek() {
            if Some(c) == escape && self.peek_at(1) == Some(terminator) {
                self.next();
                out.push(terminator);
                self.next();
                continue;
            }
            if c == terminator {
                break;
            }
            out.push(c);
            self.next();
        }
        out
    }

    /// Reads a single space-delimited word (possibly empty).
    pub fn read_word(&mut self) -> String {
        self.read_while(|c| c != ' ')
    }

    /// Returns the next space-delimited word without consuming it.
    #[must_use]
    pub fn peek_word(&self) -> &str {
        let rest = self.remaining();
        match rest.find(' ') {
            Some(i) => &rest[..i],
            None => rest,
        }
    }

    /// Reads either a double-quoted string (quotes consumed, `\"` escaped)
    /// or a plain word.
    pub fn read_quoted_or_word(&mut self) -> String {
        if self.skip_char('"') {
            let s = self.read_until('"', Some('\\'));
            self.skip_char('"');
            s
        } else {
            self.read_word()
        }
    }

    /// Consumes the rest of the input and returns it.
    pub fn read_rest(&mut self) -> String {
        let s = self.remaining().to_string();
        self.pos = self.source.len();
        s
    }

    /// Reads a number token and converts it to `f64`.
    ///
    /// The token grammar is an optional `-`, a digit run, and an optional
    /// `.` followed by another digit run; at least one digit must appear
    /// across both runs.
    ///
    /// # Errors
    ///
    /// Fails with an `expected a number` error (spanning from the start
    /// position) when no digit appears, or an `invalid number` error when
    /// conversion of the accumulated token fails. The cursor is restored on
    /// either failure.
    pub fn read_number(&mut self) -> Result<f64> {
        self.read_converted(str::parse::<f64>)
    }

    /// Reads a number token and converts it to `i64`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Cursor::read_number`]; a fractional token
    /// fails conversion here.
    pub fn read_integer(&mut self) -> Result<i64> {
        self.read_converted(str::parse::<i64>)
    }

    fn read_converted<T, E>(&mut self, convert: impl Fn(&str) -> std::result::Result<T, E>) -> Result<T> {
        let start = self.pos;
        let token = self.read_number_token(start)?;
        match convert(&token) {
            Ok(n) => Ok(n),
            Err(_) => {
                let marker = self.marker_since(start);
                self.pos = start;
                Err(Error::invalid_number(token, marker))
            }
        }
    }

    /// Consumes the raw number token, rolling back when it has no digits.
    fn read_number_token(&mut self, start: usize) -> Result<String> {
        let mut token = String::new();
        let mut has_digits = false;
        if self.skip_char('-') {
            token.push('-');
        }
        let whole = self.read_while(|c| c.is_ascii_digit());
        has_digits |= !whole.is_empty();
        token.push_str(&whole);
        if self.skip_char('.') {
            token.push('.');
            let frac = self.read_while(|c| c.is_ascii_digit());
            has_digits |= !frac.is_empty();
            token.push_str(&frac);
        }
        if has_digits {
            Ok(token)
        } else {
            let marker = self.marker_since(start);
            self.pos = start;
            Err(Error::expected_number(marker))
        }
    }

    /// A zero-width marker at the current position.
    #[must_use]
    pub fn marker_here(&self) -> Marker {
        Marker::new(Arc::clone(&self.source), self.pos, self.pos)
    }

    /// A marker spanning from `start` to the current position.
    #[must_use]
    pub fn marker_since(&self, start: usize) -> Marker {
        Marker::new(Arc::clone(&self.source), start, self.pos)
    }
}

impl fmt::Display for Cursor {
    /// Shows the input with a `|` at the current position, for debugging.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}",
            &self.source[..self.pos],
            &self.source[self.pos..]
        )
    }
}
