//! Position spans for error reporting.

use std::fmt;
use std::sync::Arc;

/// How many characters of surrounding input a rendered marker shows.
const CONTEXT_CHARS: usize = 10;

/// A span over the original input line, used to point errors at the text
/// that caused them.
///
/// Markers share the backing string with the [`Cursor`](crate::Cursor) that
/// produced them, so they stay valid and cheap after the parse has moved on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Marker {
    source: Arc<str>,
    start: usize,
    end: usize,
}

impl Marker {
    /// Creates a marker over `start..end` of `source`.
    ///
    /// Byte positions outside the string or inside a character are clamped
    /// to the nearest boundary.
    #[must_use]
    pub fn new(source: Arc<str>, start: usize, end: usize) -> Self {
        let start = floor_boundary(&source, start.min(source.len()));
        let end = floor_boundary(&source, end.min(source.len())).max(start);
        Self { source, start, end }
    }

    /// The full input line this marker points into.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Start of the span, as a byte offset.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// End of the span, as a byte offset.
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    /// The marked substring. Empty markers point between characters.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.source[self.start..self.end]
    }
}

fn floor_boundary(s: &str, mut pos: usize) -> usize {
    while pos > 0 && !s.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

/// Finds the position `n` characters before/after `pos`, clamped to the string.
fn step_chars(s: &str, pos: usize, n: usize, forward: bool) -> usize {
    let mut p = pos;
    for _ in 0..n {
        if forward {
            match s[p..].chars().next() {
                Some(c) => p += c.len_utf8(),
                None => break,
            }
        } else {
            match s[..p].chars().next_back() {
                Some(c) => p -= c.len_utf8(),
                None => break,
            }
        }
    }
    p
}

impl fmt::Display for Marker {
    /// Renders the span with up to ten characters of context on either
    /// side, `...` where the input was truncated, and `[*]` for an empty
    /// span.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let before_start = step_chars(&self.source, self.start, CONTEXT_CHARS, false);
        let after_end = step_chars(&self.source, self.end, CONTEXT_CHARS, true);
        if before_start > 0 {
            write!(f, "...")?;
        }
        write!(f, "{}", &self.source[before_start..self.start])?;
        if self.start == self.end {
            write!(f, "[*]")?;
        } else {
            write!(f, "{}", self.text())?;
        }
        write!(f, "{}", &self.source[self.end..after_end])?;
        if after_end < self.source.len() {
            write!(f, "...")?;
        }
        Ok(())
    }
}
