//! Cursor tests.
//!
//! Reading primitives, the number grammar, and rollback on failure.

use gale_foundation::{Cursor, ErrorKind};

#[test]
fn read_word_and_remaining() {
    let mut cursor = Cursor::new("kick bob rude");
    assert_eq!(cursor.read_word(), "kick");
    assert!(cursor.skip_char(' '));
    assert_eq!(cursor.remaining(), "bob rude");
}

#[test]
fn number_consumes_whole_token() {
    let mut cursor = Cursor::new("12.5");
    assert_eq!(cursor.read_number().unwrap(), 12.5);
    assert!(!cursor.has_remaining());
}

#[test]
fn number_allows_bare_fraction() {
    let mut cursor = Cursor::new("-.5");
    assert_eq!(cursor.read_number().unwrap(), -0.5);
    assert!(!cursor.has_remaining());
}

#[test]
fn lone_dot_fails_spanning_one_char() {
    let mut cursor = Cursor::new(".");
    let err = cursor.read_number().unwrap_err();
    assert_eq!(err.kind, ErrorKind::ExpectedNumber);
    let marker = err.marker.expect("number errors carry a span");
    assert_eq!((marker.start(), marker.end()), (0, 1));
    // The cursor rolls back so an alternative branch can retry.
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn integer_rejects_fraction_and_rolls_back() {
    let mut cursor = Cursor::new("12.5 rest");
    let err = cursor.read_integer().unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::InvalidNumber {
            token: "12.5".into()
        }
    );
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn negative_integer() {
    let mut cursor = Cursor::new("-42");
    assert_eq!(cursor.read_integer().unwrap(), -42);
}

#[test]
fn skip_space_consumes_run() {
    let mut cursor = Cursor::new("   x");
    cursor.skip_space();
    assert_eq!(cursor.peek(), Some('x'));
}

#[test]
fn quoted_or_word_handles_both() {
    let mut cursor = Cursor::new("\"two words\" tail");
    assert_eq!(cursor.read_quoted_or_word(), "two words");

    let mut cursor = Cursor::new("bare tail");
    assert_eq!(cursor.read_quoted_or_word(), "bare");
}

#[test]
fn read_rest_takes_everything() {
    let mut cursor = Cursor::new("all of it");
    assert_eq!(cursor.read_rest(), "all of it");
    assert!(!cursor.has_remaining());
}
