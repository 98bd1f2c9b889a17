//! Error types for parsing and execution.
//!
//! Uses `thiserror` for the kind taxonomy. Parse errors carry an optional
//! [`Marker`] once they escape the adapter layer; rendering appends an
//! `at: <context>` line pointing at the offending input.

use std::fmt;

use thiserror::Error;

use crate::marker::Marker;

/// A specialized `Result` type for Gale operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A parse or execution error, with an optional input span.
#[derive(Debug)]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Where in the input the error occurred, when known.
    pub marker: Option<Marker>,
}

impl Error {
    /// Creates a new error with the given kind and no span.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, marker: None }
    }

    /// Attaches a span to this error.
    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    /// Returns `true` if this error already carries a span.
    #[must_use]
    pub fn has_marker(&self) -> bool {
        self.marker.is_some()
    }

    /// Creates an "expected a number" error.
    #[must_use]
    pub fn expected_number(marker: Marker) -> Self {
        Self::new(ErrorKind::ExpectedNumber).with_marker(marker)
    }

    /// Creates an "invalid number" error for an out-of-range or malformed token.
    #[must_use]
    pub fn invalid_number(token: impl Into<String>, marker: Marker) -> Self {
        Self::new(ErrorKind::InvalidNumber {
            token: token.into(),
        })
        .with_marker(marker)
    }

    /// Creates an "expected literal" error.
    #[must_use]
    pub fn expected_literal(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::ExpectedLiteral { name: name.into() })
    }

    /// Creates an "expected argument" error for missing required input.
    #[must_use]
    pub fn expected_argument(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::ExpectedArgument { name: name.into() })
    }

    /// Creates an "expected a space to end argument" error.
    #[must_use]
    pub fn expected_separator(marker: Marker) -> Self {
        Self::new(ErrorKind::ExpectedSeparator).with_marker(marker)
    }

    /// Creates an "unknown argument" error.
    #[must_use]
    pub fn unknown_argument(marker: Marker) -> Self {
        Self::new(ErrorKind::UnknownArgument).with_marker(marker)
    }

    /// Creates an "invalid command" error.
    #[must_use]
    pub fn invalid_command(marker: Marker) -> Self {
        Self::new(ErrorKind::InvalidCommand).with_marker(marker)
    }

    /// Creates a validation error, attributed to the argument under parse.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation(message.into()))
    }

    /// Creates a free-form parse error, for adapters.
    #[must_use]
    pub fn custom(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Custom(message.into()))
    }

    /// Creates an internal error. Internal errors mark host-side misuse and
    /// are the only kind the engine re-raises out of a handler.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns `true` if this error indicates host-side misuse.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(self.kind, ErrorKind::Internal(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(marker) = &self.marker {
            write!(f, "\nat: {marker}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ErrorKind {
    /// The cursor expected a numeric token and found none.
    #[error("expected a number")]
    ExpectedNumber,

    /// A numeric token was read but could not be converted.
    #[error("invalid number {token}")]
    InvalidNumber {
        /// The token that failed to convert.
        token: String,
    },

    /// A literal node's keyword did not match the input.
    #[error("expected literal '{name}'")]
    ExpectedLiteral {
        /// The literal keyword.
        name: String,
    },

    /// A required argument had no input left to read.
    #[error("expected argument {name}")]
    ExpectedArgument {
        /// The argument name.
        name: String,
    },

    /// An argument did not end at a word boundary.
    #[error("expected a space to end argument")]
    ExpectedSeparator,

    /// Input remained but no candidate branch could consume it.
    #[error("unknown argument")]
    UnknownArgument,

    /// The matched path stopped at a node with no attached handler.
    #[error("invalid command")]
    InvalidCommand,

    /// An argument value failed validation.
    #[error("{0}")]
    Validation(String),

    /// A free-form adapter error.
    #[error("{0}")]
    Custom(String),

    /// Host-side misuse (e.g. a malformed handler binding). Fatal.
    #[error("internal error: {0}")]
    Internal(String),
}
