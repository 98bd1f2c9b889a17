//! Handler outcomes and the uniform command result shape.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// What a command handler returns before normalization.
///
/// The engine folds every variant into a [`CommandResult`]: `Done` is a
/// bare success, `Flag` maps `true`/`false` to success/failure, `Payload`
/// is a success carrying a value, and `Full` passes through unchanged.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Nothing to report; the command succeeded.
    Done,
    /// Success or failure with no further detail.
    Flag(bool),
    /// Success carrying a payload value.
    Payload(Value),
    /// A fully formed result, passed through unchanged.
    Full(CommandResult),
}

impl From<()> for Outcome {
    fn from((): ()) -> Self {
        Self::Done
    }
}

impl From<bool> for Outcome {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

impl From<Value> for Outcome {
    fn from(v: Value) -> Self {
        Self::Payload(v)
    }
}

impl From<CommandResult> for Outcome {
    fn from(r: CommandResult) -> Self {
        Self::Full(r)
    }
}

/// The normalized result of running a command.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CommandResult {
    payload: Option<Value>,
    success: bool,
    message: String,
}

impl CommandResult {
    /// A successful result with no message.
    #[must_use]
    pub fn success() -> Self {
        Self {
            payload: None,
            success: true,
            message: String::new(),
        }
    }

    /// A successful result with a message.
    #[must_use]
    pub fn success_with(message: impl Into<String>) -> Self {
        Self {
            payload: None,
            success: true,
            message: message.into(),
        }
    }

    /// A failed result with no message.
    #[must_use]
    pub fn fail() -> Self {
        Self {
            payload: None,
            success: false,
            message: String::new(),
        }
    }

    /// A failed result with a message.
    #[must_use]
    pub fn fail_with(message: impl Into<String>) -> Self {
        Self {
            payload: None,
            success: false,
            message: message.into(),
        }
    }

    /// Attaches a payload value.
    #[must_use]
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Normalizes a handler outcome into a result.
    #[must_use]
    pub fn from_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Done => Self::success(),
            Outcome::Flag(true) => Self::success(),
            Outcome::Flag(false) => Self::fail(),
            Outcome::Payload(v) => Self::success().with_payload(v),
            Outcome::Full(r) => r,
        }
    }

    /// Whether the command succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// The attached message, possibly empty.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The attached payload, if any.
    #[must_use]
    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.success { "ok" } else { "failed" };
        write!(f, "{status}")?;
        if let Some(payload) = &self.payload {
            write!(f, " ({payload})")?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}
