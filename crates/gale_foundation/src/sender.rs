//! The sender capability.
//!
//! A sender is whoever issued a command: a chat user, a console, a test
//! harness. The engine only evaluates requirement predicates against it and
//! hands the reference to handlers; it never formats user-facing text
//! itself beyond error messages.

use std::any::Any;

/// Capabilities of a command issuer.
pub trait Sender: Send + Sync {
    /// Sends a plain informational message.
    fn send_message(&self, msg: &str);

    /// Reports a successful outcome.
    fn success(&self, msg: &str);

    /// Reports a failed outcome.
    fn fail(&self, msg: &str);

    /// Routes `msg` to [`Sender::success`] or [`Sender::fail`].
    fn send_feedback(&self, success: bool, msg: &str) {
        if success {
            self.success(msg);
        } else {
            self.fail(msg);
        }
    }

    /// The underlying host object, for downcasting in handlers.
    fn as_any(&self) -> &dyn Any;
}

/// A sender that writes to stdout/stderr.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSender;

impl Sender for ConsoleSender {
    fn send_message(&self, msg: &str) {
        println!("{msg}");
    }

    fn success(&self, msg: &str) {
        println!("{msg}");
    }

    fn fail(&self, msg: &str) {
        eprintln!("{msg}");
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
