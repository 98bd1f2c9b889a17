//! Shared test fixtures for the end-to-end suite.

use std::any::Any;
use std::sync::Mutex;

use gale::foundation::Sender;

/// A sender that records everything routed to it.
#[derive(Default)]
pub struct RecordingSender {
    feedback: Mutex<Vec<(bool, String)>>,
}

impl RecordingSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent feedback line, as (success, message).
    pub fn last(&self) -> Option<(bool, String)> {
        self.feedback.lock().unwrap().last().cloned()
    }
}

impl Sender for RecordingSender {
    fn send_message(&self, msg: &str) {
        self.feedback.lock().unwrap().push((true, msg.to_owned()));
    }

    fn success(&self, msg: &str) {
        self.feedback.lock().unwrap().push((true, msg.to_owned()));
    }

    fn fail(&self, msg: &str) {
        self.feedback.lock().unwrap().push((false, msg.to_owned()));
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
