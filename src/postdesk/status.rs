//! The one-shot status line shown after a submission attempt.
//!
//! The channel holds at most one message. Publishing replaces whatever was
//! there, and the controller clears it when the next attempt starts.

use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

#[derive(Debug, Default)]
pub struct StatusChannel {
    current: Mutex<Option<StatusMessage>>,
}

impl StatusChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, message: StatusMessage) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(message);
    }

    pub fn clear(&self) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn current(&self) -> Option<StatusMessage> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
