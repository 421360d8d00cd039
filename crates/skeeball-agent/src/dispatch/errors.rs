//! Per-message failures.
//!
//! These never terminate the agent: the dispatcher converts them into a
//! negative acknowledgement and the transport may redeliver the message.

use std::str::Utf8Error;

use thiserror::Error;

use super::command::Command;

/// Failure reported by an [`Actions`](super::Actions) implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{command} action failed: {message}")]
pub struct ActionError {
    /// Command whose action failed.
    pub command: Command,
    /// Human-readable description of the failure.
    pub message: String,
}

impl ActionError {
    /// Builds an action error for `command`.
    #[must_use]
    pub fn new(command: Command, message: impl Into<String>) -> Self {
        Self {
            command,
            message: message.into(),
        }
    }
}

/// Reasons a message could not be processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The payload is not valid UTF-8 text.
    #[error("payload of {len} bytes is not valid UTF-8: {source}")]
    Decode {
        /// Payload length in bytes.
        len: usize,
        /// Underlying decode error.
        #[source]
        source: Utf8Error,
    },
    /// The routed action reported a failure.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The routed action panicked.
    #[error("{command} action panicked: {message}")]
    Panicked {
        /// Command whose action panicked.
        command: Command,
        /// Panic payload rendered as text.
        message: String,
    },
}
