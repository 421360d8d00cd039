//! Error types for subscription transport operations.

use std::fmt::Display;
use std::io;

use thiserror::Error;

use skeeball_config::SubscriptionPath;

/// Errors surfaced while opening or running a subscription.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The async runtime or receive thread could not be started.
    #[error("failed to start transport runtime: {source}")]
    Runtime {
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// Authentication or client construction failed.
    #[error("failed to connect to subscription {subscription}: {message}")]
    Connect {
        /// Fully-qualified subscription name.
        subscription: String,
        /// Client error description.
        message: String,
    },
    /// The receive loop ended with an error, for example because the
    /// subscription does not exist or access was denied.
    #[error("subscription {subscription} failed while receiving: {message}")]
    Receive {
        /// Fully-qualified subscription name.
        subscription: String,
        /// Service status description.
        message: String,
    },
    /// The receive thread panicked.
    #[error("subscription thread panicked")]
    ThreadPanic,
}

impl TransportError {
    pub(crate) fn connect(path: &SubscriptionPath, error: impl Display) -> Self {
        Self::Connect {
            subscription: path.to_string(),
            message: error.to_string(),
        }
    }

    pub(crate) fn receive(path: &SubscriptionPath, error: impl Display) -> Self {
        Self::Receive {
            subscription: path.to_string(),
            message: error.to_string(),
        }
    }
}
