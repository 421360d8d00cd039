use std::io;

use thiserror::Error;

use crate::bootstrap::BootstrapError;
use crate::transport::TransportError;

use super::shutdown::ShutdownError;

/// Fatal errors that terminate the agent.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Configuration could not be loaded.
    #[error("agent bootstrap failed: {source}")]
    Bootstrap {
        /// Underlying bootstrap error.
        #[source]
        source: BootstrapError,
    },
    /// Signal handlers could not be installed.
    #[error("failed to await shutdown signal: {source}")]
    Shutdown {
        /// Underlying shutdown error.
        #[source]
        source: ShutdownError,
    },
    /// The subscription could not be opened or failed while running.
    #[error("subscription transport failed: {source}")]
    Transport {
        /// Underlying transport error.
        #[source]
        source: TransportError,
    },
    /// The thread waiting for termination signals could not be spawned.
    #[error("failed to spawn shutdown listener: {source}")]
    SignalThread {
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// Both the subscription and the shutdown listener went away silently.
    #[error("lifecycle notifications stopped before shutdown")]
    Disconnected,
}

impl LaunchError {
    /// Process exit code reported for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        1
    }
}

impl From<BootstrapError> for LaunchError {
    fn from(source: BootstrapError) -> Self {
        Self::Bootstrap { source }
    }
}

impl From<ShutdownError> for LaunchError {
    fn from(source: ShutdownError) -> Self {
        Self::Shutdown { source }
    }
}

impl From<TransportError> for LaunchError {
    fn from(source: TransportError) -> Self {
        Self::Transport { source }
    }
}
