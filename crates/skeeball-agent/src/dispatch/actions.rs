use tracing::info;

use super::DISPATCH_TARGET;
use super::errors::ActionError;

/// Side effects triggered by recognised commands.
///
/// Implementations are invoked concurrently from transport worker tasks, so
/// they must not rely on exclusive access to shared state.
pub trait Actions: Send + Sync {
    /// Runs the side effect for [`Command::Start`](super::Command::Start).
    fn start(&self) -> Result<(), ActionError>;

    /// Runs the side effect for [`Command::Stop`](super::Command::Stop).
    fn stop(&self) -> Result<(), ActionError>;
}

/// Actions that only record the command in the agent log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingActions;

impl LoggingActions {
    /// Builds the logging action set.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Actions for LoggingActions {
    fn start(&self) -> Result<(), ActionError> {
        info!(target: DISPATCH_TARGET, action = "start", "starting skeeball session");
        Ok(())
    }

    fn stop(&self) -> Result<(), ActionError> {
        info!(target: DISPATCH_TARGET, action = "stop", "stopping skeeball session");
        Ok(())
    }
}
