//! Shutdown listeners that do not depend on process signals.

use crate::process::{ShutdownError, ShutdownSignal};

/// Behaves as though a termination signal arrived immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImmediateShutdown;

impl ShutdownSignal for ImmediateShutdown {
    fn wait(&mut self) -> Result<(), ShutdownError> {
        Ok(())
    }
}
