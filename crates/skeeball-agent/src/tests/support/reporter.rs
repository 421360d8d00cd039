//! Test double for [`HealthReporter`] that records structured events for assertions.

use std::sync::Mutex;

use skeeball_config::{Config, SubscriptionPath};

use crate::bootstrap::BootstrapError;
use crate::health::HealthReporter;
use crate::process::LaunchError;

/// Structured lifecycle events tracked during scenarios.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HealthEvent {
    AgentStarting,
    BootstrapSucceeded,
    BootstrapFailed(String),
    SubscriptionOpened(String),
    ShutdownRequested,
    AgentStopped,
    LaunchFailed(String),
}

/// Records lifecycle events for assertions.
#[derive(Debug, Default)]
pub struct RecordingHealthReporter {
    events: Mutex<Vec<HealthEvent>>,
}

impl RecordingHealthReporter {
    /// Captures a copy of the recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<HealthEvent> {
        self.events
            .lock()
            .expect("health reporter mutex poisoned")
            .clone()
    }

    pub fn record(&self, event: HealthEvent) {
        self.events
            .lock()
            .expect("health reporter mutex poisoned")
            .push(event);
    }
}

impl HealthReporter for RecordingHealthReporter {
    fn agent_starting(&self) {
        self.record(HealthEvent::AgentStarting);
    }

    fn bootstrap_succeeded(&self, _config: &Config) {
        self.record(HealthEvent::BootstrapSucceeded);
    }

    fn bootstrap_failed(&self, error: &BootstrapError) {
        self.record(HealthEvent::BootstrapFailed(error.to_string()));
    }

    fn subscription_opened(&self, path: &SubscriptionPath) {
        self.record(HealthEvent::SubscriptionOpened(path.to_string()));
    }

    fn shutdown_requested(&self) {
        self.record(HealthEvent::ShutdownRequested);
    }

    fn agent_stopped(&self) {
        self.record(HealthEvent::AgentStopped);
    }

    fn launch_failed(&self, error: &LaunchError) {
        self.record(HealthEvent::LaunchFailed(error.to_string()));
    }
}
