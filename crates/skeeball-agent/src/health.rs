//! Structured health reporting for agent lifecycle events.

use std::sync::Arc;

use skeeball_config::{Config, SubscriptionPath};

use crate::bootstrap::BootstrapError;
use crate::process::LaunchError;

const HEALTH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::health");

/// Observer trait used to surface lifecycle events to telemetry sinks.
pub trait HealthReporter: Send + Sync {
    /// Invoked before configuration loading begins.
    fn agent_starting(&self);

    /// Invoked after the configuration loaded and validated.
    fn bootstrap_succeeded(&self, config: &Config);

    /// Invoked when the configuration could not be loaded.
    fn bootstrap_failed(&self, error: &BootstrapError);

    /// Invoked once the subscription is receiving messages.
    fn subscription_opened(&self, path: &SubscriptionPath);

    /// Invoked when a termination signal starts the shutdown sequence.
    fn shutdown_requested(&self);

    /// Invoked after a clean shutdown.
    fn agent_stopped(&self);

    /// Invoked when the agent terminates because of a fatal error.
    fn launch_failed(&self, error: &LaunchError);
}

impl<T> HealthReporter for Arc<T>
where
    T: HealthReporter + ?Sized,
{
    fn agent_starting(&self) {
        (**self).agent_starting();
    }

    fn bootstrap_succeeded(&self, config: &Config) {
        (**self).bootstrap_succeeded(config);
    }

    fn bootstrap_failed(&self, error: &BootstrapError) {
        (**self).bootstrap_failed(error);
    }

    fn subscription_opened(&self, path: &SubscriptionPath) {
        (**self).subscription_opened(path);
    }

    fn shutdown_requested(&self) {
        (**self).shutdown_requested();
    }

    fn agent_stopped(&self) {
        (**self).agent_stopped();
    }

    fn launch_failed(&self, error: &LaunchError) {
        (**self).launch_failed(error);
    }
}

/// Default reporter that records lifecycle events using `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuredHealthReporter;

impl StructuredHealthReporter {
    /// Builds a new reporter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl HealthReporter for StructuredHealthReporter {
    fn agent_starting(&self) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "agent_starting",
            "skeeball agent starting"
        );
    }

    fn bootstrap_succeeded(&self, config: &Config) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "bootstrap_succeeded",
            project_id = config.project_id(),
            subscription_id = config.subscription_id(),
            some_other_setting = config.some_other_setting(),
            "configuration loaded"
        );
    }

    fn bootstrap_failed(&self, error: &BootstrapError) {
        tracing::error!(
            target: HEALTH_TARGET,
            event = "bootstrap_failed",
            error = %error,
            "configuration could not be loaded"
        );
    }

    fn subscription_opened(&self, path: &SubscriptionPath) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "subscription_opened",
            subscription = %path,
            "listening on subscription"
        );
    }

    fn shutdown_requested(&self) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "shutdown_requested",
            "skeeball agent stopping"
        );
    }

    fn agent_stopped(&self) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "agent_stopped",
            "skeeball agent stopped"
        );
    }

    fn launch_failed(&self, error: &LaunchError) {
        tracing::error!(
            target: HEALTH_TARGET,
            event = "launch_failed",
            error = %error,
            exit_code = error.exit_code(),
            "skeeball agent terminated"
        );
    }
}
