//! Supervises agent launch sequencing and the blocking serve loop.

use std::sync::Arc;
use std::sync::mpsc;
use std::thread;

use tracing::{debug, info};

use skeeball_config::AgentArgs;

use crate::bootstrap::{ConfigLoader, FileConfigLoader, bootstrap_with};
use crate::dispatch::LoggingActions;
use crate::health::{HealthReporter, StructuredHealthReporter};
use crate::transport::{PubSubTransport, Subscription, Transport, TransportError};

use super::PROCESS_TARGET;
use super::errors::LaunchError;
use super::shutdown::{ShutdownError, ShutdownSignal, SystemShutdownSignal};

/// Collaborators required to launch the agent.
pub struct LaunchPlan<L, T, S> {
    /// Source of the agent configuration.
    pub loader: L,
    /// Subscription transport.
    pub transport: T,
    /// Listener deciding when to shut down.
    pub shutdown: S,
    /// Sink for lifecycle events.
    pub reporter: Arc<dyn HealthReporter>,
}

/// Why the serve loop stopped blocking.
enum StopReason {
    Signal(Result<(), ShutdownError>),
    SubscriptionEnded(Result<(), TransportError>),
}

/// Runs the agent using the production collaborators.
///
/// Blocks until SIGINT or SIGTERM is received (returning `Ok`) or a fatal
/// error occurs.
///
/// # Errors
///
/// Returns a [`LaunchError`] when signal handlers cannot be installed, the
/// configuration is missing or invalid, or the subscription fails.
pub fn run_agent(args: &AgentArgs) -> Result<(), LaunchError> {
    let reporter: Arc<dyn HealthReporter> = Arc::new(StructuredHealthReporter::new());
    let shutdown = match SystemShutdownSignal::install() {
        Ok(shutdown) => shutdown,
        Err(source) => {
            let error = LaunchError::from(source);
            reporter.launch_failed(&error);
            return Err(error);
        }
    };
    run_agent_with(LaunchPlan {
        loader: FileConfigLoader::new(args.config.clone()),
        transport: PubSubTransport::new(),
        shutdown,
        reporter,
    })
}

/// Runs the agent with injected collaborators.
///
/// # Errors
///
/// Returns a [`LaunchError`] when bootstrap fails, the transport cannot open
/// the subscription, or the subscription fails while running. Every error is
/// reported through [`HealthReporter::launch_failed`] before returning.
pub fn run_agent_with<L, T, S>(plan: LaunchPlan<L, T, S>) -> Result<(), LaunchError>
where
    L: ConfigLoader,
    T: Transport,
    S: ShutdownSignal,
{
    let reporter = Arc::clone(&plan.reporter);
    let result = serve(plan);
    match &result {
        Ok(()) => reporter.agent_stopped(),
        Err(error) => reporter.launch_failed(error),
    }
    result
}

fn serve<L, T, S>(plan: LaunchPlan<L, T, S>) -> Result<(), LaunchError>
where
    L: ConfigLoader,
    T: Transport,
    S: ShutdownSignal,
{
    let LaunchPlan {
        loader,
        transport,
        mut shutdown,
        reporter,
    } = plan;

    reporter.agent_starting();
    let agent = bootstrap_with(&loader, reporter.as_ref(), LoggingActions::new())?;
    let path = agent.config().subscription_path();

    let (stop_sender, stops) = mpsc::channel();
    let exit_sender = stop_sender.clone();
    let subscription = transport.subscribe(
        &path,
        agent.handler(),
        Box::new(move |status| {
            if exit_sender
                .send(StopReason::SubscriptionEnded(status))
                .is_err()
            {
                debug!(target: PROCESS_TARGET, "subscription ended after shutdown");
            }
        }),
    )?;
    reporter.subscription_opened(&path);

    thread::Builder::new()
        .name("skeeball-shutdown".to_owned())
        .spawn(move || {
            let waited = shutdown.wait();
            if stop_sender.send(StopReason::Signal(waited)).is_err() {
                debug!(target: PROCESS_TARGET, "shutdown signal arrived after exit");
            }
        })
        .map_err(|source| LaunchError::SignalThread { source })?;

    match stops.recv() {
        Ok(StopReason::Signal(waited)) => {
            waited?;
            reporter.shutdown_requested();
            subscription.shutdown();
            subscription.join()?;
            info!(target: PROCESS_TARGET, "shutdown sequence completed");
            Ok(())
        }
        Ok(StopReason::SubscriptionEnded(status)) => {
            status?;
            info!(
                target: PROCESS_TARGET,
                subscription = %path,
                "subscription ended without error"
            );
            Ok(())
        }
        Err(_) => Err(LaunchError::Disconnected),
    }
}
