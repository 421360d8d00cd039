//! Skeeball agent: a Pub/Sub driven command listener.
//!
//! The agent loads its configuration once, opens a single subscription on
//! Google Cloud Pub/Sub, and dispatches each inbound message to a handler
//! that recognises the `start` and `stop` commands. The lifecycle is:
//!
//! 1. install SIGINT/SIGTERM handlers and open the append-only log;
//! 2. load and validate the YAML configuration ([`bootstrap_with`]);
//! 3. subscribe with the [`Dispatcher`] as message handler;
//! 4. block until a termination signal (exit 0) or a transport failure
//!    (exit 1).
//!
//! Message handling never terminates the agent. Decoding and action failures
//! become negative acknowledgements, and unrecognised text is acknowledged so
//! it is not redelivered forever. See the [`dispatch`] module for the full
//! routing table.

mod bootstrap;
pub mod dispatch;
mod health;
mod process;
pub mod telemetry;
pub mod transport;

pub use bootstrap::{
    Agent, BootstrapError, ConfigLoader, FileConfigLoader, StaticConfigLoader, bootstrap_with,
};
pub use dispatch::{AckDecision, ActionResult, Dispatcher, Outcome};
pub use health::{HealthReporter, StructuredHealthReporter};
pub use process::{
    LaunchError, LaunchPlan, ShutdownError, ShutdownSignal, SystemShutdownSignal, run_agent,
    run_agent_with,
};
pub use telemetry::{TelemetryError, TelemetryHandle};

#[cfg(test)]
mod tests;
