//! Test harness utilities shared by the agent behavioural suites.

mod config_files;
mod reporter;
mod shutdown;
mod transport;

pub use config_files::{
    COMPLETE_CONFIG, ConfigFiles, MALFORMED_CONFIG, MISSING_SUBSCRIPTION_CONFIG,
};
pub use reporter::{HealthEvent, RecordingHealthReporter};
pub use shutdown::ImmediateShutdown;
pub use transport::{FakeMessage, FakeTransport};
