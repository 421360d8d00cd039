//! Command-line arguments for the agent binary.
//!
//! Logging settings live here rather than in the YAML file: the log must be
//! open before the configuration is read so that configuration failures are
//! recorded.

use camino::Utf8PathBuf;
use clap::Parser;

use crate::defaults::{DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILE, DEFAULT_LOG_FILTER};
use crate::logging::LogFormat;

/// Command-line interface for the Skeeball agent.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "skeeball-agent",
    about = "Listens on a Pub/Sub subscription for skeeball start/stop commands"
)]
pub struct AgentArgs {
    /// Path to the YAML configuration file.
    #[arg(long, env = "SKEEBALL_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: Utf8PathBuf,
    /// Append-only log file receiving agent events.
    #[arg(long, env = "SKEEBALL_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: Utf8PathBuf,
    /// Log filter expression (for example `info` or `skeeball_agent=debug`).
    #[arg(long, env = "SKEEBALL_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
    /// Log line format.
    #[arg(long, env = "SKEEBALL_LOG_FORMAT", default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl Default for AgentArgs {
    fn default() -> Self {
        Self {
            config: Utf8PathBuf::from(DEFAULT_CONFIG_PATH),
            log_file: Utf8PathBuf::from(DEFAULT_LOG_FILE),
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
            log_format: LogFormat::default(),
        }
    }
}
