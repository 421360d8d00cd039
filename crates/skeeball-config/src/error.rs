//! Errors raised while loading the agent configuration.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Configuration keys the agent cannot start without.
pub const REQUIRED_KEYS: [&str; 2] = ["project_id", "subscription_id"];

/// Failures encountered while reading or validating the configuration file.
///
/// Every variant is fatal: the agent logs it and exits before any transport
/// call is made.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("configuration file '{path}' not found")]
    FileNotFound {
        /// Path that was probed.
        path: Utf8PathBuf,
    },
    /// The configuration file exists but could not be read.
    #[error("failed to read configuration file '{path}': {source}")]
    Read {
        /// Path that failed to read.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The file contents are not a valid YAML mapping of settings.
    #[error("failed to parse configuration file '{path}': {source}")]
    Parse {
        /// Path holding the malformed document.
        path: Utf8PathBuf,
        /// Underlying YAML error.
        #[source]
        source: serde_saphyr::Error,
    },
    /// A required key is absent, null, or empty.
    #[error("required configuration key '{key}' is missing or empty")]
    MissingRequiredKey {
        /// Name of the missing key.
        key: &'static str,
    },
}
