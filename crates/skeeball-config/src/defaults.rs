//! Default values shared by the configuration model and the argument parser.

/// Relative path of the YAML configuration file read at startup.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Relative path of the append-only agent log.
pub const DEFAULT_LOG_FILE: &str = "skeeball_agent.log";

/// Default log filter expression.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Fallback for the optional `some_other_setting` key.
pub const DEFAULT_SOME_OTHER_SETTING: &str = "default_value";

/// Owned fallback for `some_other_setting`, used where allocation is required.
#[must_use]
pub fn default_some_other_setting() -> String {
    DEFAULT_SOME_OTHER_SETTING.to_owned()
}

