//! Configuration for the Skeeball agent.
//!
//! The agent reads a flat YAML mapping once at startup. Two keys are
//! mandatory (`project_id` and `subscription_id`); everything else either has
//! a documented default or is ignored. The resulting [`Config`] is immutable
//! and shared read-only with the message dispatcher.
//!
//! ```yaml
//! project_id: arcade-floor
//! subscription_id: skeeball-commands
//! some_other_setting: lane-7
//! ```

mod cli;
mod defaults;
mod error;
mod logging;
mod subscription;

use std::fs;
use std::io;

use camino::Utf8Path;
use serde::Deserialize;

pub use cli::AgentArgs;
pub use defaults::{
    DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILE, DEFAULT_LOG_FILTER, DEFAULT_SOME_OTHER_SETTING,
    default_some_other_setting,
};
pub use error::{ConfigError, REQUIRED_KEYS};
pub use logging::LogFormat;
pub use subscription::SubscriptionPath;

/// Validated agent configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    project_id: String,
    subscription_id: String,
    some_other_setting: String,
}

/// Document shape as written on disk; every key is optional until validated.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    project_id: Option<String>,
    subscription_id: Option<String>,
    some_other_setting: Option<String>,
}

impl Config {
    /// Builds a configuration from its required keys, defaulting the rest.
    #[must_use]
    pub fn new(project_id: impl Into<String>, subscription_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            subscription_id: subscription_id.into(),
            some_other_setting: default_some_other_setting(),
        }
    }

    /// Replaces the optional `some_other_setting` value.
    #[must_use]
    pub fn with_some_other_setting(mut self, value: impl Into<String>) -> Self {
        self.some_other_setting = value.into();
        self
    }

    /// Reads and validates the YAML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileNotFound`] when the file is absent,
    /// [`ConfigError::Read`] for other IO failures, and the errors documented
    /// on [`Config::from_yaml`] for invalid contents.
    pub fn load_from(path: &Utf8Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => ConfigError::Read {
                path: path.to_path_buf(),
                source,
            },
        })?;
        Self::from_yaml(&contents, path)
    }

    /// Parses and validates a YAML document; `origin` is used in error messages.
    ///
    /// A document with no content is treated as an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is not a mapping of
    /// string values and [`ConfigError::MissingRequiredKey`] when
    /// `project_id` or `subscription_id` is absent or empty.
    pub fn from_yaml(contents: &str, origin: &Utf8Path) -> Result<Self, ConfigError> {
        let raw = if is_blank_document(contents) {
            RawConfig::default()
        } else {
            serde_saphyr::from_str::<RawConfig>(contents).map_err(|source| {
                ConfigError::Parse {
                    path: origin.to_path_buf(),
                    source,
                }
            })?
        };
        Self::validate(raw)
    }

    fn validate(raw: RawConfig) -> Result<Self, ConfigError> {
        let [project_key, subscription_key] = REQUIRED_KEYS;
        let project_id = required(raw.project_id, project_key)?;
        let subscription_id = required(raw.subscription_id, subscription_key)?;
        Ok(Self {
            project_id,
            subscription_id,
            some_other_setting: raw
                .some_other_setting
                .unwrap_or_else(default_some_other_setting),
        })
    }

    /// Google Cloud project hosting the subscription.
    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Subscription identifier within the project.
    #[must_use]
    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    /// Free-form optional setting; `"default_value"` unless configured.
    #[must_use]
    pub fn some_other_setting(&self) -> &str {
        &self.some_other_setting
    }

    /// Fully-qualified subscription the agent listens on.
    #[must_use]
    pub fn subscription_path(&self) -> SubscriptionPath {
        SubscriptionPath::new(self.project_id.as_str(), self.subscription_id.as_str())
    }
}

fn required(value: Option<String>, key: &'static str) -> Result<String, ConfigError> {
    value
        .filter(|candidate| !candidate.is_empty())
        .ok_or(ConfigError::MissingRequiredKey { key })
}

fn is_blank_document(contents: &str) -> bool {
    contents.lines().all(|line| {
        let trimmed = line.trim();
        trimmed.is_empty() || trimmed.starts_with('#') || trimmed == "---"
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const ORIGIN: &str = "config.yaml";

    fn parse(contents: &str) -> Result<Config, ConfigError> {
        Config::from_yaml(contents, Utf8Path::new(ORIGIN))
    }

    #[rstest]
    fn optional_key_falls_back_to_default() {
        let config = parse("project_id: arcade\nsubscription_id: lanes\n")
            .expect("config should load");
        assert_eq!(config.some_other_setting(), "default_value");
    }

    #[rstest]
    fn unknown_keys_are_ignored() {
        let config = parse("project_id: arcade\nsubscription_id: lanes\nlane_count: \"12\"\n")
            .expect("extra keys should be tolerated");
        assert_eq!(config, Config::new("arcade", "lanes"));
    }

    #[rstest]
    #[case("subscription_id: lanes\n", "project_id")]
    #[case("project_id: arcade\n", "subscription_id")]
    #[case("project_id: \"\"\nsubscription_id: lanes\n", "project_id")]
    #[case("project_id: arcade\nsubscription_id: ~\n", "subscription_id")]
    fn missing_required_keys_are_reported(#[case] contents: &str, #[case] expected: &str) {
        let error = parse(contents).expect_err("incomplete config must fail");
        match error {
            ConfigError::MissingRequiredKey { key } => assert_eq!(key, expected),
            other => panic!("expected missing key error, got {other:?}"),
        }
    }

    #[rstest]
    #[case("")]
    #[case("# nothing configured yet\n")]
    fn blank_documents_report_the_first_missing_key(#[case] contents: &str) {
        let error = parse(contents).expect_err("blank config must fail");
        assert!(matches!(
            error,
            ConfigError::MissingRequiredKey { key: "project_id" }
        ));
    }

    #[rstest]
    fn malformed_yaml_is_a_parse_error() {
        let error = parse("project_id: [arcade\nsubscription_id: lanes\n")
            .expect_err("malformed config must fail");
        match error {
            ConfigError::Parse { path, .. } => assert_eq!(path, ORIGIN),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[rstest]
    fn subscription_path_is_derived_from_both_keys() {
        let config = Config::new("arcade", "lanes");
        assert_eq!(
            config.subscription_path().to_string(),
            "projects/arcade/subscriptions/lanes"
        );
    }
}
