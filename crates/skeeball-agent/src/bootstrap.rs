//! Agent bootstrap orchestration.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;

use skeeball_config::{Config, ConfigError};

use crate::dispatch::{Actions, Dispatcher};
use crate::health::HealthReporter;
use crate::transport::MessageHandler;

/// Trait abstracting configuration loading for testability.
pub trait ConfigLoader: Send + Sync {
    /// Loads the agent configuration.
    fn load(&self) -> Result<Config, ConfigError>;
}

/// Loader that reads a YAML file through [`Config::load_from`].
#[derive(Debug, Clone)]
pub struct FileConfigLoader {
    path: Utf8PathBuf,
}

impl FileConfigLoader {
    /// Builds a loader for the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load(&self) -> Result<Config, ConfigError> {
        Config::load_from(&self.path)
    }
}

/// Loader that returns a configuration prepared in memory.
#[derive(Debug, Clone)]
pub struct StaticConfigLoader {
    config: Config,
}

impl StaticConfigLoader {
    /// Builds a loader that always yields `config`.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }
}

impl ConfigLoader for StaticConfigLoader {
    fn load(&self) -> Result<Config, ConfigError> {
        Ok(self.config.clone())
    }
}

/// Errors surfaced during bootstrap.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Configuration failed to load.
    #[error("failed to load configuration: {source}")]
    Configuration {
        /// Underlying loader error.
        #[source]
        source: ConfigError,
    },
}

/// Result of a successful bootstrap invocation.
#[derive(Debug)]
pub struct Agent<A> {
    config: Config,
    dispatcher: Arc<Dispatcher<A>>,
}

impl<A> Agent<A>
where
    A: Actions + 'static,
{
    /// Accessor for the resolved configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Shared dispatcher routing inbound messages.
    #[must_use]
    pub fn dispatcher(&self) -> Arc<Dispatcher<A>> {
        Arc::clone(&self.dispatcher)
    }

    /// The dispatcher as a transport message handler.
    #[must_use]
    pub fn handler(&self) -> Arc<dyn MessageHandler> {
        self.dispatcher()
    }
}

/// Bootstraps the agent using the supplied collaborators.
///
/// # Errors
///
/// Returns [`BootstrapError::Configuration`] when the loader fails; the
/// failure is reported to `reporter` before returning.
pub fn bootstrap_with<A>(
    loader: &dyn ConfigLoader,
    reporter: &dyn HealthReporter,
    actions: A,
) -> Result<Agent<A>, BootstrapError>
where
    A: Actions + 'static,
{
    let config = match loader.load() {
        Ok(config) => config,
        Err(source) => {
            let error = BootstrapError::Configuration { source };
            reporter.bootstrap_failed(&error);
            return Err(error);
        }
    };
    reporter.bootstrap_succeeded(&config);

    Ok(Agent {
        config,
        dispatcher: Arc::new(Dispatcher::new(actions)),
    })
}
