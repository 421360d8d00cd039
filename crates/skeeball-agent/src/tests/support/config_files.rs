//! Temporary YAML configuration files for bootstrap scenarios.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

use crate::bootstrap::FileConfigLoader;

pub const COMPLETE_CONFIG: &str = "project_id: arcade-floor\nsubscription_id: skeeball-commands\n";
pub const MISSING_SUBSCRIPTION_CONFIG: &str = "project_id: arcade-floor\n";
pub const MALFORMED_CONFIG: &str = "project_id: {arcade-floor\nsubscription_id: skeeball\n";

/// Owns a temporary directory holding `config.yaml`.
pub struct ConfigFiles {
    _temp_dir: TempDir,
    path: Utf8PathBuf,
}

impl ConfigFiles {
    #[must_use]
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temporary config directory");
        let path = Utf8Path::from_path(temp_dir.path())
            .expect("temporary config directory was not valid UTF-8")
            .join("config.yaml");
        Self {
            _temp_dir: temp_dir,
            path,
        }
    }

    /// Writes `contents` to `config.yaml` and returns a loader for it.
    pub fn write(&self, contents: &str) -> FileConfigLoader {
        fs::write(&self.path, contents).expect("failed to write config.yaml");
        self.loader()
    }

    /// Loader pointing at `config.yaml`, whether or not it exists.
    #[must_use]
    pub fn loader(&self) -> FileConfigLoader {
        FileConfigLoader::new(self.path.clone())
    }
}
