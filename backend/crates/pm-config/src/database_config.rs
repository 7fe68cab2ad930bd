use crate::{ConfigError, ConfigErrorResult, DEFAULT_DATABASE_FILENAME};

use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

/// Location of the SQLite store the exporter reads and the importer writes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Store file, relative to the config directory
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATABASE_FILENAME.to_string(),
        }
    }
}

impl DatabaseConfig {
    /// The store must live inside the config directory.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let path = Path::new(&self.path);
        let escapes = path
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

        if self.path.trim().is_empty() || escapes {
            return Err(ConfigError::invalid(
                "database.path",
                format!("must be a relative path without '..', got '{}'", self.path),
            ));
        }
        Ok(())
    }

    pub fn resolve(&self, config_dir: &Path) -> PathBuf {
        config_dir.join(&self.path)
    }
}
