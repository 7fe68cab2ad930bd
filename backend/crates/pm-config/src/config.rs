use crate::{ConfigError, ConfigErrorResult, DatabaseConfig, LoggingConfig, TransferConfig};

use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::info;
use serde::Deserialize;

const CONFIG_DIR_VAR: &str = "PM_CONFIG_DIR";
const CONFIG_FILE: &str = "config.toml";
const DEFAULT_CONFIG_DIR: &str = ".pm";

/// Settings for the transfer engine and the store it works against.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub transfer: TransferConfig,
}

impl Config {
    /// Load from `{config_dir}/config.toml` (defaults when the file is absent),
    /// then apply `PM_*` environment overrides.
    ///
    /// The directory is created if missing. Call `validate()` afterwards.
    pub fn load() -> ConfigErrorResult<Self> {
        Self::load_from(&Self::config_dir()?)
    }

    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::io(config_dir, e))?;

        let file = config_dir.join(CONFIG_FILE);
        let mut config = match std::fs::read_to_string(&file) {
            Ok(contents) => {
                toml::from_str(&contents).map_err(|e| ConfigError::toml(file.clone(), e))?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Config::default(),
            Err(e) => return Err(ConfigError::io(file, e)),
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// `PM_CONFIG_DIR` if set, else `./.pm`.
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_VAR) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir().map_err(|e| ConfigError::io(".", e))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.database.validate()?;
        self.transfer.validate()
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(self.database.resolve(&Self::config_dir()?))
    }

    /// Root of the attachment file area.
    pub fn attachments_root(&self) -> ConfigErrorResult<PathBuf> {
        let dir = Path::new(&self.transfer.attachments_dir);
        if dir.is_absolute() {
            return Ok(dir.to_path_buf());
        }
        Ok(Self::config_dir()?.join(dir))
    }

    /// Log file path, relative to the config dir unless absolute. None = stdout.
    pub fn log_file(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(file) = self.logging.file.as_deref() else {
            return Ok(None);
        };
        let path = Path::new(file);
        if path.is_absolute() {
            return Ok(Some(path.to_path_buf()));
        }
        Ok(Some(Self::config_dir()?.join(path)))
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  database: {}", self.database.path);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  transfer: max_archive={} bytes, attachments={}, exported_by={}",
            self.transfer.max_archive_bytes,
            self.transfer.attachments_dir,
            self.transfer.exported_by
        );
    }

    fn apply_env_overrides(&mut self) {
        override_with("PM_DATABASE_PATH", &mut self.database.path);

        override_with("PM_LOG_LEVEL", &mut self.logging.level);
        if let Some(colored) = env_value("PM_LOG_COLORED") {
            self.logging.colored = matches!(colored.as_str(), "true" | "1");
        }
        if let Some(file) = env_value("PM_LOG_FILE") {
            self.logging.file = Some(file);
        }

        override_with(
            "PM_TRANSFER_MAX_ARCHIVE_BYTES",
            &mut self.transfer.max_archive_bytes,
        );
        override_with(
            "PM_TRANSFER_ATTACHMENTS_DIR",
            &mut self.transfer.attachments_dir,
        );
        override_with("PM_TRANSFER_EXPORTED_BY", &mut self.transfer.exported_by);
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Replace `target` with the parsed variable; unparseable values are ignored.
fn override_with<T: FromStr>(name: &str, target: &mut T) {
    if let Some(parsed) = env_value(name).and_then(|v| v.parse().ok()) {
        *target = parsed;
    }
}
