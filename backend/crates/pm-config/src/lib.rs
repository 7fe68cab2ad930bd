mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod transfer_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use transfer_config::TransferConfig;

const DEFAULT_DATABASE_FILENAME: &str = "data.db";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

// Transfer
const DEFAULT_MAX_ARCHIVE_BYTES: u64 = 100 * 1024 * 1024;
const MIN_MAX_ARCHIVE_BYTES: u64 = 1024;
const MAX_MAX_ARCHIVE_BYTES: u64 = 2 * 1024 * 1024 * 1024;
const DEFAULT_ATTACHMENTS_DIR: &str = "files";
const DEFAULT_EXPORTED_BY: &str = "unknown";
