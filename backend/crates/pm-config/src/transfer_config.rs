use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ATTACHMENTS_DIR, DEFAULT_EXPORTED_BY,
    DEFAULT_MAX_ARCHIVE_BYTES, MAX_MAX_ARCHIVE_BYTES, MIN_MAX_ARCHIVE_BYTES,
};

use serde::Deserialize;

/// Settings for epic/project export and import.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TransferConfig {
    /// Ceiling for manifest bytes plus attachment bytes of one export
    pub max_archive_bytes: u64,
    /// Root of the attachment file area. Relative paths resolve against the config dir.
    pub attachments_dir: String,
    /// Name recorded as the exporting user
    pub exported_by: String,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            max_archive_bytes: DEFAULT_MAX_ARCHIVE_BYTES,
            attachments_dir: String::from(DEFAULT_ATTACHMENTS_DIR),
            exported_by: String::from(DEFAULT_EXPORTED_BY),
        }
    }
}

impl TransferConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_archive_bytes < MIN_MAX_ARCHIVE_BYTES
            || self.max_archive_bytes > MAX_MAX_ARCHIVE_BYTES
        {
            return Err(ConfigError::invalid(
                "transfer.max_archive_bytes",
                format!(
                    "must be {}-{}, got {}",
                    MIN_MAX_ARCHIVE_BYTES, MAX_MAX_ARCHIVE_BYTES, self.max_archive_bytes
                ),
            ));
        }

        if self.attachments_dir.trim().is_empty() {
            return Err(ConfigError::invalid(
                "transfer.attachments_dir",
                "cannot be empty",
            ));
        }

        if self.exported_by.trim().is_empty() {
            return Err(ConfigError::invalid("transfer.exported_by", "cannot be empty"));
        }

        Ok(())
    }
}
