use crate::ImportPhase;

use pm_core::CoreError;
use pm_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransferError {
    #[error("{entity} not found: {id} {location}")]
    NotFound {
        entity: &'static str,
        id: String,
        location: ErrorLocation,
    },

    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Archive exceeds size limit: {actual} bytes (max: {limit}) {location}")]
    SizeLimit {
        actual: u64,
        limit: u64,
        location: ErrorLocation,
    },

    #[error("Import failed in phase {} ({phase}): {source} {location}", .phase.number())]
    Failed {
        phase: ImportPhase,
        #[source]
        source: Box<TransferError>,
        location: ErrorLocation,
    },

    #[error("Database error: {source} {location}")]
    Database {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Serialization error: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl TransferError {
    #[track_caller]
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>, field: Option<&str>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Attribute a mid-transaction failure to the phase it happened in.
    /// Caller-facing errors pass through untouched.
    #[track_caller]
    pub fn in_phase(self, phase: ImportPhase) -> Self {
        match self {
            Self::NotFound { .. } | Self::Validation { .. } | Self::SizeLimit { .. } => self,
            Self::Failed { .. } => self,
            other => Self::Failed {
                phase,
                source: Box::new(other),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<DbError> for TransferError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Database {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for TransferError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Database {
            source: DbError::from(source),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for TransferError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for TransferError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match err {
            CoreError::Validation { message, field, .. } => Self::Validation {
                message,
                field,
                location,
            },
            CoreError::InvalidEnumValue { kind, value, .. } => Self::Validation {
                message: format!("Invalid {}: {}", kind, value),
                field: Some(kind.to_string()),
                location,
            },
            CoreError::Serialization { source, .. } => Self::Serialization { source, location },
        }
    }
}

pub type Result<T> = std::result::Result<T, TransferError>;
