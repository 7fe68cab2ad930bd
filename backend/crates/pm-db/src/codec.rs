//! Conversions between domain values and SQLite column representations.
//!
//! Structured ticket fields (tags, subtasks, attachments, ...) are stored as JSON text
//! and only ever encoded or decoded here.

use crate::{DbError, Result as DbErrorResult};

use pm_core::CoreError;

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

#[track_caller]
pub(crate) fn encode_json<T: Serialize>(value: &T, column: &'static str) -> DbErrorResult<String> {
    serde_json::to_string(value).map_err(|e| DbError::decode(column, e.to_string()))
}

#[track_caller]
pub(crate) fn decode_json<T: DeserializeOwned>(
    text: &str,
    column: &'static str,
) -> DbErrorResult<T> {
    serde_json::from_str(text).map_err(|e| DbError::decode(column, e.to_string()))
}

#[track_caller]
pub(crate) fn decode_uuid(text: &str, column: &'static str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(text).map_err(|e| DbError::decode(column, format!("invalid UUID: {}", e)))
}

#[track_caller]
pub(crate) fn decode_opt_uuid(
    text: Option<String>,
    column: &'static str,
) -> DbErrorResult<Option<Uuid>> {
    text.map(|s| decode_uuid(&s, column)).transpose()
}

#[track_caller]
pub(crate) fn decode_timestamp(ts: i64, column: &'static str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
        .ok_or_else(|| DbError::decode(column, format!("invalid timestamp: {}", ts)))
}

#[track_caller]
pub(crate) fn decode_opt_timestamp(
    ts: Option<i64>,
    column: &'static str,
) -> DbErrorResult<Option<DateTime<Utc>>> {
    ts.map(|t| decode_timestamp(t, column)).transpose()
}

#[track_caller]
pub(crate) fn decode_enum<T>(text: &str, column: &'static str) -> DbErrorResult<T>
where
    T: FromStr<Err = CoreError>,
{
    T::from_str(text).map_err(|e| DbError::decode(column, e.to_string()))
}
