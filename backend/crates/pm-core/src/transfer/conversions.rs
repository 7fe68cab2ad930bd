use crate::{CoreError, CoreResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;

#[track_caller]
pub fn parse_timestamp(ts: i64, field: &str) -> CoreResult<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0).ok_or_else(|| CoreError::Validation {
        message: format!("Invalid timestamp for {}: {}", field, ts),
        field: Some(field.into()),
        location: ErrorLocation::from(Location::caller()),
    })
}
