use crate::{FindingSeverity, FindingStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An issue raised by a review agent against a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewFinding {
    pub id: Uuid,
    pub ticket_id: Uuid,
    pub iteration: i64,
    pub agent: String,
    pub severity: FindingSeverity,
    pub category: String,
    pub description: String,
    pub location: Option<String>,
    pub suggested_fix: Option<String>,
    pub status: FindingStatus,
    pub created_at: DateTime<Utc>,
    pub fixed_at: Option<DateTime<Utc>>,
}
