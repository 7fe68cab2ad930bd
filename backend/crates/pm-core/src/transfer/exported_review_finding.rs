use crate::{FindingSeverity, FindingStatus, ReviewFinding};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedReviewFinding {
    pub id: String,
    pub ticket_id: String,
    pub iteration: i64,
    pub agent: String,
    pub severity: FindingSeverity,
    pub category: String,
    pub description: String,
    pub location: Option<String>,
    pub suggested_fix: Option<String>,
    pub status: FindingStatus,
    pub created_at: i64,
    pub fixed_at: Option<i64>,
}

impl From<ReviewFinding> for ExportedReviewFinding {
    fn from(f: ReviewFinding) -> Self {
        Self {
            id: f.id.to_string(),
            ticket_id: f.ticket_id.to_string(),
            iteration: f.iteration,
            agent: f.agent,
            severity: f.severity,
            category: f.category,
            description: f.description,
            location: f.location,
            suggested_fix: f.suggested_fix,
            status: f.status,
            created_at: f.created_at.timestamp(),
            fixed_at: f.fixed_at.map(|dt| dt.timestamp()),
        }
    }
}
