use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoStep {
    pub order: u32,
    pub description: String,
    pub expected_outcome: Option<String>,
}

/// Verification script a human walks through before a ticket is closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoScript {
    pub id: Uuid,
    pub ticket_id: Uuid,
    pub steps: Vec<DemoStep>,
    pub generated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub feedback: Option<String>,
    pub passed: Option<bool>,
}
