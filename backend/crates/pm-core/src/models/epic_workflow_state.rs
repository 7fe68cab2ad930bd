use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Progress bookkeeping, one row per epic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpicWorkflowState {
    pub epic_id: Uuid,
    pub tickets_total: i64,
    pub tickets_done: i64,
    pub learnings: Vec<String>,
    pub updated_at: DateTime<Utc>,
}
