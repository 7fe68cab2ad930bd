use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Progress bookkeeping, one row per ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketWorkflowState {
    pub ticket_id: Uuid,
    pub current_phase: String,
    pub review_iteration: i64,
    pub findings_count: i64,
    pub findings_fixed: i64,
    pub demo_generated: bool,
    pub updated_at: DateTime<Utc>,
}
