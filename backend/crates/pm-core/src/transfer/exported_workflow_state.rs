use crate::{EpicWorkflowState, TicketWorkflowState};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedTicketWorkflowState {
    pub ticket_id: String,
    pub current_phase: String,
    pub review_iteration: i64,
    pub findings_count: i64,
    pub findings_fixed: i64,
    pub demo_generated: bool,
}

impl From<TicketWorkflowState> for ExportedTicketWorkflowState {
    fn from(s: TicketWorkflowState) -> Self {
        Self {
            ticket_id: s.ticket_id.to_string(),
            current_phase: s.current_phase,
            review_iteration: s.review_iteration,
            findings_count: s.findings_count,
            findings_fixed: s.findings_fixed,
            demo_generated: s.demo_generated,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedEpicWorkflowState {
    pub epic_id: String,
    pub tickets_total: i64,
    pub tickets_done: i64,
    #[serde(default)]
    pub learnings: Vec<String>,
}

impl From<EpicWorkflowState> for ExportedEpicWorkflowState {
    fn from(s: EpicWorkflowState) -> Self {
        Self {
            epic_id: s.epic_id.to_string(),
            tickets_total: s.tickets_total,
            tickets_done: s.tickets_done,
            learnings: s.learnings,
        }
    }
}
