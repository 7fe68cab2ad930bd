use crate::{Attachment, Subtask, Ticket, TicketPriority, TicketStatus};

use serde::{Deserialize, Serialize};

/// Portable projection of a ticket.
///
/// Linked commits, linked files, branch and pull request fields describe the
/// source machine's repository and have no counterpart here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedTicket {
    pub id: String,
    pub epic_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub position: i64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    #[serde(default)]
    pub is_blocked: bool,
    pub blocked_reason: Option<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    pub created_at: i64,
    pub updated_at: i64,
    pub completed_at: Option<i64>,
}

impl From<Ticket> for ExportedTicket {
    fn from(t: Ticket) -> Self {
        Self {
            id: t.id.to_string(),
            epic_id: t.epic_id.map(|id| id.to_string()),
            title: t.title,
            description: t.description,
            status: t.status,
            priority: t.priority,
            position: t.position,
            tags: t.tags,
            subtasks: t.subtasks,
            is_blocked: t.is_blocked,
            blocked_reason: t.blocked_reason,
            attachments: t.attachments,
            created_at: t.created_at.timestamp(),
            updated_at: t.updated_at.timestamp(),
            completed_at: t.completed_at.map(|dt| dt.timestamp()),
        }
    }
}
