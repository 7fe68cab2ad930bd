use crate::{Attachment, Subtask, TicketPriority, TicketStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: Uuid,

    // Hierarchy
    pub project_id: Uuid,
    pub epic_id: Option<Uuid>,
    pub position: i64,

    // Core fields
    pub title: String,
    pub description: Option<String>,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub tags: Vec<String>,
    pub subtasks: Vec<Subtask>,
    pub is_blocked: bool,
    pub blocked_reason: Option<String>,
    pub attachments: Vec<Attachment>,

    // Local VCS state, never transferred between stores
    pub linked_commits: Vec<String>,
    pub linked_files: Vec<String>,
    pub branch_name: Option<String>,
    pub pr_number: Option<i64>,
    pub pr_url: Option<String>,
    pub pr_status: Option<String>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Ticket {
    pub fn new(project_id: Uuid, epic_id: Option<Uuid>, title: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            project_id,
            epic_id,
            position: 0,
            title,
            description: None,
            status: TicketStatus::Backlog,
            priority: TicketPriority::Medium,
            tags: Vec::new(),
            subtasks: Vec::new(),
            is_blocked: false,
            blocked_reason: None,
            attachments: Vec::new(),
            linked_commits: Vec::new(),
            linked_files: Vec::new(),
            branch_name: None,
            pr_number: None,
            pr_url: None,
            pr_status: None,
            created_at: now,
            updated_at: now,
            completed_at: None,
        }
    }
}
