use pm_core::{
    Attachment, Comment, DemoScript, DemoStep, Epic, EpicWorkflowState, FindingSeverity,
    FindingStatus, ReviewFinding, Subtask, Ticket, TicketWorkflowState,
};

use chrono::Utc;
use uuid::Uuid;

/// Creates a test Epic with sensible defaults
pub fn create_test_epic(project_id: Uuid, title: &str) -> Epic {
    let mut epic = Epic::new(project_id, title.to_string());
    epic.description = Some("Test epic description".to_string());
    epic.color = Some("#3b82f6".to_string());
    epic
}

/// Creates a test Ticket with structured fields populated
pub fn create_test_ticket(
    project_id: Uuid,
    epic_id: Option<Uuid>,
    title: &str,
    position: i64,
) -> Ticket {
    let mut ticket = Ticket::new(project_id, epic_id, title.to_string());
    ticket.position = position;
    ticket.description = Some("Test ticket description".to_string());
    ticket.tags = vec!["backend".to_string(), "urgent".to_string()];
    ticket.subtasks = vec![Subtask {
        id: "st-1".to_string(),
        text: "Write the code".to_string(),
        completed: false,
    }];
    ticket.attachments = vec![Attachment {
        id: "att-1".to_string(),
        filename: "notes.txt".to_string(),
        path: Attachment::relative_path(&ticket.id.to_string(), "notes.txt"),
        mime_type: Some("text/plain".to_string()),
        size: 5,
    }];
    ticket.linked_commits = vec!["deadbeef".to_string()];
    ticket.branch_name = Some("feature/test".to_string());
    ticket
}

/// Creates a test Comment with sensible defaults
pub fn create_test_comment(ticket_id: Uuid) -> Comment {
    Comment::new(ticket_id, "Test comment content".to_string(), "user".to_string())
}

/// Creates a test ReviewFinding with sensible defaults
pub fn create_test_finding(ticket_id: Uuid) -> ReviewFinding {
    ReviewFinding {
        id: Uuid::new_v4(),
        ticket_id,
        iteration: 1,
        agent: "code-reviewer".to_string(),
        severity: FindingSeverity::Major,
        category: "correctness".to_string(),
        description: "Off by one in loop bound".to_string(),
        location: Some("src/lib.rs:42".to_string()),
        suggested_fix: Some("Use ..= instead of ..".to_string()),
        status: FindingStatus::Open,
        created_at: Utc::now(),
        fixed_at: None,
    }
}

/// Creates a test DemoScript with two steps
pub fn create_test_demo_script(ticket_id: Uuid) -> DemoScript {
    DemoScript {
        id: Uuid::new_v4(),
        ticket_id,
        steps: vec![
            DemoStep {
                order: 1,
                description: "Open the board".to_string(),
                expected_outcome: Some("Board renders".to_string()),
            },
            DemoStep {
                order: 2,
                description: "Drag a ticket".to_string(),
                expected_outcome: None,
            },
        ],
        generated_at: Utc::now(),
        completed_at: None,
        feedback: None,
        passed: None,
    }
}

pub fn create_test_ticket_state(ticket_id: Uuid) -> TicketWorkflowState {
    TicketWorkflowState {
        ticket_id,
        current_phase: "implementation".to_string(),
        review_iteration: 1,
        findings_count: 2,
        findings_fixed: 1,
        demo_generated: false,
        updated_at: Utc::now(),
    }
}

pub fn create_test_epic_state(epic_id: Uuid) -> EpicWorkflowState {
    EpicWorkflowState {
        epic_id,
        tickets_total: 3,
        tickets_done: 1,
        learnings: vec!["Keep migrations small".to_string()],
        updated_at: Utc::now(),
    }
}
