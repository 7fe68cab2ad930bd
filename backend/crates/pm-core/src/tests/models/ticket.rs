use crate::{Attachment, Ticket, TicketPriority, TicketStatus};

use uuid::Uuid;

#[test]
fn test_ticket_new_defaults() {
    let project_id = Uuid::new_v4();
    let ticket = Ticket::new(project_id, None, "Write docs".to_string());

    assert_eq!(ticket.project_id, project_id);
    assert_eq!(ticket.epic_id, None);
    assert_eq!(ticket.status, TicketStatus::Backlog);
    assert_eq!(ticket.priority, TicketPriority::Medium);
    assert!(ticket.tags.is_empty());
    assert!(!ticket.is_blocked);
    assert!(ticket.completed_at.is_none());
}

#[test]
fn test_attachment_relative_path() {
    assert_eq!(
        Attachment::relative_path("abc", "shot.png"),
        "attachments/abc/shot.png"
    );
}
