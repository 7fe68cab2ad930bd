use crate::{ExportedTicket, Subtask, Ticket, TicketStatus};

use uuid::Uuid;

#[test]
fn test_projection_drops_local_vcs_fields() {
    let mut ticket = Ticket::new(Uuid::new_v4(), Some(Uuid::new_v4()), "Ship it".to_string());
    ticket.linked_commits = vec!["abc123".to_string()];
    ticket.linked_files = vec!["src/main.rs".to_string()];
    ticket.branch_name = Some("feature/ship-it".to_string());
    ticket.pr_number = Some(42);
    ticket.pr_url = Some("https://example.com/pr/42".to_string());
    ticket.pr_status = Some("open".to_string());

    let exported = ExportedTicket::from(ticket);
    let json = serde_json::to_value(&exported).unwrap();
    let object = json.as_object().unwrap();

    for field in [
        "linked_commits",
        "linked_files",
        "branch_name",
        "pr_number",
        "pr_url",
        "pr_status",
    ] {
        assert!(!object.contains_key(field), "{} leaked into export", field);
    }
}

#[test]
fn test_projection_keeps_structured_fields() {
    let epic_id = Uuid::new_v4();
    let mut ticket = Ticket::new(Uuid::new_v4(), Some(epic_id), "Ship it".to_string());
    ticket.status = TicketStatus::Done;
    ticket.tags = vec!["backend".to_string(), "p1".to_string()];
    ticket.subtasks = vec![Subtask {
        id: "s1".to_string(),
        text: "write test".to_string(),
        completed: true,
    }];
    let id = ticket.id;

    let exported = ExportedTicket::from(ticket);

    assert_eq!(exported.id, id.to_string());
    assert_eq!(exported.epic_id, Some(epic_id.to_string()));
    assert_eq!(exported.status, TicketStatus::Done);
    assert_eq!(exported.tags, vec!["backend", "p1"]);
    assert_eq!(exported.subtasks.len(), 1);
    assert!(exported.subtasks[0].completed);
}
