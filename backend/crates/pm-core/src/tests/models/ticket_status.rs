use crate::{CommentType, FindingSeverity, FindingStatus, TicketPriority, TicketStatus};

use std::str::FromStr;

#[test]
fn test_ticket_status_as_str() {
    assert_eq!(TicketStatus::Backlog.as_str(), "backlog");
    assert_eq!(TicketStatus::InProgress.as_str(), "in_progress");
    assert_eq!(TicketStatus::Done.as_str(), "done");
}

#[test]
fn test_ticket_status_from_str() {
    assert_eq!(
        TicketStatus::from_str("review").unwrap(),
        TicketStatus::Review
    );
    assert_eq!(
        TicketStatus::from_str("in_progress").unwrap(),
        TicketStatus::InProgress
    );
    assert!(TicketStatus::from_str("in-progress").is_err());
}

#[test]
fn test_ticket_status_default_is_backlog() {
    assert_eq!(TicketStatus::default(), TicketStatus::Backlog);
}

#[test]
fn test_ticket_status_serde_matches_as_str() {
    let json = serde_json::to_string(&TicketStatus::InProgress).unwrap();
    assert_eq!(json, "\"in_progress\"");
}

#[test]
fn test_other_enums_reject_unknown_values() {
    assert!(TicketPriority::from_str("urgent").is_err());
    assert!(CommentType::from_str("note").is_err());
    assert!(FindingSeverity::from_str("blocker").is_err());
    assert!(FindingStatus::from_str("closed").is_err());

    assert_eq!(
        FindingStatus::from_str("wont_fix").unwrap(),
        FindingStatus::WontFix
    );
    assert_eq!(
        CommentType::from_str("work_summary").unwrap(),
        CommentType::WorkSummary
    );
}
