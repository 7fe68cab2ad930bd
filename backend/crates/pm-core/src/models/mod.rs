pub mod attachment;
pub mod comment;
pub mod comment_type;
pub mod demo_script;
pub mod epic;
pub mod epic_workflow_state;
pub mod finding_severity;
pub mod finding_status;
pub mod project;
pub mod review_finding;
pub mod subtask;
pub mod ticket;
pub mod ticket_priority;
pub mod ticket_status;
pub mod ticket_workflow_state;
