pub mod comment_repository;
pub mod demo_script_repository;
pub mod epic_repository;
pub mod project_repository;
pub mod review_finding_repository;
pub mod ticket_repository;
pub mod workflow_state_repository;
