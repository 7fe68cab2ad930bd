mod codec;
pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{open, open_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use repositories::comment_repository::CommentRepository;
pub use repositories::demo_script_repository::DemoScriptRepository;
pub use repositories::epic_repository::EpicRepository;
pub use repositories::project_repository::ProjectRepository;
pub use repositories::review_finding_repository::ReviewFindingRepository;
pub use repositories::ticket_repository::TicketRepository;
pub use repositories::workflow_state_repository::WorkflowStateRepository;
