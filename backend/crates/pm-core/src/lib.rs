pub mod error;
pub mod models;
pub mod transfer;

#[cfg(test)]
mod tests;

pub use error::{CoreError, CoreResult};
pub use error_location::ErrorLocation;

pub use models::attachment::Attachment;
pub use models::comment::Comment;
pub use models::comment_type::CommentType;
pub use models::demo_script::{DemoScript, DemoStep};
pub use models::epic::Epic;
pub use models::epic_workflow_state::EpicWorkflowState;
pub use models::finding_severity::FindingSeverity;
pub use models::finding_status::FindingStatus;
pub use models::project::Project;
pub use models::review_finding::ReviewFinding;
pub use models::subtask::Subtask;
pub use models::ticket::Ticket;
pub use models::ticket_priority::TicketPriority;
pub use models::ticket_status::TicketStatus;
pub use models::ticket_workflow_state::TicketWorkflowState;

pub use transfer::attachment_file_descriptor::AttachmentFileDescriptor;
pub use transfer::conflict_resolution::ConflictResolution;
pub use transfer::conversions::parse_timestamp;
pub use transfer::export_kind::ExportKind;
pub use transfer::exported_comment::ExportedComment;
pub use transfer::exported_demo_script::ExportedDemoScript;
pub use transfer::exported_epic::ExportedEpic;
pub use transfer::exported_review_finding::ExportedReviewFinding;
pub use transfer::exported_ticket::ExportedTicket;
pub use transfer::exported_workflow_state::{
    ExportedEpicWorkflowState, ExportedTicketWorkflowState,
};
pub use transfer::import_options::ImportOptions;
pub use transfer::import_result::{IdRemap, ImportResult};
pub use transfer::manifest::{MANIFEST_VERSION, Manifest};
