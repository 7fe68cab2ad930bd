pub mod attachment_file_descriptor;
pub mod conflict_resolution;
pub mod conversions;
pub mod export_kind;
pub mod exported_comment;
pub mod exported_demo_script;
pub mod exported_epic;
pub mod exported_review_finding;
pub mod exported_ticket;
pub mod exported_workflow_state;
pub mod import_options;
pub mod import_result;
pub mod manifest;
