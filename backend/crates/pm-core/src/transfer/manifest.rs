use crate::transfer::attachment_file_descriptor::AttachmentFileDescriptor;
use crate::transfer::export_kind::ExportKind;
use crate::transfer::exported_comment::ExportedComment;
use crate::transfer::exported_demo_script::ExportedDemoScript;
use crate::transfer::exported_epic::ExportedEpic;
use crate::transfer::exported_review_finding::ExportedReviewFinding;
use crate::transfer::exported_ticket::ExportedTicket;
use crate::transfer::exported_workflow_state::{
    ExportedEpicWorkflowState, ExportedTicketWorkflowState,
};
use crate::{CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Manifest format this build reads and writes.
pub const MANIFEST_VERSION: u32 = 1;

/// Complete transfer payload for one epic or one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Format version, checked before anything else on import
    pub version: u32,

    pub export_kind: ExportKind,

    /// RFC3339 timestamp when data was exported
    pub exported_at: String,

    /// User who ran the export
    pub exported_by: String,

    /// Version of the application that produced the archive
    pub producer_version: String,

    pub source_project_name: String,

    pub epics: Vec<ExportedEpic>,
    pub tickets: Vec<ExportedTicket>,
    #[serde(default)]
    pub comments: Vec<ExportedComment>,
    #[serde(default)]
    pub review_findings: Vec<ExportedReviewFinding>,
    #[serde(default)]
    pub demo_scripts: Vec<ExportedDemoScript>,
    #[serde(default)]
    pub ticket_workflow_states: Vec<ExportedTicketWorkflowState>,
    #[serde(default)]
    pub epic_workflow_states: Vec<ExportedEpicWorkflowState>,
    #[serde(default)]
    pub attachment_files: Vec<AttachmentFileDescriptor>,
}

impl Manifest {
    /// Empty manifest stamped with the current format version.
    pub fn new(
        export_kind: ExportKind,
        exported_at: String,
        exported_by: String,
        producer_version: String,
        source_project_name: String,
    ) -> Self {
        Self {
            version: MANIFEST_VERSION,
            export_kind,
            exported_at,
            exported_by,
            producer_version,
            source_project_name,
            epics: Vec::new(),
            tickets: Vec::new(),
            comments: Vec::new(),
            review_findings: Vec::new(),
            demo_scripts: Vec::new(),
            ticket_workflow_states: Vec::new(),
            epic_workflow_states: Vec::new(),
            attachment_files: Vec::new(),
        }
    }

    /// Refuse manifests written by an incompatible producer.
    #[track_caller]
    pub fn check_version(&self) -> CoreResult<()> {
        if self.version != MANIFEST_VERSION {
            return Err(CoreError::Validation {
                message: format!(
                    "Unsupported manifest version: {} (expected {})",
                    self.version, MANIFEST_VERSION
                ),
                field: Some("version".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    pub fn to_json(&self) -> CoreResult<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    pub fn from_json(bytes: &[u8]) -> CoreResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Total number of entity records carried (attachments excluded).
    pub fn entity_count(&self) -> usize {
        self.epics.len()
            + self.tickets.len()
            + self.comments.len()
            + self.review_findings.len()
            + self.demo_scripts.len()
            + self.ticket_workflow_states.len()
            + self.epic_workflow_states.len()
    }
}
