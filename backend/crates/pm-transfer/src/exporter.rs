use crate::{AttachmentBuffers, AttachmentStore, Result as TransferErrorResult, TransferError};

use pm_config::{Config, ConfigErrorResult};
use pm_core::{
    Epic, EpicWorkflowState, ExportKind, ExportedComment, ExportedDemoScript, ExportedEpic,
    ExportedEpicWorkflowState, ExportedReviewFinding, ExportedTicket,
    ExportedTicketWorkflowState, Manifest, Project, Ticket,
};
use pm_db::{
    CommentRepository, DemoScriptRepository, EpicRepository, ProjectRepository,
    ReviewFindingRepository, TicketRepository, WorkflowStateRepository,
};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use log::{debug, info};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Manifest plus the attachment bytes it refers to, ready for packaging.
#[derive(Debug)]
pub struct ExportResult {
    pub manifest: Manifest,
    pub attachments: AttachmentBuffers,
    /// Serialized manifest bytes plus attachment bytes
    pub total_size: u64,
    pub warnings: Vec<String>,
}

/// Builds manifests from the store. Never writes.
pub struct Exporter {
    pool: SqlitePool,
    attachments: AttachmentStore,
    max_archive_bytes: u64,
    exported_by: String,
}

impl Exporter {
    pub fn new(
        pool: SqlitePool,
        attachments: AttachmentStore,
        max_archive_bytes: u64,
        exported_by: impl Into<String>,
    ) -> Self {
        Self {
            pool,
            attachments,
            max_archive_bytes,
            exported_by: exported_by.into(),
        }
    }

    pub fn from_config(pool: SqlitePool, config: &Config) -> ConfigErrorResult<Self> {
        Ok(Self::new(
            pool,
            AttachmentStore::new(config.attachments_root()?),
            config.transfer.max_archive_bytes,
            config.transfer.exported_by.clone(),
        ))
    }

    /// Export one epic with its tickets and everything hanging off them.
    pub async fn export_epic(&self, epic_id: Uuid) -> TransferErrorResult<ExportResult> {
        debug!("Exporting epic {}", epic_id);

        let epic = EpicRepository::find_by_id(&self.pool, epic_id)
            .await?
            .ok_or_else(|| TransferError::not_found("epic", epic_id))?;

        let project = ProjectRepository::find_by_id(&self.pool, epic.project_id)
            .await?
            .ok_or_else(|| TransferError::not_found("project", epic.project_id))?;

        let tickets = TicketRepository::find_by_epic(&self.pool, epic.id).await?;

        let epic_states = WorkflowStateRepository::find_epic_state(&self.pool, epic.id)
            .await?
            .into_iter()
            .collect();

        self.assemble(ExportKind::Epic, project, vec![epic], epic_states, tickets)
            .await
    }

    /// Export a whole project, orphan tickets included.
    pub async fn export_project(&self, project_id: Uuid) -> TransferErrorResult<ExportResult> {
        debug!("Exporting project {}", project_id);

        let project = ProjectRepository::find_by_id(&self.pool, project_id)
            .await?
            .ok_or_else(|| TransferError::not_found("project", project_id))?;

        let epics = EpicRepository::find_by_project(&self.pool, project.id).await?;
        let tickets = TicketRepository::find_by_project(&self.pool, project.id).await?;

        let mut epic_states = Vec::new();
        for epic in &epics {
            if let Some(state) = WorkflowStateRepository::find_epic_state(&self.pool, epic.id).await? {
                epic_states.push(state);
            }
        }

        self.assemble(ExportKind::Project, project, epics, epic_states, tickets)
            .await
    }

    async fn assemble(
        &self,
        kind: ExportKind,
        project: Project,
        epics: Vec<Epic>,
        epic_states: Vec<EpicWorkflowState>,
        tickets: Vec<Ticket>,
    ) -> TransferErrorResult<ExportResult> {
        let mut manifest = Manifest::new(
            kind,
            Utc::now().to_rfc3339(),
            self.exported_by.clone(),
            env!("CARGO_PKG_VERSION").to_string(),
            project.name,
        );

        for ticket in &tickets {
            let comments = CommentRepository::find_by_ticket(&self.pool, ticket.id).await?;
            manifest
                .comments
                .extend(comments.into_iter().map(ExportedComment::from));

            let findings = ReviewFindingRepository::find_by_ticket(&self.pool, ticket.id).await?;
            manifest
                .review_findings
                .extend(findings.into_iter().map(ExportedReviewFinding::from));

            let scripts = DemoScriptRepository::find_by_ticket(&self.pool, ticket.id).await?;
            manifest
                .demo_scripts
                .extend(scripts.into_iter().map(ExportedDemoScript::from));

            if let Some(state) =
                WorkflowStateRepository::find_ticket_state(&self.pool, ticket.id).await?
            {
                manifest
                    .ticket_workflow_states
                    .push(ExportedTicketWorkflowState::from(state));
            }
        }

        let gathered = self.attachments.gather(&tickets).await;
        let attachment_bytes = gathered.total_bytes();
        let attachment_count = gathered.buffers.len();

        manifest.epics = epics.into_iter().map(ExportedEpic::from).collect();
        manifest.epic_workflow_states = epic_states
            .into_iter()
            .map(ExportedEpicWorkflowState::from)
            .collect();
        manifest.tickets = tickets.into_iter().map(ExportedTicket::from).collect();
        manifest.attachment_files = gathered.descriptors;

        let manifest_bytes = manifest.to_json()?.len() as u64;
        let total_size = manifest_bytes + attachment_bytes;

        if total_size > self.max_archive_bytes {
            return Err(TransferError::SizeLimit {
                actual: total_size,
                limit: self.max_archive_bytes,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        info!(
            "Exported {} '{}': {} epic(s), {} ticket(s), {} attachment(s), {} bytes",
            kind,
            manifest.source_project_name,
            manifest.epics.len(),
            manifest.tickets.len(),
            attachment_count,
            total_size
        );

        Ok(ExportResult {
            manifest,
            attachments: gathered.buffers,
            total_size,
            warnings: gathered.warnings,
        })
    }
}
