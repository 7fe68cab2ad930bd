use crate::{
    AttachmentBuffers, AttachmentStore, ConflictResolver, EpicAction, IdRemapper, ImportPhase,
    Result as TransferErrorResult, TransferError,
};

use pm_config::{Config, ConfigErrorResult};
use pm_core::{
    Attachment, Comment, ConflictResolution, DemoScript, EpicWorkflowState,
    ExportedTicket, ImportOptions, ImportResult, Manifest, Project, ReviewFinding, Ticket,
    TicketStatus, TicketWorkflowState, parse_timestamp,
};
use pm_db::{
    CommentRepository, DemoScriptRepository, ProjectRepository, ReviewFindingRepository,
    TicketRepository, WorkflowStateRepository,
};

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use sqlx::{SqliteConnection, SqlitePool};
use uuid::Uuid;

const PROVENANCE_AUTHOR: &str = "system";

/// Writes a manifest into a target project.
///
/// Phases 1-6 share one transaction and roll back together. Attachment bytes
/// are written after commit and only ever produce warnings.
pub struct Importer {
    pool: SqlitePool,
    attachments: AttachmentStore,
}

impl Importer {
    pub fn new(pool: SqlitePool, attachments: AttachmentStore) -> Self {
        Self { pool, attachments }
    }

    pub fn from_config(pool: SqlitePool, config: &Config) -> ConfigErrorResult<Self> {
        Ok(Self::new(pool, AttachmentStore::new(config.attachments_root()?)))
    }

    pub async fn import_data(
        &self,
        target_project_id: Uuid,
        manifest: &Manifest,
        attachment_buffers: &AttachmentBuffers,
        options: ImportOptions,
    ) -> TransferErrorResult<ImportResult> {
        // 1. Refuse unknown formats before touching anything
        manifest.check_version()?;

        // 2. Target project must exist
        let project = ProjectRepository::find_by_id(&self.pool, target_project_id)
            .await?
            .ok_or_else(|| TransferError::not_found("project", target_project_id))?;

        info!(
            "Importing {} export of '{}' into '{}' ({}, reset_statuses={})",
            manifest.export_kind,
            manifest.source_project_name,
            project.name,
            options.conflict_resolution,
            options.reset_statuses
        );

        // 3. Phases 1-6 in one transaction
        let mut ctx = ImportContext::new(manifest, options, project);
        let mut tx = self.pool.begin().await?;

        if let Err(e) = ctx.run_phases(&mut *tx).await {
            warn!("Import of '{}' failed, rolling back: {}", manifest.source_project_name, e);
            if let Err(rollback_err) = tx.rollback().await {
                warn!("Rollback failed: {}", rollback_err);
            }
            return Err(e);
        }

        tx.commit().await?;
        debug!("Import transaction committed");

        // 4. Phase 7: attachment bytes, outside the transaction
        let restored = self
            .attachments
            .restore(&manifest.attachment_files, attachment_buffers, &ctx.remap)
            .await;

        let mut result = ctx.result;
        result.attachment_count = restored.written;
        result.warnings.extend(restored.warnings);
        result.id_remap = ctx.remap.into_remap();

        info!("{}", result.summary());

        Ok(result)
    }
}

/// State shared by the transactional phases of one import.
struct ImportContext<'m> {
    manifest: &'m Manifest,
    options: ImportOptions,
    project: Project,
    resolver: ConflictResolver,
    remap: IdRemapper,
    /// Existing epics whose tickets may be matched by title
    merged_epics: HashSet<Uuid>,
    title_maps: HashMap<Option<Uuid>, HashMap<String, Ticket>>,
    next_position: Option<i64>,
    /// Distinct target tickets written, in archive order
    imported_tickets: Vec<Uuid>,
    attribution_tag: String,
    now: DateTime<Utc>,
    result: ImportResult,
}

impl<'m> ImportContext<'m> {
    fn new(manifest: &'m Manifest, options: ImportOptions, project: Project) -> Self {
        Self {
            manifest,
            options,
            project,
            resolver: ConflictResolver::new(options.conflict_resolution, &manifest.exported_by),
            remap: IdRemapper::new(),
            merged_epics: HashSet::new(),
            title_maps: HashMap::new(),
            next_position: None,
            imported_tickets: Vec::new(),
            attribution_tag: format!("imported-from:{}", manifest.exported_by),
            now: Utc::now(),
            result: ImportResult::default(),
        }
    }

    async fn run_phases(&mut self, conn: &mut SqliteConnection) -> TransferErrorResult<()> {
        self.import_epics(conn)
            .await
            .map_err(|e| e.in_phase(ImportPhase::Epics))?;
        self.import_tickets(conn)
            .await
            .map_err(|e| e.in_phase(ImportPhase::Tickets))?;
        self.import_comments(conn)
            .await
            .map_err(|e| e.in_phase(ImportPhase::Comments))?;
        self.import_review_findings(conn)
            .await
            .map_err(|e| e.in_phase(ImportPhase::ReviewFindings))?;
        self.import_demo_scripts(conn)
            .await
            .map_err(|e| e.in_phase(ImportPhase::DemoScripts))?;
        self.import_workflow_states(conn)
            .await
            .map_err(|e| e.in_phase(ImportPhase::WorkflowStates))?;
        Ok(())
    }

    fn warn(&mut self, message: String) {
        warn!("{}", message);
        self.result.warnings.push(message);
    }

    // =========================================================================
    // Phase 1: Epics
    // =========================================================================

    async fn import_epics(&mut self, conn: &mut SqliteConnection) -> TransferErrorResult<()> {
        let manifest = self.manifest;
        debug!("Phase 1: {} epic(s)", manifest.epics.len());

        for exported in &manifest.epics {
            let resolution = self
                .resolver
                .resolve_epic(conn, self.project.id, exported, &self.remap)
                .await?;

            if resolution.action == EpicAction::Merged {
                self.merged_epics.insert(resolution.epic_id);
            }
            self.remap.insert_epic(exported.id.clone(), resolution.epic_id);
            self.result.epic_count += 1;
        }

        Ok(())
    }

    // =========================================================================
    // Phase 2: Tickets
    // =========================================================================

    async fn import_tickets(&mut self, conn: &mut SqliteConnection) -> TransferErrorResult<()> {
        let manifest = self.manifest;
        debug!("Phase 2: {} ticket(s)", manifest.tickets.len());

        for exported in &manifest.tickets {
            let epic_id = match &exported.epic_id {
                None => None,
                Some(archive_epic) => match self.remap.epic(archive_epic) {
                    Some(id) => Some(id),
                    None => {
                        self.warn(format!(
                            "Ticket '{}' references epic {} which is not in the archive, imported without epic",
                            exported.title, archive_epic
                        ));
                        None
                    }
                },
            };

            let ticket_id = match self.merge_candidate(conn, epic_id, &exported.title).await? {
                Some(mut existing) => {
                    self.apply_content(&mut existing, exported)?;
                    TicketRepository::update_content(&mut *conn, &existing).await?;
                    debug!("Merged ticket '{}' into {}", exported.title, existing.id);
                    existing.id
                }
                None => {
                    let position = self.allocate_position(conn).await?;
                    let mut ticket = Ticket::new(self.project.id, epic_id, exported.title.clone());
                    ticket.position = position;
                    self.apply_content(&mut ticket, exported)?;
                    TicketRepository::create(&mut *conn, &ticket).await?;
                    ticket.id
                }
            };

            self.remap.insert_ticket(exported.id.clone(), ticket_id);
            if self.imported_tickets.contains(&ticket_id) {
                self.warn(format!(
                    "Ticket '{}' merged into {} a second time, later archive content wins",
                    exported.title, ticket_id
                ));
                continue;
            }
            self.imported_tickets.push(ticket_id);
            self.result.ticket_count += 1;
        }

        Ok(())
    }

    /// Existing ticket to merge into, if the strategy and epic allow it.
    async fn merge_candidate(
        &mut self,
        conn: &mut SqliteConnection,
        epic_id: Option<Uuid>,
        title: &str,
    ) -> TransferErrorResult<Option<Ticket>> {
        if self.options.conflict_resolution != ConflictResolution::Merge {
            return Ok(None);
        }
        if let Some(id) = epic_id
            && !self.merged_epics.contains(&id)
        {
            return Ok(None);
        }

        if !self.title_maps.contains_key(&epic_id) {
            let titles = ConflictResolver::ticket_titles(conn, self.project.id, epic_id).await?;
            self.title_maps.insert(epic_id, titles);
        }

        Ok(self
            .title_maps
            .get(&epic_id)
            .and_then(|titles| titles.get(title))
            .cloned())
    }

    async fn allocate_position(&mut self, conn: &mut SqliteConnection) -> TransferErrorResult<i64> {
        let next = match self.next_position {
            Some(next) => next,
            None => TicketRepository::max_position(&mut *conn, self.project.id)
                .await?
                .map_or(0, |max| max + 1),
        };
        self.next_position = Some(next + 1);
        Ok(next)
    }

    /// Copy transferable content from the archive onto a target ticket.
    fn apply_content(
        &self,
        ticket: &mut Ticket,
        exported: &ExportedTicket,
    ) -> TransferErrorResult<()> {
        ticket.description = exported.description.clone();
        ticket.status = if self.options.reset_statuses {
            TicketStatus::Backlog
        } else {
            exported.status
        };
        ticket.priority = exported.priority;
        ticket.subtasks = exported.subtasks.clone();
        ticket.is_blocked = exported.is_blocked;
        ticket.blocked_reason = exported.blocked_reason.clone();

        ticket.tags = exported.tags.clone();
        if !ticket.tags.contains(&self.attribution_tag) {
            ticket.tags.push(self.attribution_tag.clone());
        }

        let ticket_id = ticket.id.to_string();
        ticket.attachments = exported
            .attachments
            .iter()
            .map(|a| Attachment {
                path: Attachment::relative_path(&ticket_id, &a.filename),
                ..a.clone()
            })
            .collect();

        ticket.created_at = parse_timestamp(exported.created_at, "ticket.created_at")?;
        ticket.updated_at = parse_timestamp(exported.updated_at, "ticket.updated_at")?;
        ticket.completed_at = exported
            .completed_at
            .map(|ts| parse_timestamp(ts, "ticket.completed_at"))
            .transpose()?;

        Ok(())
    }

    // =========================================================================
    // Phase 3: Comments
    // =========================================================================

    async fn import_comments(&mut self, conn: &mut SqliteConnection) -> TransferErrorResult<()> {
        let manifest = self.manifest;
        debug!("Phase 3: {} comment(s)", manifest.comments.len());

        for exported in &manifest.comments {
            let Some(ticket_id) = self.remap.ticket(&exported.ticket_id) else {
                self.warn(format!(
                    "Skipping comment {}: ticket {} was not imported",
                    exported.id, exported.ticket_id
                ));
                continue;
            };

            let comment = Comment {
                id: Uuid::new_v4(),
                ticket_id,
                content: exported.content.clone(),
                author: exported.author.clone(),
                comment_type: exported.comment_type,
                created_at: parse_timestamp(exported.created_at, "comment.created_at")?,
            };
            CommentRepository::create(&mut *conn, &comment).await?;
            self.result.comment_count += 1;
        }

        let note = self.provenance_note();
        for ticket_id in &self.imported_tickets {
            let mut comment = Comment::new(*ticket_id, note.clone(), PROVENANCE_AUTHOR.to_string());
            comment.created_at = self.now;
            CommentRepository::create(&mut *conn, &comment).await?;
        }

        Ok(())
    }

    fn provenance_note(&self) -> String {
        format!(
            "Imported from project '{}' (exported by {} at {}, {} export, format v{})",
            self.manifest.source_project_name,
            self.manifest.exported_by,
            self.manifest.exported_at,
            self.manifest.export_kind,
            self.manifest.version
        )
    }

    // =========================================================================
    // Phase 4: Review findings
    // =========================================================================

    async fn import_review_findings(
        &mut self,
        conn: &mut SqliteConnection,
    ) -> TransferErrorResult<()> {
        let manifest = self.manifest;
        debug!("Phase 4: {} review finding(s)", manifest.review_findings.len());

        for exported in &manifest.review_findings {
            let Some(ticket_id) = self.remap.ticket(&exported.ticket_id) else {
                self.warn(format!(
                    "Skipping review finding {}: ticket {} was not imported",
                    exported.id, exported.ticket_id
                ));
                continue;
            };

            let finding = ReviewFinding {
                id: Uuid::new_v4(),
                ticket_id,
                iteration: exported.iteration,
                agent: exported.agent.clone(),
                severity: exported.severity,
                category: exported.category.clone(),
                description: exported.description.clone(),
                location: exported.location.clone(),
                suggested_fix: exported.suggested_fix.clone(),
                status: exported.status,
                created_at: parse_timestamp(exported.created_at, "finding.created_at")?,
                fixed_at: exported
                    .fixed_at
                    .map(|ts| parse_timestamp(ts, "finding.fixed_at"))
                    .transpose()?,
            };
            ReviewFindingRepository::create(&mut *conn, &finding).await?;
            self.result.finding_count += 1;
        }

        Ok(())
    }

    // =========================================================================
    // Phase 5: Demo scripts
    // =========================================================================

    async fn import_demo_scripts(&mut self, conn: &mut SqliteConnection) -> TransferErrorResult<()> {
        let manifest = self.manifest;
        debug!("Phase 5: {} demo script(s)", manifest.demo_scripts.len());

        for exported in &manifest.demo_scripts {
            let Some(ticket_id) = self.remap.ticket(&exported.ticket_id) else {
                self.warn(format!(
                    "Skipping demo script {}: ticket {} was not imported",
                    exported.id, exported.ticket_id
                ));
                continue;
            };

            let script = DemoScript {
                id: Uuid::new_v4(),
                ticket_id,
                steps: exported.steps.clone(),
                generated_at: parse_timestamp(exported.generated_at, "demo_script.generated_at")?,
                completed_at: exported
                    .completed_at
                    .map(|ts| parse_timestamp(ts, "demo_script.completed_at"))
                    .transpose()?,
                feedback: exported.feedback.clone(),
                passed: exported.passed,
            };
            DemoScriptRepository::create(&mut *conn, &script).await?;
            self.result.demo_script_count += 1;
        }

        Ok(())
    }

    // =========================================================================
    // Phase 6: Workflow states
    // =========================================================================

    async fn import_workflow_states(
        &mut self,
        conn: &mut SqliteConnection,
    ) -> TransferErrorResult<()> {
        let manifest = self.manifest;
        debug!(
            "Phase 6: {} ticket state(s), {} epic state(s)",
            manifest.ticket_workflow_states.len(),
            manifest.epic_workflow_states.len()
        );

        for exported in &manifest.ticket_workflow_states {
            let Some(ticket_id) = self.remap.ticket(&exported.ticket_id) else {
                self.warn(format!(
                    "Skipping workflow state: ticket {} was not imported",
                    exported.ticket_id
                ));
                continue;
            };

            if WorkflowStateRepository::find_ticket_state(&mut *conn, ticket_id)
                .await?
                .is_some()
            {
                debug!("Ticket {} already has a workflow state, keeping it", ticket_id);
                continue;
            }

            let state = TicketWorkflowState {
                ticket_id,
                current_phase: exported.current_phase.clone(),
                review_iteration: exported.review_iteration,
                findings_count: exported.findings_count,
                findings_fixed: exported.findings_fixed,
                demo_generated: exported.demo_generated,
                updated_at: self.now,
            };
            WorkflowStateRepository::create_ticket_state(&mut *conn, &state).await?;
            self.result.workflow_state_count += 1;
        }

        for exported in &manifest.epic_workflow_states {
            let Some(epic_id) = self.remap.epic(&exported.epic_id) else {
                self.warn(format!(
                    "Skipping workflow state: epic {} was not imported",
                    exported.epic_id
                ));
                continue;
            };

            if WorkflowStateRepository::find_epic_state(&mut *conn, epic_id)
                .await?
                .is_some()
            {
                debug!("Epic {} already has a workflow state, keeping it", epic_id);
                continue;
            }

            let state = EpicWorkflowState {
                epic_id,
                tickets_total: exported.tickets_total,
                tickets_done: exported.tickets_done,
                learnings: exported.learnings.clone(),
                updated_at: self.now,
            };
            WorkflowStateRepository::create_epic_state(&mut *conn, &state).await?;
            self.result.workflow_state_count += 1;
        }

        Ok(())
    }
}
