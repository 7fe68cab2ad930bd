use crate::{IdRemapper, Result as TransferErrorResult};

use pm_core::{ConflictResolution, Epic, ExportedEpic, Ticket, parse_timestamp};
use pm_db::{EpicRepository, TicketRepository, WorkflowStateRepository};

use std::collections::HashMap;

use chrono::Utc;
use log::{debug, info};
use sqlx::SqliteConnection;
use uuid::Uuid;

/// What happened to an archived epic in the target project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpicAction {
    Created,
    Replaced,
    Merged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpicResolution {
    pub epic_id: Uuid,
    pub action: EpicAction,
}

/// Applies the caller's strategy when an archived epic's title already exists
/// in the target project.
#[derive(Debug, Clone)]
pub struct ConflictResolver {
    strategy: ConflictResolution,
    exported_by: String,
}

impl ConflictResolver {
    pub fn new(strategy: ConflictResolution, exported_by: impl Into<String>) -> Self {
        Self {
            strategy,
            exported_by: exported_by.into(),
        }
    }

    pub fn strategy(&self) -> ConflictResolution {
        self.strategy
    }

    /// Title given to a create-new epic whose original title is taken.
    pub fn collision_title(&self, title: &str) -> String {
        format!("{} (imported from {})", title, self.exported_by)
    }

    /// Resolve one archived epic against the target project.
    ///
    /// Epics already claimed earlier in the same import never count as a
    /// collision target, so two archived epics sharing a title cannot replace
    /// or merge into each other.
    pub async fn resolve_epic(
        &self,
        conn: &mut SqliteConnection,
        project_id: Uuid,
        exported: &ExportedEpic,
        claimed: &IdRemapper,
    ) -> TransferErrorResult<EpicResolution> {
        let existing = EpicRepository::find_by_title(&mut *conn, project_id, &exported.title)
            .await?
            .filter(|epic| !claimed.is_epic_target(epic.id));

        let Some(mut existing) = existing else {
            let epic_id = self
                .create_epic(conn, project_id, exported, exported.title.clone())
                .await?;
            return Ok(EpicResolution {
                epic_id,
                action: EpicAction::Created,
            });
        };

        match self.strategy {
            ConflictResolution::Replace => {
                let removed = TicketRepository::delete_by_epic(&mut *conn, existing.id).await?;
                WorkflowStateRepository::delete_epic_state(&mut *conn, existing.id).await?;

                existing.description = exported.description.clone();
                existing.color = exported.color.clone();
                existing.created_at = parse_timestamp(exported.created_at, "epic.created_at")?;
                existing.updated_at = Utc::now();
                EpicRepository::update(&mut *conn, &existing).await?;

                info!(
                    "Replaced epic '{}' ({}), removed {} ticket(s)",
                    existing.title, existing.id, removed
                );
                Ok(EpicResolution {
                    epic_id: existing.id,
                    action: EpicAction::Replaced,
                })
            }
            ConflictResolution::Merge => {
                debug!("Merging into existing epic '{}' ({})", existing.title, existing.id);
                Ok(EpicResolution {
                    epic_id: existing.id,
                    action: EpicAction::Merged,
                })
            }
            ConflictResolution::CreateNew => {
                let title = self.collision_title(&exported.title);
                debug!("Epic title '{}' taken, creating '{}'", exported.title, title);
                let epic_id = self.create_epic(conn, project_id, exported, title).await?;
                Ok(EpicResolution {
                    epic_id,
                    action: EpicAction::Created,
                })
            }
        }
    }

    async fn create_epic(
        &self,
        conn: &mut SqliteConnection,
        project_id: Uuid,
        exported: &ExportedEpic,
        title: String,
    ) -> TransferErrorResult<Uuid> {
        let mut epic = Epic::new(project_id, title);
        epic.description = exported.description.clone();
        epic.color = exported.color.clone();
        epic.created_at = parse_timestamp(exported.created_at, "epic.created_at")?;

        EpicRepository::create(&mut *conn, &epic).await?;
        Ok(epic.id)
    }

    /// Title -> ticket for merge matching, scoped to one epic or to the
    /// project's orphan tickets when `epic_id` is `None`.
    ///
    /// Duplicate titles resolve to the lowest-positioned ticket.
    pub async fn ticket_titles(
        conn: &mut SqliteConnection,
        project_id: Uuid,
        epic_id: Option<Uuid>,
    ) -> TransferErrorResult<HashMap<String, Ticket>> {
        let tickets = match epic_id {
            Some(id) => TicketRepository::find_by_epic(&mut *conn, id).await?,
            None => TicketRepository::find_by_project(&mut *conn, project_id)
                .await?
                .into_iter()
                .filter(|t| t.epic_id.is_none())
                .collect(),
        };

        let mut titles = HashMap::with_capacity(tickets.len());
        for ticket in tickets {
            titles.entry(ticket.title.clone()).or_insert(ticket);
        }
        Ok(titles)
    }
}
