use crate::Result as DbErrorResult;
use crate::codec::{decode_json, decode_timestamp, decode_uuid, encode_json};

use pm_core::{EpicWorkflowState, TicketWorkflowState};

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

/// Per-ticket and per-epic progress rows. Both tables are keyed by the owner's id.
pub struct WorkflowStateRepository;

impl WorkflowStateRepository {
    pub async fn create_ticket_state<'e, E>(
        executor: E,
        state: &TicketWorkflowState,
    ) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO ticket_workflow_state (
                    ticket_id, current_phase, review_iteration, findings_count,
                    findings_fixed, demo_generated, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(state.ticket_id.to_string())
        .bind(&state.current_phase)
        .bind(state.review_iteration)
        .bind(state.findings_count)
        .bind(state.findings_fixed)
        .bind(state.demo_generated)
        .bind(state.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_ticket_state<'e, E>(
        executor: E,
        ticket_id: Uuid,
    ) -> DbErrorResult<Option<TicketWorkflowState>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT ticket_id, current_phase, review_iteration, findings_count,
                       findings_fixed, demo_generated, updated_at
                FROM ticket_workflow_state
                WHERE ticket_id = ?
            "#,
        )
        .bind(ticket_id.to_string())
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(ticket_state_from_row).transpose()
    }

    pub async fn create_epic_state<'e, E>(
        executor: E,
        state: &EpicWorkflowState,
    ) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let learnings = encode_json(&state.learnings, "epic_workflow_state.learnings")?;

        sqlx::query(
            r#"
                INSERT INTO epic_workflow_state (
                    epic_id, tickets_total, tickets_done, learnings, updated_at
                ) VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(state.epic_id.to_string())
        .bind(state.tickets_total)
        .bind(state.tickets_done)
        .bind(learnings)
        .bind(state.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_epic_state<'e, E>(
        executor: E,
        epic_id: Uuid,
    ) -> DbErrorResult<Option<EpicWorkflowState>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT epic_id, tickets_total, tickets_done, learnings, updated_at
                FROM epic_workflow_state
                WHERE epic_id = ?
            "#,
        )
        .bind(epic_id.to_string())
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(epic_state_from_row).transpose()
    }

    pub async fn delete_epic_state<'e, E>(executor: E, epic_id: Uuid) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query("DELETE FROM epic_workflow_state WHERE epic_id = ?")
            .bind(epic_id.to_string())
            .execute(executor)
            .await?;

        Ok(())
    }
}

fn ticket_state_from_row(r: &SqliteRow) -> DbErrorResult<TicketWorkflowState> {
    Ok(TicketWorkflowState {
        ticket_id: decode_uuid(
            &r.try_get::<String, _>("ticket_id")?,
            "ticket_workflow_state.ticket_id",
        )?,
        current_phase: r.try_get("current_phase")?,
        review_iteration: r.try_get("review_iteration")?,
        findings_count: r.try_get("findings_count")?,
        findings_fixed: r.try_get("findings_fixed")?,
        demo_generated: r.try_get("demo_generated")?,
        updated_at: decode_timestamp(r.try_get("updated_at")?, "ticket_workflow_state.updated_at")?,
    })
}

fn epic_state_from_row(r: &SqliteRow) -> DbErrorResult<EpicWorkflowState> {
    Ok(EpicWorkflowState {
        epic_id: decode_uuid(
            &r.try_get::<String, _>("epic_id")?,
            "epic_workflow_state.epic_id",
        )?,
        tickets_total: r.try_get("tickets_total")?,
        tickets_done: r.try_get("tickets_done")?,
        learnings: decode_json(
            &r.try_get::<String, _>("learnings")?,
            "epic_workflow_state.learnings",
        )?,
        updated_at: decode_timestamp(r.try_get("updated_at")?, "epic_workflow_state.updated_at")?,
    })
}
