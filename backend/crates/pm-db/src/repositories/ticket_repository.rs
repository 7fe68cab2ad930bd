use crate::Result as DbErrorResult;
use crate::codec::{
    decode_enum, decode_json, decode_opt_timestamp, decode_opt_uuid, decode_timestamp,
    decode_uuid, encode_json,
};

use pm_core::Ticket;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

const TICKET_COLUMNS: &str = r#"
    id, project_id, epic_id, position, title, description, status, priority,
    tags, subtasks, is_blocked, blocked_reason, attachments,
    linked_commits, linked_files, branch_name, pr_number, pr_url, pr_status,
    created_at, updated_at, completed_at
"#;

pub struct TicketRepository;

impl TicketRepository {
    pub async fn create<'e, E>(executor: E, ticket: &Ticket) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let tags = encode_json(&ticket.tags, "tickets.tags")?;
        let subtasks = encode_json(&ticket.subtasks, "tickets.subtasks")?;
        let attachments = encode_json(&ticket.attachments, "tickets.attachments")?;
        let linked_commits = encode_json(&ticket.linked_commits, "tickets.linked_commits")?;
        let linked_files = encode_json(&ticket.linked_files, "tickets.linked_files")?;

        sqlx::query(
            r#"
                INSERT INTO tickets (
                    id, project_id, epic_id, position, title, description, status, priority,
                    tags, subtasks, is_blocked, blocked_reason, attachments,
                    linked_commits, linked_files, branch_name, pr_number, pr_url, pr_status,
                    created_at, updated_at, completed_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(ticket.id.to_string())
        .bind(ticket.project_id.to_string())
        .bind(ticket.epic_id.map(|id| id.to_string()))
        .bind(ticket.position)
        .bind(&ticket.title)
        .bind(&ticket.description)
        .bind(ticket.status.as_str())
        .bind(ticket.priority.as_str())
        .bind(tags)
        .bind(subtasks)
        .bind(ticket.is_blocked)
        .bind(&ticket.blocked_reason)
        .bind(attachments)
        .bind(linked_commits)
        .bind(linked_files)
        .bind(&ticket.branch_name)
        .bind(ticket.pr_number)
        .bind(&ticket.pr_url)
        .bind(&ticket.pr_status)
        .bind(ticket.created_at.timestamp())
        .bind(ticket.updated_at.timestamp())
        .bind(ticket.completed_at.map(|dt| dt.timestamp()))
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Ticket>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("SELECT {} FROM tickets WHERE id = ?", TICKET_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?;

        row.as_ref().map(ticket_from_row).transpose()
    }

    pub async fn find_by_epic<'e, E>(executor: E, epic_id: Uuid) -> DbErrorResult<Vec<Ticket>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!(
            "SELECT {} FROM tickets WHERE epic_id = ? ORDER BY position, created_at",
            TICKET_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(epic_id.to_string())
            .fetch_all(executor)
            .await?;

        rows.iter().map(ticket_from_row).collect()
    }

    /// Every ticket of the project, including those without an epic.
    pub async fn find_by_project<'e, E>(
        executor: E,
        project_id: Uuid,
    ) -> DbErrorResult<Vec<Ticket>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!(
            "SELECT {} FROM tickets WHERE project_id = ? ORDER BY position, created_at",
            TICKET_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(project_id.to_string())
            .fetch_all(executor)
            .await?;

        rows.iter().map(ticket_from_row).collect()
    }

    /// Highest position used in the project, `None` when it has no tickets.
    pub async fn max_position<'e, E>(executor: E, project_id: Uuid) -> DbErrorResult<Option<i64>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query("SELECT MAX(position) AS max_position FROM tickets WHERE project_id = ?")
            .bind(project_id.to_string())
            .fetch_one(executor)
            .await?;

        Ok(row.try_get::<Option<i64>, _>("max_position")?)
    }

    /// Overwrites the transferable fields. Hierarchy, title, position and local VCS
    /// state are left as they are.
    pub async fn update_content<'e, E>(executor: E, ticket: &Ticket) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let tags = encode_json(&ticket.tags, "tickets.tags")?;
        let subtasks = encode_json(&ticket.subtasks, "tickets.subtasks")?;
        let attachments = encode_json(&ticket.attachments, "tickets.attachments")?;

        sqlx::query(
            r#"
                UPDATE tickets
                SET description = ?, status = ?, priority = ?, tags = ?, subtasks = ?,
                    is_blocked = ?, blocked_reason = ?, attachments = ?,
                    created_at = ?, updated_at = ?, completed_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&ticket.description)
        .bind(ticket.status.as_str())
        .bind(ticket.priority.as_str())
        .bind(tags)
        .bind(subtasks)
        .bind(ticket.is_blocked)
        .bind(&ticket.blocked_reason)
        .bind(attachments)
        .bind(ticket.created_at.timestamp())
        .bind(ticket.updated_at.timestamp())
        .bind(ticket.completed_at.map(|dt| dt.timestamp()))
        .bind(ticket.id.to_string())
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Deletes every ticket of the epic. Dependent rows go with them via cascade.
    pub async fn delete_by_epic<'e, E>(executor: E, epic_id: Uuid) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM tickets WHERE epic_id = ?")
            .bind(epic_id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}

fn ticket_from_row(r: &SqliteRow) -> DbErrorResult<Ticket> {
    Ok(Ticket {
        id: decode_uuid(&r.try_get::<String, _>("id")?, "tickets.id")?,
        project_id: decode_uuid(&r.try_get::<String, _>("project_id")?, "tickets.project_id")?,
        epic_id: decode_opt_uuid(r.try_get("epic_id")?, "tickets.epic_id")?,
        position: r.try_get("position")?,
        title: r.try_get("title")?,
        description: r.try_get("description")?,
        status: decode_enum(&r.try_get::<String, _>("status")?, "tickets.status")?,
        priority: decode_enum(&r.try_get::<String, _>("priority")?, "tickets.priority")?,
        tags: decode_json(&r.try_get::<String, _>("tags")?, "tickets.tags")?,
        subtasks: decode_json(&r.try_get::<String, _>("subtasks")?, "tickets.subtasks")?,
        is_blocked: r.try_get("is_blocked")?,
        blocked_reason: r.try_get("blocked_reason")?,
        attachments: decode_json(&r.try_get::<String, _>("attachments")?, "tickets.attachments")?,
        linked_commits: decode_json(
            &r.try_get::<String, _>("linked_commits")?,
            "tickets.linked_commits",
        )?,
        linked_files: decode_json(
            &r.try_get::<String, _>("linked_files")?,
            "tickets.linked_files",
        )?,
        branch_name: r.try_get("branch_name")?,
        pr_number: r.try_get("pr_number")?,
        pr_url: r.try_get("pr_url")?,
        pr_status: r.try_get("pr_status")?,
        created_at: decode_timestamp(r.try_get("created_at")?, "tickets.created_at")?,
        updated_at: decode_timestamp(r.try_get("updated_at")?, "tickets.updated_at")?,
        completed_at: decode_opt_timestamp(r.try_get("completed_at")?, "tickets.completed_at")?,
    })
}
