use crate::Result as DbErrorResult;
use crate::codec::{decode_timestamp, decode_uuid};

use pm_core::Epic;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

const EPIC_COLUMNS: &str = "id, project_id, title, description, color, created_at, updated_at";

pub struct EpicRepository;

impl EpicRepository {
    pub async fn create<'e, E>(executor: E, epic: &Epic) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO epics (
                    id, project_id, title, description, color, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(epic.id.to_string())
        .bind(epic.project_id.to_string())
        .bind(&epic.title)
        .bind(&epic.description)
        .bind(&epic.color)
        .bind(epic.created_at.timestamp())
        .bind(epic.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Epic>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("SELECT {} FROM epics WHERE id = ?", EPIC_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?;

        row.as_ref().map(epic_from_row).transpose()
    }

    pub async fn find_by_project<'e, E>(executor: E, project_id: Uuid) -> DbErrorResult<Vec<Epic>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!(
            "SELECT {} FROM epics WHERE project_id = ? ORDER BY created_at, title",
            EPIC_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(project_id.to_string())
            .fetch_all(executor)
            .await?;

        rows.iter().map(epic_from_row).collect()
    }

    /// Oldest epic in the project carrying exactly this title.
    pub async fn find_by_title<'e, E>(
        executor: E,
        project_id: Uuid,
        title: &str,
    ) -> DbErrorResult<Option<Epic>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!(
            "SELECT {} FROM epics WHERE project_id = ? AND title = ? ORDER BY created_at LIMIT 1",
            EPIC_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(project_id.to_string())
            .bind(title)
            .fetch_optional(executor)
            .await?;

        row.as_ref().map(epic_from_row).transpose()
    }

    pub async fn update<'e, E>(executor: E, epic: &Epic) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                UPDATE epics
                SET title = ?, description = ?, color = ?, created_at = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&epic.title)
        .bind(&epic.description)
        .bind(&epic.color)
        .bind(epic.created_at.timestamp())
        .bind(epic.updated_at.timestamp())
        .bind(epic.id.to_string())
        .execute(executor)
        .await?;

        Ok(())
    }
}

fn epic_from_row(r: &SqliteRow) -> DbErrorResult<Epic> {
    Ok(Epic {
        id: decode_uuid(&r.try_get::<String, _>("id")?, "epics.id")?,
        project_id: decode_uuid(&r.try_get::<String, _>("project_id")?, "epics.project_id")?,
        title: r.try_get("title")?,
        description: r.try_get("description")?,
        color: r.try_get("color")?,
        created_at: decode_timestamp(r.try_get("created_at")?, "epics.created_at")?,
        updated_at: decode_timestamp(r.try_get("updated_at")?, "epics.updated_at")?,
    })
}
