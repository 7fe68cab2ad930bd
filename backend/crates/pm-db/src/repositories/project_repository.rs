use crate::Result as DbErrorResult;
use crate::codec::{decode_timestamp, decode_uuid};

use pm_core::Project;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub struct ProjectRepository;

impl ProjectRepository {
    pub async fn create<'e, E>(executor: E, project: &Project) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO projects (id, name, description, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(project.id.to_string())
        .bind(&project.name)
        .bind(&project.description)
        .bind(project.created_at.timestamp())
        .bind(project.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Project>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT id, name, description, created_at, updated_at
                FROM projects
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(project_from_row).transpose()
    }
}

fn project_from_row(r: &SqliteRow) -> DbErrorResult<Project> {
    Ok(Project {
        id: decode_uuid(&r.try_get::<String, _>("id")?, "projects.id")?,
        name: r.try_get("name")?,
        description: r.try_get("description")?,
        created_at: decode_timestamp(r.try_get("created_at")?, "projects.created_at")?,
        updated_at: decode_timestamp(r.try_get("updated_at")?, "projects.updated_at")?,
    })
}
