use crate::Result as DbErrorResult;
use crate::codec::{decode_json, decode_opt_timestamp, decode_timestamp, decode_uuid, encode_json};

use pm_core::DemoScript;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub struct DemoScriptRepository;

impl DemoScriptRepository {
    pub async fn create<'e, E>(executor: E, script: &DemoScript) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let steps = encode_json(&script.steps, "demo_scripts.steps")?;

        sqlx::query(
            r#"
                INSERT INTO demo_scripts (
                    id, ticket_id, steps, generated_at, completed_at, feedback, passed
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(script.id.to_string())
        .bind(script.ticket_id.to_string())
        .bind(steps)
        .bind(script.generated_at.timestamp())
        .bind(script.completed_at.map(|dt| dt.timestamp()))
        .bind(&script.feedback)
        .bind(script.passed)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_ticket<'e, E>(
        executor: E,
        ticket_id: Uuid,
    ) -> DbErrorResult<Vec<DemoScript>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT id, ticket_id, steps, generated_at, completed_at, feedback, passed
                FROM demo_scripts
                WHERE ticket_id = ?
                ORDER BY generated_at
            "#,
        )
        .bind(ticket_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.iter().map(demo_script_from_row).collect()
    }
}

fn demo_script_from_row(r: &SqliteRow) -> DbErrorResult<DemoScript> {
    Ok(DemoScript {
        id: decode_uuid(&r.try_get::<String, _>("id")?, "demo_scripts.id")?,
        ticket_id: decode_uuid(&r.try_get::<String, _>("ticket_id")?, "demo_scripts.ticket_id")?,
        steps: decode_json(&r.try_get::<String, _>("steps")?, "demo_scripts.steps")?,
        generated_at: decode_timestamp(r.try_get("generated_at")?, "demo_scripts.generated_at")?,
        completed_at: decode_opt_timestamp(
            r.try_get("completed_at")?,
            "demo_scripts.completed_at",
        )?,
        feedback: r.try_get("feedback")?,
        passed: r.try_get("passed")?,
    })
}
