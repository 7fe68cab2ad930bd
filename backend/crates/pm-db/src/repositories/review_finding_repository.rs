use crate::Result as DbErrorResult;
use crate::codec::{decode_enum, decode_opt_timestamp, decode_timestamp, decode_uuid};

use pm_core::ReviewFinding;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub struct ReviewFindingRepository;

impl ReviewFindingRepository {
    pub async fn create<'e, E>(executor: E, finding: &ReviewFinding) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO review_findings (
                    id, ticket_id, iteration, agent, severity, category, description,
                    location, suggested_fix, status, created_at, fixed_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(finding.id.to_string())
        .bind(finding.ticket_id.to_string())
        .bind(finding.iteration)
        .bind(&finding.agent)
        .bind(finding.severity.as_str())
        .bind(&finding.category)
        .bind(&finding.description)
        .bind(&finding.location)
        .bind(&finding.suggested_fix)
        .bind(finding.status.as_str())
        .bind(finding.created_at.timestamp())
        .bind(finding.fixed_at.map(|dt| dt.timestamp()))
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_ticket<'e, E>(
        executor: E,
        ticket_id: Uuid,
    ) -> DbErrorResult<Vec<ReviewFinding>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT id, ticket_id, iteration, agent, severity, category, description,
                       location, suggested_fix, status, created_at, fixed_at
                FROM review_findings
                WHERE ticket_id = ?
                ORDER BY iteration, created_at
            "#,
        )
        .bind(ticket_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.iter().map(finding_from_row).collect()
    }
}

fn finding_from_row(r: &SqliteRow) -> DbErrorResult<ReviewFinding> {
    Ok(ReviewFinding {
        id: decode_uuid(&r.try_get::<String, _>("id")?, "review_findings.id")?,
        ticket_id: decode_uuid(
            &r.try_get::<String, _>("ticket_id")?,
            "review_findings.ticket_id",
        )?,
        iteration: r.try_get("iteration")?,
        agent: r.try_get("agent")?,
        severity: decode_enum(&r.try_get::<String, _>("severity")?, "review_findings.severity")?,
        category: r.try_get("category")?,
        description: r.try_get("description")?,
        location: r.try_get("location")?,
        suggested_fix: r.try_get("suggested_fix")?,
        status: decode_enum(&r.try_get::<String, _>("status")?, "review_findings.status")?,
        created_at: decode_timestamp(r.try_get("created_at")?, "review_findings.created_at")?,
        fixed_at: decode_opt_timestamp(r.try_get("fixed_at")?, "review_findings.fixed_at")?,
    })
}
