use crate::Result as DbErrorResult;
use crate::codec::{decode_enum, decode_timestamp, decode_uuid};

use pm_core::Comment;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub struct CommentRepository;

impl CommentRepository {
    pub async fn create<'e, E>(executor: E, comment: &Comment) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO ticket_comments (
                    id, ticket_id, content, author, comment_type, created_at
                ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(comment.id.to_string())
        .bind(comment.ticket_id.to_string())
        .bind(&comment.content)
        .bind(&comment.author)
        .bind(comment.comment_type.as_str())
        .bind(comment.created_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_ticket<'e, E>(executor: E, ticket_id: Uuid) -> DbErrorResult<Vec<Comment>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT id, ticket_id, content, author, comment_type, created_at
                FROM ticket_comments
                WHERE ticket_id = ?
                ORDER BY created_at ASC
            "#,
        )
        .bind(ticket_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.iter().map(comment_from_row).collect()
    }
}

fn comment_from_row(r: &SqliteRow) -> DbErrorResult<Comment> {
    Ok(Comment {
        id: decode_uuid(&r.try_get::<String, _>("id")?, "ticket_comments.id")?,
        ticket_id: decode_uuid(
            &r.try_get::<String, _>("ticket_id")?,
            "ticket_comments.ticket_id",
        )?,
        content: r.try_get("content")?,
        author: r.try_get("author")?,
        comment_type: decode_enum(
            &r.try_get::<String, _>("comment_type")?,
            "ticket_comments.comment_type",
        )?,
        created_at: decode_timestamp(r.try_get("created_at")?, "ticket_comments.created_at")?,
    })
}
