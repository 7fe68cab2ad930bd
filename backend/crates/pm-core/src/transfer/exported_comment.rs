use crate::{Comment, CommentType};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedComment {
    pub id: String,
    pub ticket_id: String,
    pub content: String,
    pub author: String,
    pub comment_type: CommentType,
    pub created_at: i64,
}

impl From<Comment> for ExportedComment {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id.to_string(),
            ticket_id: c.ticket_id.to_string(),
            content: c.content,
            author: c.author,
            comment_type: c.comment_type,
            created_at: c.created_at.timestamp(),
        }
    }
}
