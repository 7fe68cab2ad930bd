use crate::CommentType;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub ticket_id: Uuid,

    pub content: String,
    /// Free-form author name ("user", "system", an agent name, ...)
    pub author: String,
    pub comment_type: CommentType,

    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(ticket_id: Uuid, content: String, author: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            ticket_id,
            content,
            author,
            comment_type: CommentType::Comment,
            created_at: Utc::now(),
        }
    }
}
