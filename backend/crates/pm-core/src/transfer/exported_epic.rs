use crate::Epic;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedEpic {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub created_at: i64,
}

impl From<Epic> for ExportedEpic {
    fn from(e: Epic) -> Self {
        Self {
            id: e.id.to_string(),
            title: e.title,
            description: e.description,
            color: e.color,
            created_at: e.created_at.timestamp(),
        }
    }
}
