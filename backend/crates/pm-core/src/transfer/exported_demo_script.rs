use crate::{DemoScript, DemoStep};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedDemoScript {
    pub id: String,
    pub ticket_id: String,
    pub steps: Vec<DemoStep>,
    pub generated_at: i64,
    pub completed_at: Option<i64>,
    pub feedback: Option<String>,
    pub passed: Option<bool>,
}

impl From<DemoScript> for ExportedDemoScript {
    fn from(d: DemoScript) -> Self {
        Self {
            id: d.id.to_string(),
            ticket_id: d.ticket_id.to_string(),
            steps: d.steps,
            generated_at: d.generated_at.timestamp(),
            completed_at: d.completed_at.map(|dt| dt.timestamp()),
            feedback: d.feedback,
            passed: d.passed,
        }
    }
}
