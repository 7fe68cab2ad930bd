use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

/// Archive id -> id in the target store, one table per entity kind.
///
/// Archive ids are only unique within their own kind, so epics and tickets
/// never share a table.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct IdRemap {
    pub epics: HashMap<String, Uuid>,
    pub tickets: HashMap<String, Uuid>,
}

/// Outcome of a completed import.
#[derive(Debug, Default, Serialize)]
pub struct ImportResult {
    pub epic_count: usize,
    pub ticket_count: usize,
    /// Archived comments written; provenance comments are not counted
    pub comment_count: usize,
    pub finding_count: usize,
    pub demo_script_count: usize,
    pub workflow_state_count: usize,
    pub attachment_count: usize,
    pub id_remap: IdRemap,
    pub warnings: Vec<String>,
}

impl ImportResult {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// One-line human readable summary.
    pub fn summary(&self) -> String {
        let base = format!(
            "Imported {} epic(s), {} ticket(s), {} comment(s), {} finding(s), {} demo script(s), {} attachment(s)",
            self.epic_count,
            self.ticket_count,
            self.comment_count,
            self.finding_count,
            self.demo_script_count,
            self.attachment_count
        );
        if self.has_warnings() {
            format!("{} with {} warning(s)", base, self.warnings.len())
        } else {
            base
        }
    }
}
