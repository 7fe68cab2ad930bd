use crate::transfer::conflict_resolution::ConflictResolution;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ImportOptions {
    /// Force every imported ticket back to backlog
    pub reset_statuses: bool,
    pub conflict_resolution: ConflictResolution,
}
