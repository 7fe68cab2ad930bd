use crate::{CoreError, CoreResult};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What to do when an imported epic has the same title as one already in the target project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConflictResolution {
    /// Wipe the existing epic's tickets and workflow state, then reuse its id
    Replace,
    /// Reuse the existing epic and update tickets with matching titles in place
    Merge,
    /// Always create a new epic, suffixing the title on collision
    #[default]
    CreateNew,
}

impl ConflictResolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Replace => "replace",
            Self::Merge => "merge",
            Self::CreateNew => "create_new",
        }
    }
}

impl FromStr for ConflictResolution {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "replace" => Ok(Self::Replace),
            "merge" => Ok(Self::Merge),
            "create_new" | "create-new" => Ok(Self::CreateNew),
            _ => Err(CoreError::invalid_value("conflict resolution", s)),
        }
    }
}

impl std::fmt::Display for ConflictResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
