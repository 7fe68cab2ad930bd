use crate::{CoreError, CoreResult};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CommentType {
    #[default]
    Comment,
    WorkSummary,
    TestReport,
    Progress,
}

impl CommentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::WorkSummary => "work_summary",
            Self::TestReport => "test_report",
            Self::Progress => "progress",
        }
    }
}

impl FromStr for CommentType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "comment" => Ok(Self::Comment),
            "work_summary" => Ok(Self::WorkSummary),
            "test_report" => Ok(Self::TestReport),
            "progress" => Ok(Self::Progress),
            _ => Err(CoreError::invalid_value("comment type", s)),
        }
    }
}
