use crate::{CoreError, CoreResult};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FindingStatus {
    #[default]
    Open,
    Fixed,
    WontFix,
    Duplicate,
}

impl FindingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Fixed => "fixed",
            Self::WontFix => "wont_fix",
            Self::Duplicate => "duplicate",
        }
    }
}

impl FromStr for FindingStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "open" => Ok(Self::Open),
            "fixed" => Ok(Self::Fixed),
            "wont_fix" => Ok(Self::WontFix),
            "duplicate" => Ok(Self::Duplicate),
            _ => Err(CoreError::invalid_value("finding status", s)),
        }
    }
}
