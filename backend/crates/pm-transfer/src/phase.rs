use std::fmt;

/// Ordered import phases. Everything before `Attachments` runs inside one transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportPhase {
    Epics,
    Tickets,
    Comments,
    ReviewFindings,
    DemoScripts,
    WorkflowStates,
    Attachments,
}

impl ImportPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Epics => "epics",
            Self::Tickets => "tickets",
            Self::Comments => "comments",
            Self::ReviewFindings => "review_findings",
            Self::DemoScripts => "demo_scripts",
            Self::WorkflowStates => "workflow_states",
            Self::Attachments => "attachments",
        }
    }

    /// 1-based position in the import sequence.
    pub fn number(&self) -> u8 {
        match self {
            Self::Epics => 1,
            Self::Tickets => 2,
            Self::Comments => 3,
            Self::ReviewFindings => 4,
            Self::DemoScripts => 5,
            Self::WorkflowStates => 6,
            Self::Attachments => 7,
        }
    }
}

impl fmt::Display for ImportPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
