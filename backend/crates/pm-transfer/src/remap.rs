use pm_core::IdRemap;

use std::collections::HashMap;

use uuid::Uuid;

/// Archive-local id -> id in the target store.
///
/// Epics and tickets are kept apart since an archive may reuse the same id
/// across kinds. Only ids that later phases resolve are recorded; a lookup
/// miss means the archive references something that was never imported.
#[derive(Debug, Default, Clone)]
pub struct IdRemapper {
    epics: HashMap<String, Uuid>,
    tickets: HashMap<String, Uuid>,
}

impl IdRemapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an epic mapping, returning the previous target if already mapped.
    pub fn insert_epic(&mut self, archive_id: impl Into<String>, target_id: Uuid) -> Option<Uuid> {
        self.epics.insert(archive_id.into(), target_id)
    }

    /// Record a ticket mapping, returning the previous target if already mapped.
    pub fn insert_ticket(
        &mut self,
        archive_id: impl Into<String>,
        target_id: Uuid,
    ) -> Option<Uuid> {
        self.tickets.insert(archive_id.into(), target_id)
    }

    pub fn epic(&self, archive_id: &str) -> Option<Uuid> {
        self.epics.get(archive_id).copied()
    }

    pub fn ticket(&self, archive_id: &str) -> Option<Uuid> {
        self.tickets.get(archive_id).copied()
    }

    /// True if some archived epic already resolved to `target_id`.
    pub fn is_epic_target(&self, target_id: Uuid) -> bool {
        self.epics.values().any(|id| *id == target_id)
    }

    pub fn len(&self) -> usize {
        self.epics.len() + self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.epics.is_empty() && self.tickets.is_empty()
    }

    pub fn into_remap(self) -> IdRemap {
        IdRemap {
            epics: self.epics,
            tickets: self.tickets,
        }
    }
}
