use serde::{Deserialize, Serialize};

/// Points at attachment bytes carried next to the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentFileDescriptor {
    /// Key into the attachment buffer map, `attachments/{ticket_id}/{filename}`
    pub archive_path: String,
    /// Archive-local id of the owning ticket
    pub ticket_id: String,
    pub filename: String,
}
