use serde::{Deserialize, Serialize};

/// Descriptor of a file stored in the attachment area for a ticket.
///
/// `path` is relative to the attachment area root and follows
/// `attachments/{ticket_id}/{filename}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    pub filename: String,
    pub path: String,
    pub mime_type: Option<String>,
    #[serde(default)]
    pub size: u64,
}

impl Attachment {
    /// Relative location of an attachment file for the given ticket.
    pub fn relative_path(ticket_id: &str, filename: &str) -> String {
        format!("attachments/{}/{}", ticket_id, filename)
    }
}
