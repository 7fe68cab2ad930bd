pub mod attachments;
pub mod conflict;
pub mod error;
pub mod exporter;
pub mod importer;
pub mod logger;
pub mod phase;
pub mod remap;


pub use attachments::{AttachmentStore, GatheredAttachments, RestoredAttachments};
pub use conflict::{ConflictResolver, EpicAction, EpicResolution};
pub use error::{Result, TransferError};
pub use exporter::{ExportResult, Exporter};
pub use importer::Importer;
pub use phase::ImportPhase;
pub use remap::IdRemapper;

/// Archive bytes keyed by `attachments/{ticket_id}/{filename}`.
pub type AttachmentBuffers = std::collections::BTreeMap<String, Vec<u8>>;
