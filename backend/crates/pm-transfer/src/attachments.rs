use crate::{AttachmentBuffers, IdRemapper};

use pm_core::{Attachment, AttachmentFileDescriptor, Ticket};

use std::io;
use std::path::{Component, Path, PathBuf};

use log::{debug, warn};

/// Attachment bytes collected for an export.
#[derive(Debug, Default)]
pub struct GatheredAttachments {
    pub buffers: AttachmentBuffers,
    pub descriptors: Vec<AttachmentFileDescriptor>,
    pub warnings: Vec<String>,
}

impl GatheredAttachments {
    pub fn total_bytes(&self) -> u64 {
        self.buffers.values().map(|b| b.len() as u64).sum()
    }
}

/// Outcome of writing archived attachments into the file area.
#[derive(Debug, Default)]
pub struct RestoredAttachments {
    pub written: usize,
    pub warnings: Vec<String>,
}

/// File area holding attachment bytes, laid out as `attachments/{ticket_id}/{filename}`
/// under a root directory.
///
/// Every operation is best-effort: problems come back as warnings, never as errors.
#[derive(Debug, Clone)]
pub struct AttachmentStore {
    root: PathBuf,
}

impl AttachmentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a relative attachment path, or `None` if the
    /// path would escape the root.
    pub fn resolve(&self, relative: &str) -> Option<PathBuf> {
        let path = Path::new(relative);
        let contained = path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if relative.is_empty() || !contained {
            return None;
        }
        Some(self.root.join(path))
    }

    pub async fn read(&self, relative: &str) -> io::Result<Vec<u8>> {
        let path = self.resolve(relative).ok_or_else(|| escaping_path(relative))?;
        tokio::fs::read(path).await
    }

    /// Write `bytes`, creating parent directories. Overwrites an existing file.
    pub async fn write(&self, relative: &str, bytes: &[u8]) -> io::Result<()> {
        let path = self.resolve(relative).ok_or_else(|| escaping_path(relative))?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, bytes).await
    }

    /// Read every attachment of `tickets` into memory, keyed by archive path.
    pub async fn gather(&self, tickets: &[Ticket]) -> GatheredAttachments {
        let mut gathered = GatheredAttachments::default();

        for ticket in tickets {
            let ticket_id = ticket.id.to_string();
            for attachment in &ticket.attachments {
                match self.read(&attachment.path).await {
                    Ok(bytes) => {
                        let archive_path =
                            Attachment::relative_path(&ticket_id, &attachment.filename);
                        debug!("Gathered {} ({} bytes)", archive_path, bytes.len());
                        gathered.descriptors.push(AttachmentFileDescriptor {
                            archive_path: archive_path.clone(),
                            ticket_id: ticket_id.clone(),
                            filename: attachment.filename.clone(),
                        });
                        gathered.buffers.insert(archive_path, bytes);
                    }
                    Err(e) => {
                        let message = format!(
                            "Attachment '{}' of ticket '{}' could not be read: {}",
                            attachment.filename, ticket.title, e
                        );
                        warn!("{}", message);
                        gathered.warnings.push(message);
                    }
                }
            }
        }

        gathered
    }

    /// Write archived attachment bytes under the remapped ticket ids.
    pub async fn restore(
        &self,
        descriptors: &[AttachmentFileDescriptor],
        buffers: &AttachmentBuffers,
        remap: &IdRemapper,
    ) -> RestoredAttachments {
        let mut restored = RestoredAttachments::default();

        for descriptor in descriptors {
            let Some(ticket_id) = remap.ticket(&descriptor.ticket_id) else {
                restored.warn(format!(
                    "Skipping attachment '{}': ticket {} was not imported",
                    descriptor.filename, descriptor.ticket_id
                ));
                continue;
            };

            let Some(bytes) = buffers.get(&descriptor.archive_path) else {
                restored.warn(format!(
                    "Skipping attachment '{}': no data for {} in archive",
                    descriptor.filename, descriptor.archive_path
                ));
                continue;
            };

            let target = Attachment::relative_path(&ticket_id.to_string(), &descriptor.filename);
            match self.write(&target, bytes).await {
                Ok(()) => {
                    debug!("Wrote {} ({} bytes)", target, bytes.len());
                    restored.written += 1;
                }
                Err(e) => restored.warn(format!(
                    "Failed to write attachment '{}': {}",
                    descriptor.filename, e
                )),
            }
        }

        restored
    }
}

impl RestoredAttachments {
    fn warn(&mut self, message: String) {
        warn!("{}", message);
        self.warnings.push(message);
    }
}

fn escaping_path(relative: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("attachment path escapes the file area: {}", relative),
    )
}
