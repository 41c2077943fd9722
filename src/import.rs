//! Batch spreadsheet import: staging selected files and submitting them to
//! the backend as a single all-or-nothing unit.
//!
//! Uploads inside a batch race concurrently with no mutual ordering; only
//! their joint settlement is ordered before the clear/navigate step. A batch
//! with any failed upload is treated as not imported: it stays staged so the
//! whole batch can be retried, and no navigation happens.

use tracing::{debug, info, warn};

use crate::error::{FintrackError, Result};
use crate::format::readable_size;
use crate::gateway::Gateway;

// ---------------------------------------------------------------------------
// PendingUpload / UploadBatch
// ---------------------------------------------------------------------------

/// One staged file awaiting import.
#[derive(Debug, Clone)]
pub struct PendingUpload {
    pub name: String,
    pub contents: Vec<u8>,
    /// Human-readable size derived from the byte length at staging time.
    pub readable_size: String,
}

/// The pending batch of files selected for import.
///
/// Staging appends; it never deduplicates by name and never inspects
/// extension or content. The CSV-only restriction shown next to the picker
/// is advisory text, not enforced here.
#[derive(Debug, Default)]
pub struct UploadBatch {
    pending: Vec<PendingUpload>,
}

impl UploadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one selected file to the batch.
    pub fn stage(&mut self, name: impl Into<String>, contents: Vec<u8>) {
        let name = name.into();
        let readable_size = readable_size(contents.len() as u64);
        debug!(file = %name, size = %readable_size, "staged file for import");
        self.pending.push(PendingUpload {
            name,
            contents,
            readable_size,
        });
    }

    /// Drop every staged file unconditionally.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// The staged files, in insertion order.
    pub fn files(&self) -> &[PendingUpload] {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Navigator
// ---------------------------------------------------------------------------

/// Navigation collaborator, told to show the transaction list view after a
/// fully successful batch import. Never called on failure.
pub trait Navigator {
    fn open_transaction_list(&mut self);
}

// ---------------------------------------------------------------------------
// ImportReport
// ---------------------------------------------------------------------------

/// Outcome of a single file's upload within a batch.
#[derive(Debug)]
pub struct FileImportResult {
    pub name: String,
    pub error: Option<FintrackError>,
}

impl FileImportResult {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Per-file outcomes of a batch submit, in staging order.
#[derive(Debug)]
pub struct ImportReport {
    /// True when every upload succeeded: the batch was cleared and the
    /// navigator was told to show the transaction list.
    pub committed: bool,
    pub results: Vec<FileImportResult>,
}

impl ImportReport {
    /// The files whose upload was rejected, if any.
    pub fn failures(&self) -> impl Iterator<Item = &FileImportResult> {
        self.results.iter().filter(|result| !result.succeeded())
    }
}

// ---------------------------------------------------------------------------
// BatchImporter
// ---------------------------------------------------------------------------

/// Submits a staged batch to the backend, one concurrent request per file.
pub struct BatchImporter<'a> {
    gateway: &'a Gateway,
}

impl<'a> BatchImporter<'a> {
    /// Create a `BatchImporter` bound to the given gateway.
    pub fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Submit every staged file and settle the batch as a single unit.
    ///
    /// All uploads are dispatched at once and awaited together. When every
    /// one succeeds the batch is cleared and `navigator` is told to open the
    /// transaction list. When any upload fails the batch is left staged for
    /// retry, no navigation happens, and the report names each failed file.
    ///
    /// The backend may still have applied some files of a failed batch; the
    /// per-file results exist so a caller can handle that, but this method
    /// never assumes imports are idempotent. An empty batch commits
    /// trivially. `Err` is returned only for local faults such as a failed
    /// upload task, never for a rejected file.
    pub async fn submit(
        &self,
        batch: &mut UploadBatch,
        navigator: &mut dyn Navigator,
    ) -> Result<ImportReport> {
        let mut tasks = tokio::task::JoinSet::new();
        for (index, upload) in batch.files().iter().enumerate() {
            let gateway = self.gateway.clone();
            let name = upload.name.clone();
            let contents = upload.contents.clone();
            tasks.spawn(async move {
                let outcome = gateway.import_file(&name, contents).await;
                (index, name, outcome)
            });
        }

        // Settlement order is arbitrary; slot results back into staging order.
        let mut slots: Vec<Option<FileImportResult>> = Vec::new();
        slots.resize_with(batch.len(), || None);
        while let Some(joined) = tasks.join_next().await {
            let (index, name, outcome) = joined?;
            slots[index] = Some(FileImportResult {
                name,
                error: outcome.err(),
            });
        }
        let results: Vec<FileImportResult> = slots.into_iter().flatten().collect();

        let committed = results.iter().all(FileImportResult::succeeded);
        if committed {
            info!(files = results.len(), "batch import committed");
            batch.clear();
            navigator.open_transaction_list();
        } else {
            let failed = results.iter().filter(|r| !r.succeeded()).count();
            warn!(
                failed,
                total = results.len(),
                "batch import failed; batch left staged"
            );
        }

        Ok(ImportReport { committed, results })
    }
}
