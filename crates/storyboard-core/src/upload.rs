//! Reading selected files into image entries
//!
//! A selection of N files spawns N reads. Reads finish in whatever order the
//! filesystem gets to them, so completions are buffered in an [`UploadBatch`]
//! and released as one [`BatchOutcome`], in selection order, once the last
//! read lands.

use std::future::Future;
use std::path::{Path, PathBuf};

use tokio::task::JoinSet;

use crate::config::UploadConfig;
use crate::data_uri::{sniff_image_mime, DataUri};
use crate::error::{UploadError, UploadResult};
use crate::types::{ImageEntry, ImageList};

/// Capability to read the bytes of one selected file.
///
/// The widget uses [`FsSource`]. Tests swap in sources that delay, fail, or
/// serve bytes from memory.
pub trait FileSource: Clone + Send + Sync + 'static {
    /// Size in bytes, checked against the limit before anything is read
    fn len(&self, path: &Path) -> impl Future<Output = std::io::Result<u64>> + Send;

    fn read(&self, path: &Path) -> impl Future<Output = std::io::Result<Vec<u8>>> + Send;
}

/// Reads from the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl FileSource for FsSource {
    async fn len(&self, path: &Path) -> std::io::Result<u64> {
        Ok(tokio::fs::metadata(path).await?.len())
    }

    fn read(&self, path: &Path) -> impl Future<Output = std::io::Result<Vec<u8>>> + Send {
        tokio::fs::read(path.to_path_buf())
    }
}

/// Read one file and encode it as a data URI entry.
pub async fn read_entry<S: FileSource>(
    source: &S,
    path: &Path,
    config: &UploadConfig,
) -> UploadResult<ImageEntry> {
    let read_error = |source| UploadError::Read {
        path: path.to_path_buf(),
        source,
    };

    let reported = source.len(path).await.map_err(read_error)?;
    check_size(path, reported, config)?;

    let bytes = source.read(path).await.map_err(read_error)?;

    if bytes.is_empty() {
        return Err(UploadError::Empty {
            path: path.to_path_buf(),
        });
    }

    // The file may have grown since it was measured
    let size = bytes.len() as u64;
    check_size(path, size, config)?;

    let mime = sniff_image_mime(&bytes).ok_or_else(|| UploadError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    tracing::debug!("Read {} ({} bytes, {})", name, size, mime);
    Ok(ImageEntry::new(name, DataUri::encode(mime, &bytes)))
}

fn check_size(path: &Path, size: u64, config: &UploadConfig) -> UploadResult<()> {
    match config.max_bytes {
        Some(limit) if !config.allows_size(size) => Err(UploadError::TooLarge {
            path: path.to_path_buf(),
            size,
            limit,
        }),
        _ => Ok(()),
    }
}

/// Everything one selection event produced.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Decoded entries, in the order the files were selected
    pub entries: Vec<ImageEntry>,
    /// Files that could not be turned into entries
    pub failures: Vec<UploadError>,
}

impl BatchOutcome {
    /// `previous ++ entries`, or `None` when nothing decoded.
    pub fn apply(&self, previous: &ImageList) -> Option<ImageList> {
        if self.entries.is_empty() {
            return None;
        }
        Some(previous.appended(self.entries.iter().cloned()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.failures.is_empty()
    }
}

/// In-flight counter over the reads of one selection.
///
/// Each read owns a slot. Completions fill their slot in any order; the
/// outcome is released exactly once, when the counter reaches zero.
#[derive(Debug)]
pub struct UploadBatch {
    slots: Vec<Option<UploadResult<ImageEntry>>>,
    orphaned: Vec<UploadError>,
    in_flight: usize,
}

impl UploadBatch {
    pub fn new(count: usize) -> Self {
        Self {
            slots: (0..count).map(|_| None).collect(),
            orphaned: Vec::new(),
            in_flight: count,
        }
    }

    /// Reads still outstanding
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn is_done(&self) -> bool {
        self.in_flight == 0
    }

    /// Record the result for `slot`.
    ///
    /// Returns the outcome when this was the last outstanding read. Repeated
    /// or out-of-range slots are ignored.
    pub fn complete(&mut self, slot: usize, result: UploadResult<ImageEntry>) -> Option<BatchOutcome> {
        let in_flight = self.in_flight;
        let Some(cell) = self.slots.get_mut(slot) else {
            tracing::warn!("Ignoring completion for unknown slot {}", slot);
            return None;
        };
        if cell.is_some() || in_flight == 0 {
            tracing::warn!("Ignoring repeated completion for slot {}", slot);
            return None;
        }
        *cell = Some(result);
        self.settle()
    }

    /// Record a read that ended without reporting its slot (task panic).
    pub fn abandon(&mut self, error: UploadError) -> Option<BatchOutcome> {
        if self.in_flight == 0 {
            return None;
        }
        self.orphaned.push(error);
        self.settle()
    }

    fn settle(&mut self) -> Option<BatchOutcome> {
        self.in_flight -= 1;
        if self.in_flight > 0 {
            return None;
        }

        let mut outcome = BatchOutcome::default();
        for result in self.slots.drain(..).flatten() {
            match result {
                Ok(entry) => outcome.entries.push(entry),
                Err(e) => outcome.failures.push(e),
            }
        }
        outcome.failures.append(&mut self.orphaned);
        Some(outcome)
    }
}

/// Read every selected file concurrently and collect them in selection order.
pub async fn read_selection<S: FileSource>(
    source: S,
    paths: Vec<PathBuf>,
    config: &UploadConfig,
) -> BatchOutcome {
    let mut batch = UploadBatch::new(paths.len());
    if batch.is_done() {
        return BatchOutcome::default();
    }

    tracing::info!("Reading {} selected file(s)", paths.len());

    let mut tasks = JoinSet::new();
    for (slot, path) in paths.into_iter().enumerate() {
        let source = source.clone();
        let config = config.clone();
        tasks.spawn(async move { (slot, read_entry(&source, &path, &config).await) });
    }

    while let Some(joined) = tasks.join_next().await {
        let settled = match joined {
            Ok((slot, result)) => {
                if let Err(ref e) = result {
                    tracing::warn!("Upload failed: {}", e);
                }
                batch.complete(slot, result)
            }
            Err(e) => {
                tracing::warn!("Read task failed: {}", e);
                batch.abandon(UploadError::Task(e.to_string()))
            }
        };

        if let Some(outcome) = settled {
            tracing::info!(
                "Selection complete: {} decoded, {} failed",
                outcome.entries.len(),
                outcome.failures.len()
            );
            return outcome;
        }
    }

    // Every spawned task reports exactly once, so the loop above settles.
    BatchOutcome::default()
}
