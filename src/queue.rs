//! # Listening Queue
//!
//! Business rules for the to-listen queue. Every operation is one fresh
//! read-compute-write cycle against the queue file; nothing is cached
//! between calls.
//!
//! ## Invariants
//!
//! - No two queued entries are equal ignoring case and surrounding spaces.
//! - Every queued entry has the `Artist - Album` shape.
//! - A failed operation never leaves a partially written queue.
//!
//! ## Picking the next album
//!
//! [`QueueService::get_next_album`] touches two files. The archive is
//! updated first and the queue is only rewritten once that succeeded, so a
//! storage fault can leave an album in the queue but can never lose it.

use crate::album::{is_valid_format, DuplicateIndex};
use crate::error::{QueueError, StorageError};
use crate::storage::{FileStorage, LineStore};
use log::{debug, info, warn};
use rand::rngs::ThreadRng;
use rand::{thread_rng, Rng};
use serde::Serialize;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the archive kept next to the queue file.
pub const ARCHIVE_FILE_NAME: &str = "archive.txt";

/// Archive file name used when the queue file is itself called `archive.txt`.
pub const ALTERNATE_ARCHIVE_FILE_NAME: &str = "archive.picked.txt";

/// Outcome of a bulk import. Every non-blank source line lands in exactly one counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub added: usize,
    pub skipped_duplicate: usize,
    pub skipped_invalid: usize,
}

impl ImportSummary {
    /// Number of source lines that were considered.
    #[must_use]
    pub fn total(&self) -> usize {
        self.added + self.skipped_duplicate + self.skipped_invalid
    }
}

/// The queue together with its archive and a source of randomness.
pub struct QueueService<S = FileStorage, R = ThreadRng> {
    queue: S,
    archive: S,
    rng: R,
}

impl QueueService<FileStorage, ThreadRng> {
    /// Opens the queue stored at `queue_path`. The archive lives beside it.
    #[must_use]
    pub fn new(queue_path: impl Into<PathBuf>) -> Self {
        let queue_path = queue_path.into();
        let archive_path = Self::archive_path_for(&queue_path);
        Self::with_stores(
            FileStorage::new(queue_path),
            FileStorage::new(archive_path),
            thread_rng(),
        )
    }

    /// Archive location for a given queue file. Never the queue file itself.
    #[must_use]
    pub fn archive_path_for(queue_path: &Path) -> PathBuf {
        if queue_path.file_name() == Some(OsStr::new(ARCHIVE_FILE_NAME)) {
            queue_path.with_file_name(ALTERNATE_ARCHIVE_FILE_NAME)
        } else {
            queue_path.with_file_name(ARCHIVE_FILE_NAME)
        }
    }
}

impl<S: LineStore, R: Rng> QueueService<S, R> {
    pub fn with_stores(queue: S, archive: S, rng: R) -> Self {
        Self { queue, archive, rng }
    }

    #[must_use]
    pub fn queue_path(&self) -> &Path {
        self.queue.path()
    }

    #[must_use]
    pub fn archive_path(&self) -> &Path {
        self.archive.path()
    }

    /// Appends one album to the queue.
    ///
    /// The entry is stored trimmed, with its original casing.
    ///
    /// # Errors
    ///
    /// - [`QueueError::InvalidFormat`] if `raw` is not `Artist - Album`
    /// - [`QueueError::DuplicateAlbum`] if it matches a queued album ignoring case
    /// - [`QueueError::Storage`] if the queue cannot be read or written
    pub fn add_album(&self, raw: &str) -> Result<(), QueueError> {
        let mut albums = self.queue.read_all()?;
        let index = DuplicateIndex::from_albums(&albums);

        if !is_valid_format(raw) {
            return Err(QueueError::InvalidFormat(raw.to_string()));
        }

        let album = raw.trim();
        if index.contains(album) {
            return Err(QueueError::DuplicateAlbum(album.to_string()));
        }

        albums.push(album.to_string());
        self.queue.write_all(&albums)?;

        info!("Added '{album}' to {}", self.queue.path().display());
        Ok(())
    }

    /// Merges every valid, not-yet-queued line of `source` into the queue.
    ///
    /// Lines are checked in file order: format first, then duplicates against
    /// both the queue and earlier lines of the same file. A malformed line is
    /// only ever counted as invalid. New albums are appended in source order
    /// with a single write, and nothing is written when nothing was added.
    ///
    /// # Errors
    ///
    /// - [`QueueError::FileNotFound`] if `source` does not exist
    /// - [`QueueError::Storage`] if either file cannot be read, or the queue
    ///   cannot be written
    pub fn import_albums(&self, source: &Path) -> Result<ImportSummary, QueueError> {
        if !source.exists() {
            return Err(QueueError::FileNotFound(source.to_path_buf()));
        }

        let incoming = FileStorage::new(source).read_all()?;
        if incoming.is_empty() {
            debug!("{} has no albums to import", source.display());
            return Ok(ImportSummary::default());
        }

        let mut albums = self.queue.read_all()?;
        let mut index = DuplicateIndex::from_albums(&albums);
        let mut summary = ImportSummary::default();
        let mut to_add = Vec::new();

        for line in incoming {
            if !is_valid_format(&line) {
                debug!("Skipping malformed line '{line}'");
                summary.skipped_invalid += 1;
                continue;
            }
            if !index.insert(&line) {
                debug!("Skipping duplicate '{line}'");
                summary.skipped_duplicate += 1;
                continue;
            }
            to_add.push(line);
            summary.added += 1;
        }

        if !to_add.is_empty() {
            albums.extend(to_add);
            self.queue.write_all(&albums)?;
        }

        info!(
            "Imported from {}: {} added, {} duplicates, {} invalid",
            source.display(),
            summary.added,
            summary.skipped_duplicate,
            summary.skipped_invalid
        );
        Ok(summary)
    }

    /// Picks a random album, archives it, then removes it from the queue.
    ///
    /// # Errors
    ///
    /// - [`QueueError::ArchiveIsQueue`] if both stores point at the same file
    /// - [`QueueError::QueueEmpty`] if there is nothing to pick
    /// - [`QueueError::ArchiveWriteFailed`] if the archive cannot be updated;
    ///   the queue file is not touched in that case
    /// - [`QueueError::Storage`] if the queue cannot be read or rewritten
    pub fn get_next_album(&mut self) -> Result<String, QueueError> {
        // The queue write would clobber the archive entry.
        if same_file(self.queue.path(), self.archive.path()) {
            return Err(QueueError::ArchiveIsQueue(self.queue.path().to_path_buf()));
        }

        let mut albums = self.queue.read_all()?;
        if albums.is_empty() {
            return Err(QueueError::QueueEmpty);
        }

        let picked = self.rng.gen_range(0..albums.len());
        let album = albums.remove(picked);
        debug!("Picked entry {picked} of {}", albums.len() + 1);

        self.archive(&album)?;
        self.queue.write_all(&albums)?;

        info!("Next album: '{album}' ({} left)", albums.len());
        Ok(album)
    }

    /// Read-modify-write append to the archive.
    fn archive(&self, album: &str) -> Result<(), QueueError> {
        let archive_err = |source: StorageError| {
            warn!(
                "Could not archive '{album}' to {}, queue left unchanged",
                source.path().display()
            );
            QueueError::ArchiveWriteFailed {
                path: self.archive.path().to_path_buf(),
                source,
            }
        };

        let mut archived = self.archive.read_all().map_err(archive_err)?;
        archived.push(album.to_string());
        self.archive.write_all(&archived).map_err(archive_err)
    }

    /// Queued albums in stored order.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Storage`] if the queue file exists but cannot be read.
    pub fn list_albums(&self) -> Result<Vec<String>, QueueError> {
        Ok(self.queue.read_all()?)
    }

    /// Number of queued albums.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Storage`] if the queue file exists but cannot be read.
    pub fn count_albums(&self) -> Result<usize, QueueError> {
        Ok(self.queue.read_all()?.len())
    }
}

/// Whether two paths name the same file, following symlinks when both exist.
fn same_file(a: &Path, b: &Path) -> bool {
    a == b
        || matches!(
            (fs::canonicalize(a), fs::canonicalize(b)),
            (Ok(a), Ok(b)) if a == b
        )
}
