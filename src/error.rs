//! # Error Types
//!
//! Typed failures for the storage layer and the queue service. The binary
//! wraps these in `anyhow` at the edge; library callers can match on the
//! variants directly.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A failure of the line-oriented file store. Always carries the offending path.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    /// Path of the file or directory the failed operation touched.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::CreateDir { path, .. } | Self::Write { path, .. } => {
                path
            }
        }
    }
}

/// Everything a queue operation can fail with.
#[derive(Debug, Error)]
pub enum QueueError {
    /// Input does not have the `Artist - Album` shape.
    #[error("invalid album format: '{0}' (expected 'Artist - Album')")]
    InvalidFormat(String),

    /// Case-insensitive match against an album already queued.
    /// Holds the trimmed input exactly as given.
    #[error("album '{0}' already exists in queue")]
    DuplicateAlbum(String),

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("queue is empty")]
    QueueEmpty,

    /// Queue and archive resolve to the same file, so archiving would be undone.
    #[error("archive would overwrite the queue file {}", .0.display())]
    ArchiveIsQueue(PathBuf),

    /// The archive could not be updated. The queue file was left untouched.
    #[error("failed to archive album to {}", path.display())]
    ArchiveWriteFailed {
        path: PathBuf,
        #[source]
        source: StorageError,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),
}
