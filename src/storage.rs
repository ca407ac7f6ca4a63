//! # Line Store
//!
//! Whole-file, line-oriented persistence. A store is a single text file read
//! as a list of trimmed, non-blank lines and replaced wholesale on write.
//!
//! The [`LineStore`] trait is the seam the queue service is written against,
//! so tests can swap in stores that fail on demand. [`FileStorage`] is the
//! only production implementation.

use crate::error::StorageError;
use log::debug;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Read-all / write-all access to a list of lines.
pub trait LineStore {
    /// Location this store reads from and writes to.
    fn path(&self) -> &Path;

    /// Returns every non-blank line, trimmed, in file order.
    ///
    /// A file that does not exist reads as empty.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] when the file exists but cannot be read.
    fn read_all(&self) -> Result<Vec<String>, StorageError>;

    /// Replaces the file content with `lines`, one per line.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::CreateDir`] or [`StorageError::Write`] when the
    /// file cannot be replaced. The previous content is kept in that case.
    fn write_all(&self, lines: &[String]) -> Result<(), StorageError>;
}

/// A [`LineStore`] backed by a plain UTF-8 text file.
///
/// Writes replace the file atomically but keep its mode, and go through a
/// symlink to the file it points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File a write should land in. An existing symlink is followed so the
    /// link itself survives the replace.
    fn write_target(&self) -> io::Result<PathBuf> {
        match fs::canonicalize(&self.path) {
            Ok(resolved) => Ok(resolved),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(self.path.clone()),
            Err(e) => Err(e),
        }
    }
}

/// Directory that holds `path`. A bare file name lives in `.`.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Mode the replacement file should carry: the current file's, or the usual
/// `0644` for a new file.
fn permissions_for(target: &Path) -> Option<fs::Permissions> {
    match fs::metadata(target) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => new_file_permissions(),
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}

impl LineStore for FileStorage {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<String>, StorageError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("{} does not exist yet, reading as empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        // Bytes that are not UTF-8 become U+FFFD instead of failing the read.
        let lines: Vec<String> = String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();

        debug!("Read {} lines from {}", lines.len(), self.path.display());
        Ok(lines)
    }

    fn write_all(&self, lines: &[String]) -> Result<(), StorageError> {
        let dir = parent_dir(&self.path);
        fs::create_dir_all(dir).map_err(|source| StorageError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let write_err = |source: io::Error| StorageError::Write {
            path: self.path.clone(),
            source,
        };

        let target = self.write_target().map_err(write_err)?;
        let target_dir = parent_dir(&target);
        let permissions = permissions_for(&target);

        // Staged next to the target so the final rename stays on one filesystem.
        let staged = NamedTempFile::new_in(target_dir).map_err(write_err)?;
        {
            let mut writer = BufWriter::new(staged.as_file());
            for line in lines {
                writeln!(writer, "{line}").map_err(write_err)?;
            }
            writer.flush().map_err(write_err)?;
        }
        if let Some(permissions) = permissions {
            staged.as_file().set_permissions(permissions).map_err(write_err)?;
        }
        staged.as_file().sync_all().map_err(write_err)?;
        staged.persist(&target).map_err(|e| write_err(e.error))?;

        debug!("Wrote {} lines to {}", lines.len(), target.display());
        Ok(())
    }
}
