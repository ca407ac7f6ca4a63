//! # Configuration Module
//!
//! Resolves where the queue lives. The default is a hidden directory in the
//! user's home; any command can point elsewhere with `--queue` or the
//! `TOLISTEN_QUEUE` environment variable.
//!
//! - Linux/macOS: `~/.tolisten/queue.txt`
//! - Windows: `%USERPROFILE%\.tolisten\queue.txt`
//!
//! The archive of picked albums sits beside the queue file as `archive.txt`.
//! Resolution happens once, in the binary; the library only ever receives
//! explicit paths.

use path_absolutize::Absolutize;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the data directory inside the home directory.
pub const DATA_DIR_NAME: &str = ".tolisten";

/// Name of the queue file inside the data directory.
pub const QUEUE_FILE_NAME: &str = "queue.txt";

/// Environment variable that overrides the default queue location.
pub const QUEUE_PATH_ENV: &str = "TOLISTEN_QUEUE";

/// Returns the default queue file path.
///
/// Falls back to `.tolisten/queue.txt` relative to the working directory when
/// no home directory can be determined. Directories are not created here;
/// the first write does that.
///
/// # Examples
///
/// ```
/// use tolisten::config::default_queue_path;
///
/// let path = default_queue_path();
/// assert!(path.ends_with(".tolisten/queue.txt"));
/// ```
#[must_use]
pub fn default_queue_path() -> PathBuf {
    queue_path_in(dirs::home_dir())
}

fn queue_path_in(home: Option<PathBuf>) -> PathBuf {
    match home {
        Some(home) => home.join(DATA_DIR_NAME).join(QUEUE_FILE_NAME),
        None => {
            log::warn!("Could not determine home directory, using ./{DATA_DIR_NAME}");
            PathBuf::from(DATA_DIR_NAME).join(QUEUE_FILE_NAME)
        }
    }
}

/// Absolute form of `path` for messages. Returns `path` unchanged if it
/// cannot be resolved.
#[must_use]
pub fn display_path(path: &Path) -> PathBuf {
    path.absolutize()
        .map(|p| p.into_owned())
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Configuration for runtime behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Path to the queue file
    pub queue_path: PathBuf,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            queue_path: default_queue_path(),
        }
    }
}

impl RuntimeConfig {
    /// Uses `queue_path` when given, the default location otherwise.
    #[must_use]
    pub fn resolve(queue_path: Option<PathBuf>) -> Self {
        queue_path.map_or_else(Self::default, Self::with_queue_path)
    }

    /// Create configuration with explicit queue path
    #[must_use]
    pub fn with_queue_path(queue_path: PathBuf) -> Self {
        Self { queue_path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_queue_path_structure() {
        let path = default_queue_path();

        assert_eq!(path.file_name().unwrap(), QUEUE_FILE_NAME);
        let parent = path.parent().expect("Should have parent directory");
        assert_eq!(parent.file_name().unwrap(), DATA_DIR_NAME);
    }

    #[test]
    fn test_default_queue_path_consistent_results() {
        assert_eq!(default_queue_path(), default_queue_path());
    }

    #[test]
    fn test_home_fallback_is_relative() {
        let path = queue_path_in(None);
        assert_eq!(path, PathBuf::from(".tolisten").join("queue.txt"));
        assert!(path.is_relative());
    }

    #[test]
    fn test_home_is_used_when_known() {
        let path = queue_path_in(Some(PathBuf::from("/home/listener")));
        assert_eq!(path, PathBuf::from("/home/listener/.tolisten/queue.txt"));
    }

    #[test]
    fn test_resolve_prefers_explicit_path() {
        let config = RuntimeConfig::resolve(Some(PathBuf::from("/tmp/custom/queue.txt")));
        assert_eq!(config.queue_path, PathBuf::from("/tmp/custom/queue.txt"));

        assert_eq!(RuntimeConfig::resolve(None), RuntimeConfig::default());
    }

    #[test]
    fn test_display_path_is_absolute() {
        let shown = display_path(Path::new("queue.txt"));
        assert!(shown.is_absolute());
        assert!(shown.ends_with("queue.txt"));
    }

    #[test]
    fn test_runtime_config_json_round_trip() {
        let config = RuntimeConfig::with_queue_path(PathBuf::from("/tmp/custom/queue.txt"));

        let json = serde_json::to_string(&config).expect("config serializes");
        let parsed: RuntimeConfig = serde_json::from_str(&json).expect("config deserializes");

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_runtime_config_from_json() {
        let parsed: RuntimeConfig =
            serde_json::from_str(r#"{"queue_path":"/srv/music/queue.txt"}"#).expect("valid config");
        assert_eq!(parsed.queue_path, PathBuf::from("/srv/music/queue.txt"));
    }
}
