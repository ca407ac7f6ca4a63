//! A plain-text queue of albums you still want to hear.
//!
//! Albums are free-text `Artist - Album` strings kept one per line in a text
//! file. The queue can be filled one album at a time or in bulk from another
//! file, and drained by picking a random album, which is moved to an archive
//! file next to the queue.
//!
//! Core modules:
//! - [`queue`] - Queue operations (add, import, next, list, count)
//! - [`album`] - Format validation and case-insensitive duplicate detection
//! - [`storage`] - Whole-file line storage
//! - [`error`] - Typed errors for the above
//!
//! ### Supporting Modules
//!
//! - [`config`] - Default queue location and runtime configuration
//! - [`cli`] - Command-line interface definitions with clap integration
//! - [`completion`] - Shell completion generation
//!
//! ## Quick Start Example
//!
//! ```no_run
//! use tolisten::queue::QueueService;
//!
//! let mut queue = QueueService::new("/tmp/tolisten/queue.txt");
//! queue.add_album("The Beatles - Abbey Road")?;
//!
//! let summary = queue.import_albums(std::path::Path::new("albums.txt"))?;
//! println!("{} added, {} duplicates", summary.added, summary.skipped_duplicate);
//!
//! let album = queue.get_next_album()?;
//! println!("Now listening: {album}");
//! # Ok::<(), tolisten::error::QueueError>(())
//! ```
//!
//! ## Concurrency
//!
//! Each operation reads the queue, works in memory and writes the whole file
//! back. Two processes working on the same queue at once may race; there is
//! no locking.

pub mod album;
pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod queue;
pub mod storage;

pub use error::{QueueError, StorageError};
pub use queue::{ImportSummary, QueueService};
pub use storage::{FileStorage, LineStore};
