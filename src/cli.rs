//! # Command-Line Interface Module
//!
//! Clap derive definitions for the `tolisten` binary.
//!
//! ## Commands
//!
//! - `add`: Add a single album to the queue
//! - `import`: Import albums from a text file, one per line
//! - `next`: Pick a random album to listen to and archive it
//! - `list`: Show the queue in stored order
//! - `count`: Show how many albums are queued
//!
//! ## Examples
//!
//! ```bash
//! tolisten add "The Beatles - Abbey Road"
//! tolisten import my-albums.txt
//! tolisten next --queue /custom/path/queue.txt
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

/// Main application arguments structure.
#[derive(Parser, Debug)]
#[command(name = "tolisten")]
#[command(about = "Manage your queue of albums to listen to")]
#[command(version)]
pub struct Args {
    /// Path to queue file [default: ~/.tolisten/queue.txt]
    #[arg(long, global = true, env = "TOLISTEN_QUEUE", value_hint = clap::ValueHint::FilePath)]
    pub queue: Option<PathBuf>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Enumeration of all available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a single album to the queue
    ///
    /// The album must be written as "Artist - Album". Adding an album that is
    /// already queued (ignoring case) is reported and leaves the queue as is.
    Add {
        /// Album to add in 'Artist - Album' format
        album: String,
    },

    /// Import albums from a text file
    ///
    /// Reads one album per line. Blank lines are ignored, malformed lines and
    /// albums already in the queue are skipped and counted.
    Import {
        /// Path to text file containing album names (one per line)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        /// Print the import summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Get a random album from the queue
    ///
    /// The picked album is removed from the queue and appended to
    /// archive.txt next to the queue file.
    Next,

    /// List all albums in the queue
    List {
        /// Print the queue as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Show the number of albums in the queue
    Count,

    /// Generate shell completions
    ///
    /// Usage: tolisten completion bash > ~/.local/share/bash-completion/completions/tolisten
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
