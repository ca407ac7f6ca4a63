//! # tolisten - Albums To Listen To
//!
//! Command-line front end for the album queue. Each run performs exactly one
//! queue operation against the queue file and exits.
//!
//! ## Usage
//!
//! ```bash
//! # Add albums
//! tolisten add "The Beatles - Abbey Road"
//! tolisten import my-albums.txt
//!
//! # Pick something to listen to
//! tolisten next
//!
//! # Inspect the queue
//! tolisten list
//! tolisten count
//! ```

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::{debug, info};
use tolisten::cli::{self, Command};
use tolisten::completion;
use tolisten::config::{display_path, RuntimeConfig};
use tolisten::{QueueError, QueueService};

/// Main entry point for tolisten.
///
/// Logging is controlled via `RUST_LOG`, e.g. `RUST_LOG=debug tolisten next`.
/// Errors are printed by `anyhow` and exit with status 1. A duplicate `add`
/// is informational and exits with status 0.
fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Args::parse();
    let config = RuntimeConfig::resolve(args.queue);
    debug!(
        "Runtime config: {}",
        serde_json::to_string(&config).context("Failed to serialize runtime config")?
    );

    let mut service = QueueService::new(&config.queue_path);

    match args.command {
        Command::Add { album } => match service.add_album(&album) {
            Ok(()) => {
                println!("Successfully added album: '{album}'");
                print_queue_location(&config);
            }
            Err(QueueError::DuplicateAlbum(existing)) => {
                info!("Ignoring duplicate '{existing}'");
                println!("Info: Album '{existing}' already exists in queue");
            }
            Err(e) => return Err(e.into()),
        },
        Command::Import { file, json } => {
            if !json {
                println!("Importing albums from '{}'...", display_path(&file).display());
            }

            let summary = service.import_albums(&file)?;

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&summary).context("Failed to serialize import summary")?
                );
            } else if summary.total() == 0 {
                println!("No albums found in import file.");
            } else {
                println!(
                    "Import complete! Added {} albums, Skipped {} duplicates, Skipped {} invalid",
                    summary.added, summary.skipped_duplicate, summary.skipped_invalid
                );
                print_queue_location(&config);
            }
        }
        Command::Next => {
            let album = service.get_next_album()?;
            println!("Now listening: {album}");
        }
        Command::List { json } => {
            let albums = service.list_albums()?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&albums).context("Failed to serialize queue")?
                );
            } else if albums.is_empty() {
                println!("Queue is empty.");
            } else {
                for (i, album) in albums.iter().enumerate() {
                    println!("{}. {album}", i + 1);
                }
            }
        }
        Command::Count => {
            let count = service.count_albums()?;
            let noun = if count == 1 { "album" } else { "albums" };
            println!("{count} {noun} in queue");
        }
        Command::Completion { shell } => {
            let mut cmd = cli::Args::command();
            completion::generate_completions(completion::shell_to_completion_shell(&shell), &mut cmd);
        }
    }

    Ok(())
}

fn print_queue_location(config: &RuntimeConfig) {
    println!("Queue saved to: {}", display_path(&config.queue_path).display());
}
