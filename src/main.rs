//! CLI entry point for the mediabank book downloader.

use anyhow::Result;
use clap::Parser;
use mediabank_dl::Config;
use tracing::{debug, info};

mod cli;
mod term_progress;

use cli::Args;
use term_progress::TerminalProgress;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (warn)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");

    if !args.quiet {
        println!(
            "mediabank-dl v{} - provided freely for personal, educational use.",
            env!("CARGO_PKG_VERSION")
        );
        println!("This project is not endorsed by or affiliated with the catalog provider.");
        println!();
    }

    let mut config = Config::new(args.api_key, args.output_dir)
        .with_page_size(args.page_size)
        .with_zoom_level(args.zoom_level);
    if !args.search_filter.is_empty() {
        config = config.with_search_filter(args.search_filter);
    }

    tokio::fs::create_dir_all(&config.downloads_root).await?;

    let progress = TerminalProgress::new();
    let stats = mediabank_dl::run(&config, &progress).await?;
    progress.finish();

    info!(
        downloaded = stats.downloaded(),
        pages = stats.pages_written(),
        skipped = stats.skipped_existing(),
        unavailable = stats.unavailable(),
        failed = stats.failed(),
        "Download complete"
    );
    if !args.quiet {
        println!(
            "Done: {} downloaded, {} already present, {} unavailable, {} failed.",
            stats.downloaded(),
            stats.skipped_existing(),
            stats.unavailable(),
            stats.failed()
        );
    }

    Ok(())
}
