//! Command-line interface for the "we go together" source
//!
//! Mostly a development and debugging aid: each subcommand exercises one of
//! the host-facing operations and prints the result as plain text.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wegotogether_source::catalog::BASE_URL;
use wegotogether_source::WeGoTogether;

/// A content source for the "we go together" webcomic
#[derive(Parser, Debug)]
#[command(name = "wegotogether-source")]
#[command(version = "1.0.0")]
#[command(about = "Scrapes the we go together archive", long_about = None)]
struct Cli {
    /// Base URL of the site (override for mirrors or local testing)
    #[arg(long, default_value = BASE_URL)]
    base_url: String,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the fixed manga metadata
    Info,
    /// Search the (single-entry) catalog
    Search {
        /// Search query
        query: String,
    },
    /// Crawl the whole archive and print the chapter list
    Chapters,
    /// Print the page image URLs of one chapter
    Pages {
        /// Chapter URL (site-relative or absolute)
        chapter_url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let source = WeGoTogether::with_base_url(&cli.base_url)?;

    match cli.command {
        Command::Info => {
            let manga = source.manga();
            println!("title:       {}", manga.title);
            println!("author:      {}", manga.author);
            println!("status:      {:?}", manga.status);
            println!("url:         {}", manga.url);
            println!("thumbnail:   {}", manga.thumbnail_url);
            println!("description: {}", manga.description);
        }
        Command::Search { query } => {
            let results = source.search(&query);
            if results.is_empty() {
                println!("no results");
            }
            for manga in results {
                println!("{} ({})", manga.title, manga.url);
            }
        }
        Command::Chapters => {
            let chapters = source.chapter_list().await?;
            for chapter in &chapters {
                println!("{}\t{}", chapter.title, chapter.url);
            }
            tracing::info!("{} chapters", chapters.len());
        }
        Command::Pages { chapter_url } => {
            let pages = source.page_list(&chapter_url).await?;
            for page in &pages {
                println!("{}\t{}", page.index, page.url);
            }
        }
    }

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("wegotogether_source=info,warn"),
            1 => EnvFilter::new("wegotogether_source=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
