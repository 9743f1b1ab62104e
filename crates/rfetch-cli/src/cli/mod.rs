//! CLI for the rfetch reliable fetcher.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rfetch_core::config;
use std::path::PathBuf;

use commands::{run_add_item, run_fetch, run_find_items, run_init_db};

/// Top-level CLI for the rfetch reliable fetcher.
#[derive(Debug, Parser)]
#[command(name = "rfetch")]
#[command(about = "rfetch: HTTP fetch with bounded retries and backoff", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch a URL, retrying transient failures, and print or save the body.
    Fetch {
        /// Direct HTTP/HTTPS URL to fetch.
        url: String,
        /// Write the payload to this file instead of stdout.
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Override the configured attempt budget.
        #[arg(long, value_name = "N")]
        max_attempts: Option<u32>,
        /// Override the configured per-attempt timeout, in seconds.
        #[arg(long, value_name = "SECS")]
        timeout_secs: Option<u64>,
    },

    /// Create the item database schema (safe to run repeatedly).
    InitDb,

    /// Insert a single item into the item database.
    AddItem {
        /// Unique item identifier.
        item_id: i64,
        /// Owning user.
        user_id: i64,
        /// Item title.
        title: String,
        /// Item description.
        description: String,
    },

    /// List items matching user, title, and description exactly.
    FindItems {
        /// Owning user.
        user_id: i64,
        /// Item title.
        title: String,
        /// Item description.
        description: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch {
                url,
                output,
                max_attempts,
                timeout_secs,
            } => {
                run_fetch(&cfg, &url, output.as_deref(), max_attempts, timeout_secs).await?;
            }
            CliCommand::InitDb => run_init_db(&cfg).await?,
            CliCommand::AddItem {
                item_id,
                user_id,
                title,
                description,
            } => run_add_item(&cfg, item_id, user_id, &title, &description).await?,
            CliCommand::FindItems {
                user_id,
                title,
                description,
            } => run_find_items(&cfg, user_id, &title, &description).await?,
        }

        Ok(())
    }
}
