//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific
//! modules.

mod documents;
mod import;
mod init;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{LoadOptions, Settings};

#[derive(Parser)]
#[command(name = "arkiv")]
#[command(about = "Document archive management system")]
#[command(version)]
pub struct Cli {
    /// Database file path (overrides config file)
    #[arg(long, short = 't', global = true)]
    database: Option<PathBuf>,

    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database schema
    Init,

    /// Populate an empty database with demo documents and archives
    Seed {
        /// Number of documents to generate
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,
    },

    /// Import documents from a JSON export file
    Import {
        /// Path to a JSON array of documents
        file: PathBuf,
    },

    /// Start the web server
    Serve {
        /// Bind address: port, host, or host:port (overrides config)
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// List documents
    List {
        /// Free-text search over number, title, and description
        #[arg(short, long)]
        q: Option<String>,

        /// Archive id to include (repeatable)
        #[arg(short, long = "archive")]
        archives: Vec<String>,

        /// Contributor name to include (repeatable)
        #[arg(long = "contributor")]
        contributors: Vec<String>,

        /// Document date range start (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Document date range end (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Expiry window id (m-N, w-N, or d-N; repeatable)
        #[arg(long = "expires-in")]
        expires_in: Vec<String>,

        /// Sort as field:dir (e.g. title:asc)
        #[arg(short, long)]
        sort: Option<String>,

        /// Page number (1-indexed)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Items per page
        #[arg(short = 'P', long, default_value = "10")]
        per_page: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parse arguments and dispatch to the matching command.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = LoadOptions {
        config: cli.config.clone(),
        database: cli.database.clone(),
    };
    let settings = Settings::load(&options)?;

    match cli.command {
        Commands::Init => init::cmd_init(&settings),
        Commands::Seed { count } => init::cmd_seed(&settings, count),
        Commands::Import { file } => import::cmd_import(&settings, &file).await,
        Commands::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| settings.bind.clone());
            serve::cmd_serve(&settings, &bind).await
        }
        Commands::List {
            q,
            archives,
            contributors,
            from,
            to,
            expires_in,
            sort,
            page,
            per_page,
            json,
        } => {
            let args = documents::ListArgs {
                q,
                archives,
                contributors,
                from,
                to,
                expires_in,
                sort,
                page,
                per_page,
                json,
            };
            documents::cmd_list(&settings, args).await
        }
    }
}
