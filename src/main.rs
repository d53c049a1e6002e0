//! whereabouts — personal item catalog with fuzzy name search
//!
//! Stores item names with a location and an owner in a single SQLite table
//! and answers approximate-name searches over them.
//!
//! Commands:
//! - `serve` - run the HTTP server
//! - `init` - create the items table and seed sample data

mod api;
mod cli;
mod config;
mod error;
mod search;
mod store;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use store::Store;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity flags
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr) // Log to stderr to keep stdout clean
        .init();

    match cli.command {
        Some(Commands::Serve(args)) => {
            let config = Config::from_args(&args)?;
            api::serve(config).await
        }
        Some(Commands::Init(args)) => {
            let store = Store::open(&args.db)?;
            let inserted = store.seed_sample_data()?;
            println!("Database initialized successfully ({} items).", inserted);
            Ok(())
        }
        None => {
            eprintln!("Error: No command specified. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}
