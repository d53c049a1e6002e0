//! CLI mode implementation
//!
//! Command-line interface for running the server and initializing the catalog

use clap::{Parser, Subcommand};

/// Whereabouts CLI
#[derive(Parser)]
#[command(name = "whereabouts")]
#[command(about = "Personal item catalog with fuzzy name search", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output (no short flag to avoid conflicts)
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),
    /// Create the items table and seed sample data
    Init(InitArgs),
}

/// Serve command arguments
#[derive(Parser, Debug, Clone)]
pub struct ServeArgs {
    /// Address to bind the HTTP server to
    #[arg(short = 'b', long, default_value = "127.0.0.1:5000")]
    pub bind: String,

    /// Path to the SQLite database file
    #[arg(short = 'd', long, env = "WHEREABOUTS_DB", default_value = "items.db")]
    pub db: String,
}

/// Init command arguments
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Path to the SQLite database file
    #[arg(short = 'd', long, env = "WHEREABOUTS_DB", default_value = "items.db")]
    pub db: String,
}
