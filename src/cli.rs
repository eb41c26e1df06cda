//! CLI argument parsing and types.
//!
//! Defines the command-line interface using clap.

use clap::Parser;
use std::path::PathBuf;

// -----------------------------------------------------------------------------
// Types
// -----------------------------------------------------------------------------

/// Command-line arguments.
#[derive(Parser)]
#[command(name = "teatime")]
#[command(about = "A tea-brewing timer with a countdown bar and a desktop notification.")]
#[command(version)]
pub struct Args {
    /// Tea to prepare: either a name or a numeric ID (see --list)
    pub tea: Option<String>,

    /// Steep duration, e.g. 90s or 3m (overrides the tea's default); +90s / -30s adjust it
    #[arg(short, long, allow_hyphen_values = true)]
    pub duration: Option<String>,

    /// List all available teas and exit
    #[arg(short, long)]
    pub list: bool,

    /// Path to a JSON file with tea definitions
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}
