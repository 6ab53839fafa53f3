//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hatdaily")]
#[command(about = "Three-pane daily, monthly and yearly journal for a markdown vault", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize hatdaily in a vault
    Init {
        /// Vault directory (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Vault-relative folder holding the journal notes
        #[arg(short, long)]
        folder: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key; empty clears optional keys)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Open the previous, current and parent period notes side by side
    View {
        /// Granularity (daily, monthly, yearly)
        #[arg(default_value = "daily")]
        granularity: String,

        /// Print the pane layout instead of launching the editor
        #[arg(short, long)]
        print: bool,
    },

    /// Move last month's notes into <folder>/<year>/<month>
    Archive,
}
