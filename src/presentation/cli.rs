//! CLI Argument Parsing
//!
//! Global flags (--json, --verbose, -C, --config) are inherited by all
//! subcommands. Running without a subcommand deploys with defaults.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// gitship - deploy a Python project by committing and pushing it
#[derive(Parser, Debug)]
#[command(name = "gitship")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'gitship' without arguments to deploy the current directory.")]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Run as if started in DIR
    #[arg(short = 'C', long = "dir", value_name = "DIR", global = true)]
    pub dir: Option<PathBuf>,

    /// Read configuration from FILE instead of the lookup chain
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the deploy sequence (default)
    Deploy {
        /// Show what would run without running it
        #[arg(long)]
        dry_run: bool,

        /// Don't wait for a key press at the end
        #[arg(long)]
        no_pause: bool,

        /// Exit non-zero if any step failed
        #[arg(long)]
        strict: bool,

        /// Commit message (overrides config)
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Check that the tools and files a deploy needs are present
    Check,

    /// Write a gitship.toml with the default settings
    Init {
        /// Overwrite an existing gitship.toml
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// The command used when none is given
    pub fn default_deploy() -> Self {
        Commands::Deploy {
            dry_run: false,
            no_pause: false,
            strict: false,
            message: None,
        }
    }
}
