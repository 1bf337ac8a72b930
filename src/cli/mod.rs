//! CLI argument parsing for bertha
//!
//! Global flags: --root, --config, --rubric, --state, --format, --quiet, --verbose

pub mod output;
pub mod paths;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;

/// Bertha - step through student submissions and mark them against a rubric
#[derive(Parser, Debug)]
#[command(name = "bertha")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory containing the sNNNN submission folders
    #[arg(long, global = true, env = "BERTHA_ROOT")]
    pub root: Option<PathBuf>,

    /// Marking config file (default: <root>/bertha.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Rubric definition file, overriding the config
    #[arg(long, global = true)]
    pub rubric: Option<PathBuf>,

    /// Marking state file, overriding the config
    #[arg(long, global = true)]
    pub state: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. info, bertha_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show marking progress for the submission root
    Status,

    /// Validate and print the rubric
    Rubric,

    /// Start an interactive marking session
    Mark(MarkArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct MarkArgs {
    /// Editor command used to open submissions (e.g. "code -n")
    #[arg(long, conflicts_with = "no_editor")]
    pub editor: Option<String>,

    /// Never launch an editor
    #[arg(long)]
    pub no_editor: bool,
}
