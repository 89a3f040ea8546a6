//! CLI module for Triage
//!
//! Command-line interface definitions and handlers for the triage engine.
//!
//! # Commands
//!
//! - `assign` - Run the assignment pass over a dataset
//! - `agents` - List agents from a dataset
//! - `tickets` - List tickets in processing order with extracted tags
//! - `tags` - Show the tags extracted from a title
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Assign with default file names
//! triage assign
//!
//! # Assign a specific dataset and show the decision table
//! triage assign --input tickets.json --output result.json --table
//!
//! # Inspect what the extractor sees in a title
//! triage tags "Reset-Password_Issue"
//! ```

pub mod agents;
pub mod assign;
pub mod completions;
pub mod config;
pub mod output;
pub mod tags;
pub mod tickets;

pub use completions::handle_completions;
pub use config::handle_config_init;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Triage - skill-matched, load-balanced ticket assignment
#[derive(Parser, Debug)]
#[command(
    name = "triage",
    version,
    about = "Assign support tickets to agents by skill match and load"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the assignment pass
    Assign(AssignArgs),
    /// List agents from a dataset
    Agents(AgentsArgs),
    /// List tickets in processing order
    Tickets(TicketsArgs),
    /// Show tags extracted from a title
    Tags(TagsArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct AssignArgs {
    /// Path to the input dataset
    #[arg(short, long, default_value = "dataset.json")]
    pub input: PathBuf,

    /// Path for the assignment results
    #[arg(short, long, default_value = "output_result.json")]
    pub output: PathBuf,

    /// Path to configuration file
    #[arg(short, long, default_value = "triage.toml")]
    pub config: PathBuf,

    /// Print the decisions as a table
    #[arg(long)]
    pub table: bool,

    /// Print the decisions as JSON to stdout as well
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct AgentsArgs {
    /// Path to the input dataset
    #[arg(short, long, default_value = "dataset.json")]
    pub input: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Filter by status (available, unavailable)
    #[arg(short, long)]
    pub status: Option<String>,
}

#[derive(Args, Debug)]
pub struct TicketsArgs {
    /// Path to the input dataset
    #[arg(short, long, default_value = "dataset.json")]
    pub input: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct TagsArgs {
    /// Ticket title to extract tags from
    pub title: String,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "triage.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
