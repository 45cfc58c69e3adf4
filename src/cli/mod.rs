//! CLI definitions using clap derive API
//!
//! Submodules hold each command's argument types:
//! - launch: Launch command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod launch;

pub use completions::CompletionsArgs;
pub use launch::LaunchArgs;

/// Freshstart - self-updating application launcher
///
/// Keeps a git checkout and its Python packages current, then starts the app.
#[derive(Parser, Debug)]
#[command(
    name = "freshstart",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Self-updating application launcher",
    long_about = "Freshstart syncs an application's git checkout with its remote, installs its \
                  Python requirements when anything changed, and then starts the application. \
                  An interrupted or failed update is retried in full on the next launch.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  freshstart                        \x1b[90m# Update if needed, then start the app\x1b[0m\n   \
                  freshstart launch --no-start      \x1b[90m# Update only\x1b[0m\n   \
                  freshstart launch --reset-venv    \x1b[90m# Rebuild the venv, then start\x1b[0m\n   \
                  freshstart status                 \x1b[90m# Show whether an update is pending\x1b[0m\n   \
                  freshstart plan                   \x1b[90m# Show what would be installed\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Configuration file (defaults to repo.json in the working directory)
    #[arg(long, short = 'c', global = true, env = "FRESHSTART_CONFIG")]
    pub config: Option<PathBuf>,

    /// Working directory holding the marker and logs (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "FRESHSTART_WORKDIR")]
    pub workdir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The command to run; launching is the default
    pub fn command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Launch(LaunchArgs::default()))
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Update if needed, then start the application
    Launch(LaunchArgs),

    /// Show marker, staleness and whether the next launch would update
    Status,

    /// Show the install plan of the current checkout
    Plan,

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
