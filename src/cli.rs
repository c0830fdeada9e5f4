//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;

use crate::commands;
use git_organize::defaults;

/// git-organize - Organize flat directories of git checkouts by their remotes
#[derive(Parser, Debug)]
#[command(name = "git-organize")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
pub struct Cli {
    /// Subcommand to execute; organizes the given directories when omitted
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    organize: commands::organize::OrganizeArgs,

    /// Colorize output (always, never, auto)
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(
        long,
        value_name = "LEVEL",
        env = "GIT_ORGANIZE_LOG",
        default_value = defaults::LOG_LEVEL
    )]
    log_level: LevelFilter,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(self.log_level);

        match self.command {
            Some(Commands::Completions(args)) => commands::completions::execute(args),
            None => commands::organize::execute(self.organize, &self.color),
        }
    }
}

/// Send log records to stderr at the requested level
fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}
