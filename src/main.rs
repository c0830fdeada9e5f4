//! # git-organize CLI
//!
//! This is the binary entry point for the `git-organize` command-line tool.
//!
//! It parses arguments with `clap`, sets up logging, and hands off to the
//! command implementations. The organizing logic lives in the `git_organize`
//! library crate so the binary stays a thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
