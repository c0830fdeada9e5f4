//! Organize command implementation
//!
//! The default command. Every directory argument is a flat directory whose
//! immediate subdirectories are git checkouts; each checkout is staged,
//! placed under the destination by its remotes, and its staged copy removed.
//!
//! A repository that fails is logged and the run moves on to the next one.
//! The process exits non-zero at the end if anything failed.

use anyhow::Result;
use clap::Args;
use log::error;
use std::path::PathBuf;

use git_organize::config::{Config, RemoteStrategy};
use git_organize::defaults;
use git_organize::organize::{Organizer, Summary};
use git_organize::output::OutputConfig;

/// Arguments for organizing flat directories of checkouts
#[derive(Args, Debug)]
pub struct OrganizeArgs {
    /// Flat directories whose subdirectories are the repositories to organize
    #[arg(value_name = "DIR", required = true)]
    pub dirs: Vec<PathBuf>,

    /// The top level directory where the repos will be organized into
    #[arg(
        short,
        long,
        value_name = "PATH",
        env = "GIT_ORGANIZE_DESTINATION",
        default_value = defaults::DESTINATION
    )]
    pub destination: PathBuf,

    /// The directory (absolute or relative to destination) where repos are staged before being organized
    #[arg(
        short,
        long,
        value_name = "PATH",
        env = "GIT_ORGANIZE_STAGE",
        default_value = defaults::STAGE
    )]
    pub stage: PathBuf,

    /// The directory (absolute or relative to destination) where repos that could not be organized are placed
    #[arg(
        short,
        long,
        value_name = "PATH",
        env = "GIT_ORGANIZE_QUARANTINE",
        default_value = defaults::QUARANTINE
    )]
    pub quarantine: PathBuf,

    /// Remotes to include when organizing repos; if not given all are included
    #[arg(short, long = "include-remotes", value_name = "REMOTE", value_delimiter = ',')]
    pub include_remotes: Vec<String>,

    /// Remotes to exclude when organizing repos; ignored when --include-remotes is given
    #[arg(short, long = "exclude-remotes", value_name = "REMOTE", value_delimiter = ',')]
    pub exclude_remotes: Vec<String>,

    /// Strategy for repos with multiple remotes: origin, symlink or quarantine (default: quarantine)
    #[arg(short, long, value_name = "STRATEGY", env = "GIT_ORGANIZE_REMOTE_STRATEGY")]
    pub remote_strategy: Option<RemoteStrategy>,

    /// Show where repositories would go without making changes
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

impl OrganizeArgs {
    fn to_config(&self) -> Config {
        Config {
            destination: self.destination.clone(),
            stage: self.stage.clone(),
            quarantine: self.quarantine.clone(),
            include_remotes: self.include_remotes.clone(),
            exclude_remotes: self.exclude_remotes.clone(),
            remote_strategy: self.remote_strategy.unwrap_or_default(),
            dry_run: self.dry_run,
        }
    }
}

/// Execute the organize command
pub fn execute(args: OrganizeArgs, color: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color);
    let organizer = Organizer::new(args.to_config());

    let mut summary = Summary::default();
    let mut unreadable = 0;
    for dir in &args.dirs {
        match organizer.organize_dir(dir) {
            Ok(dir_summary) => summary.merge(dir_summary),
            Err(e) => {
                error!("could not read dir '{}': {}", dir.display(), e);
                unreadable += 1;
            }
        }
    }

    print_summary(&out, &summary, args.dry_run);

    if !summary.is_success() || unreadable > 0 {
        anyhow::bail!(
            "{} repo(s) could not be organized, {} dir(s) could not be read",
            summary.failed.len(),
            unreadable
        );
    }

    Ok(())
}

fn print_summary(out: &OutputConfig, summary: &Summary, dry_run: bool) {
    if dry_run {
        println!("{} Dry run, no changes were made", out.emoji("🔎", "[DRY RUN]"));
        for (repo, placement) in &summary.organized {
            println!("   {} -> {}", repo.display(), placement.primary.display());
            for alias in &placement.aliases {
                println!("      link {}", alias.display());
            }
        }
    }

    for failure in &summary.failed {
        println!(
            "{} {}: {}",
            out.emoji("❌", "[FAILED]"),
            failure.repo.display(),
            failure.error
        );
    }

    let marker = if summary.is_success() {
        out.emoji("✅", "[OK]")
    } else {
        out.emoji("⚠️", "[WARN]")
    };
    println!(
        "{} {} organized, {} skipped, {} failed",
        marker,
        out.count(summary.organized.len(), false),
        out.count(summary.skipped.len(), false),
        out.count(summary.failed.len(), true),
    );
}
