//! # Organize Configuration
//!
//! This module defines `Config`, the immutable input for a single organize
//! run, and `RemoteStrategy`, the policy applied to repositories that still
//! have more than one remote after filtering.
//!
//! ## Path Resolution
//!
//! The stage and quarantine directories may be given absolute, or relative
//! to the destination. `Config::stage_path` and `Config::quarantine_path`
//! return the resolved, lexically cleaned location.
//!
//! ## Remote Filtering
//!
//! `Config::is_remote_allowed` decides which remotes take part in placement.
//! A non-empty include list is authoritative and the exclude list is not
//! consulted at all. Otherwise every remote not in the exclude list is
//! allowed.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::defaults;
use crate::error::Error;
use crate::path::resolve_against;

/// How to place a repository that has more than one remote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemoteStrategy {
    /// Quarantine the repository. Selected by the empty string.
    #[default]
    Default,
    /// Place by the origin remote and ignore the rest.
    Origin,
    /// Place by the origin remote and symlink every other remote's path to it.
    Symlink,
    /// Quarantine the repository.
    Quarantine,
}

impl RemoteStrategy {
    /// The name accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            RemoteStrategy::Default => "",
            RemoteStrategy::Origin => "origin",
            RemoteStrategy::Symlink => "symlink",
            RemoteStrategy::Quarantine => "quarantine",
        }
    }
}

impl FromStr for RemoteStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(RemoteStrategy::Default),
            "origin" => Ok(RemoteStrategy::Origin),
            "symlink" => Ok(RemoteStrategy::Symlink),
            "quarantine" => Ok(RemoteStrategy::Quarantine),
            other => Err(Error::UnsupportedStrategy {
                strategy: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for RemoteStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteStrategy::Default => f.write_str("default"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Configuration for one organize run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Top-level directory repositories are organized into
    pub destination: PathBuf,

    /// Where repositories are copied before being placed. Relative paths are
    /// relative to `destination`. A staged copy is removed once its
    /// repository is placed, and left in place when anything fails.
    pub stage: PathBuf,

    /// Where repositories that cannot be placed by owner and name go.
    /// Relative paths are relative to `destination`.
    pub quarantine: PathBuf,

    /// Remotes to consider. When non-empty, only these remotes are used and
    /// `exclude_remotes` is ignored.
    pub include_remotes: Vec<String>,

    /// Remotes to ignore
    pub exclude_remotes: Vec<String>,

    pub remote_strategy: RemoteStrategy,

    /// Resolve and report placements without touching the filesystem
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            destination: PathBuf::from(defaults::DESTINATION),
            stage: PathBuf::from(defaults::STAGE),
            quarantine: PathBuf::from(defaults::QUARANTINE),
            include_remotes: Vec::new(),
            exclude_remotes: Vec::new(),
            remote_strategy: RemoteStrategy::Default,
            dry_run: false,
        }
    }
}

impl Config {
    /// Whether the remote with this name takes part in placement
    pub fn is_remote_allowed(&self, remote: &str) -> bool {
        if !self.include_remotes.is_empty() {
            return self.include_remotes.iter().any(|r| r == remote);
        }
        !self.exclude_remotes.iter().any(|r| r == remote)
    }

    /// The quarantine directory, resolved against the destination
    pub fn quarantine_path(&self) -> PathBuf {
        resolve_against(&self.destination, &self.quarantine)
    }

    /// The stage directory, resolved against the destination
    pub fn stage_path(&self) -> PathBuf {
        resolve_against(&self.destination, &self.stage)
    }

    /// Where a repository directory named `repo_name` is staged
    pub fn staged_repo_path(&self, repo_name: &Path) -> PathBuf {
        self.stage_path().join(repo_name)
    }
}
