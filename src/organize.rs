//! # Organize Orchestration
//!
//! `Organizer` ties the pieces together for one repository at a time:
//!
//! 1.  **Stage**: Copy the checkout into the stage directory.
//! 2.  **Remotes**: Read the staged copy's remotes and drop the ones the
//!     configuration filters out.
//! 3.  **Resolve**: Compute the placement with [`placement::resolve`].
//! 4.  **Place**: Copy the staged tree to the primary path.
//! 5.  **Alias**: Create one symlink per alias path. Every alias is
//!     attempted; failures are collected and reported together.
//! 6.  **Clean up**: Remove the staged copy, only when everything above
//!     succeeded. A failed repository keeps its staged copy for inspection.
//!
//! Nothing is rolled back on failure: a primary copy or symlinks created
//! before an error stay where they are.
//!
//! `Organizer::organize_dir` is the driver. It walks the immediate
//! subdirectories of a flat directory, organizes each git checkout it finds,
//! and keeps going when one of them fails.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::filesystem;
use crate::git;
use crate::path::clean_path;
use crate::placement::{self, Placement};
use crate::remote::{remotes_by_name, Remotes};
use crate::repository::{GitRemoteLister, RemoteLister};

/// A repository that could not be organized
#[derive(Debug)]
pub struct Failure {
    pub repo: PathBuf,
    pub error: Error,
}

/// Outcome of organizing one or more flat directories
#[derive(Debug, Default)]
pub struct Summary {
    /// Repositories that were placed, with where they went
    pub organized: Vec<(PathBuf, Placement)>,
    /// Directories that are not git checkouts
    pub skipped: Vec<PathBuf>,
    /// Repositories that failed; their staged copies are left in place
    pub failed: Vec<Failure>,
}

impl Summary {
    /// True when no repository failed
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Fold another summary into this one
    pub fn merge(&mut self, other: Summary) {
        self.organized.extend(other.organized);
        self.skipped.extend(other.skipped);
        self.failed.extend(other.failed);
    }
}

/// Organizes repositories according to a fixed `Config`
#[derive(Debug)]
pub struct Organizer<L = GitRemoteLister> {
    config: Config,
    lister: L,
}

impl Organizer<GitRemoteLister> {
    /// Create an organizer that reads remotes with the system `git` command
    pub fn new(config: Config) -> Self {
        Self::with_lister(config, GitRemoteLister)
    }
}

impl<L: RemoteLister> Organizer<L> {
    /// Create an organizer with a custom remote lister
    pub fn with_lister(config: Config, lister: L) -> Self {
        Self { config, lister }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Organize every git checkout directly inside `dir`
    ///
    /// Entries are visited in name order. Symlinks and files are ignored;
    /// directories without a `.git` entry are recorded as skipped. Errors for
    /// individual repositories are logged and collected in the summary, only
    /// failing to read `dir` itself is returned as an error.
    pub fn organize_dir(&self, dir: &Path) -> Result<Summary> {
        info!("organizing dir '{}'", dir.display());

        let mut entries = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
        entries.sort_by_key(|entry| entry.file_name());

        let mut summary = Summary::default();
        for entry in entries {
            if !entry.file_type()?.is_dir() {
                continue;
            }

            let repo = entry.path();
            if !git::is_repository(&repo) {
                debug!("skipping '{}': not a git repository", repo.display());
                summary.skipped.push(repo);
                continue;
            }

            match self.organize_repo(&repo) {
                Ok(placement) => {
                    info!(
                        "organized repo '{}' -> '{}'",
                        repo.display(),
                        placement.primary.display()
                    );
                    summary.organized.push((repo, placement));
                }
                Err(e) => {
                    error!("{}", e);
                    summary.failed.push(Failure { repo, error: e });
                }
            }
        }

        Ok(summary)
    }

    /// Organize the single repository checked out at `repo_path`
    ///
    /// Any failure is wrapped in [`Error::Organize`] naming the repository.
    pub fn organize_repo(&self, repo_path: &Path) -> Result<Placement> {
        let result = if self.config.dry_run {
            self.plan(repo_path)
        } else {
            self.place(repo_path)
        };

        result.map_err(|e| Error::Organize {
            repo: repo_path.to_path_buf(),
            source: Box::new(e),
        })
    }

    /// Resolve a placement from the original checkout without writing anything
    fn plan(&self, repo_path: &Path) -> Result<Placement> {
        let name = repo_name(repo_path)?;
        let remotes = self.allowed_remotes(repo_path)?;
        let placement = placement::resolve(&self.config, &name, &remotes)?;

        info!(
            "would place '{}' at '{}'",
            repo_path.display(),
            placement.primary.display()
        );
        for alias in &placement.aliases {
            info!(
                "would link '{}' -> '{}'",
                alias.display(),
                placement.primary.display()
            );
        }

        Ok(placement)
    }

    fn place(&self, repo_path: &Path) -> Result<Placement> {
        let name = repo_name(repo_path)?;
        let staged = self.config.staged_repo_path(Path::new(&name));

        debug!("staging '{}' at '{}'", repo_path.display(), staged.display());
        filesystem::copy_dir(repo_path, &staged)?;

        let remotes = self.allowed_remotes(&staged)?;
        let placement = placement::resolve(&self.config, &name, &remotes)?;
        debug!(
            "resolved '{}' to '{}' with {} alias(es)",
            name,
            placement.primary.display(),
            placement.aliases.len()
        );

        filesystem::copy_dir(&staged, &placement.primary)?;
        self.link_aliases(&placement)?;

        filesystem::remove_dir(&staged)?;
        Ok(placement)
    }

    fn allowed_remotes(&self, repo: &Path) -> Result<Remotes> {
        let remotes = self.lister.list_remotes(repo)?;
        Ok(remotes_by_name(
            remotes
                .into_iter()
                .filter(|remote| self.config.is_remote_allowed(&remote.name)),
        ))
    }

    /// Create every alias symlink, collecting failures instead of stopping
    /// at the first one
    fn link_aliases(&self, placement: &Placement) -> Result<()> {
        if placement.aliases.is_empty() {
            return Ok(());
        }

        // Links resolve relative to their own directory, so point them at an
        // absolute primary path.
        let target = clean_path(&std::path::absolute(&placement.primary)?);

        let errors: Vec<Error> = placement
            .aliases
            .iter()
            .filter_map(|alias| match filesystem::create_symlink(&target, alias) {
                Ok(()) => {
                    debug!("linked '{}' -> '{}'", alias.display(), target.display());
                    None
                }
                Err(e) => {
                    warn!("{}", e);
                    Some(e)
                }
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Symlinks { errors })
        }
    }
}

fn repo_name(repo_path: &Path) -> Result<String> {
    clean_path(repo_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| Error::Filesystem {
            message: format!(
                "could not determine a directory name for '{}'",
                repo_path.display()
            ),
        })
}
