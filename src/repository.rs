//! # Remote Enumeration
//!
//! Organizing a repository needs one thing from git: the repository's named
//! remotes and their URLs. This module puts that behind the `RemoteLister`
//! trait so the orchestration can be exercised without real repositories.
//!
//! In the main application `GitRemoteLister` is used, which reads the
//! remotes with the system `git` command. In tests it can be replaced with
//! `StaticRemoteLister` or any other implementation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::remote::Remote;

/// Trait for reading a repository's remotes - allows mocking in tests
pub trait RemoteLister {
    /// List the remotes of the repository checked out at `repo`.
    fn list_remotes(&self, repo: &Path) -> Result<Vec<Remote>>;
}

/// The default implementation of `RemoteLister`, which uses the system's
/// `git` command.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitRemoteLister;

impl RemoteLister for GitRemoteLister {
    fn list_remotes(&self, repo: &Path) -> Result<Vec<Remote>> {
        crate::git::list_remotes(repo)
    }
}

/// A `RemoteLister` that answers from a fixed table, keyed by the final
/// component of the repository path
///
/// Staged copies live under a different parent than the original checkout,
/// so keying by directory name lets one table serve both.
#[derive(Debug, Clone, Default)]
pub struct StaticRemoteLister {
    remotes: HashMap<PathBuf, Vec<Remote>>,
}

impl StaticRemoteLister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the remotes reported for any repository named `repo_name`
    pub fn with_repo(mut self, repo_name: impl Into<PathBuf>, remotes: Vec<Remote>) -> Self {
        self.remotes.insert(repo_name.into(), remotes);
        self
    }
}

impl RemoteLister for StaticRemoteLister {
    fn list_remotes(&self, repo: &Path) -> Result<Vec<Remote>> {
        let remotes = repo
            .file_name()
            .and_then(|name| self.remotes.get(Path::new(name)))
            .cloned()
            .unwrap_or_default();
        Ok(remotes)
    }
}

impl<T: RemoteLister + ?Sized> RemoteLister for &T {
    fn list_remotes(&self, repo: &Path) -> Result<Vec<Remote>> {
        (**self).list_remotes(repo)
    }
}
