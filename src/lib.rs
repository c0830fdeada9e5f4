//! # git-organize
//!
//! This library reorganizes a flat directory of git checkouts into a nested
//! `owner/name` tree, based on each repository's remote URLs. It backs the
//! `git-organize` command-line tool.
//!
//! ## Quick Example
//!
//! ```
//! use std::path::PathBuf;
//! use git_organize::config::{Config, RemoteStrategy};
//! use git_organize::placement::resolve;
//! use git_organize::remote::{remotes_by_name, Remote};
//!
//! let config = Config {
//!     destination: PathBuf::from("/src"),
//!     remote_strategy: RemoteStrategy::Symlink,
//!     ..Config::default()
//! };
//! let remotes = remotes_by_name(vec![
//!     Remote::new("origin", "git@github.com:me/tool.git"),
//!     Remote::new("upstream", "https://github.com/acme/tool.git"),
//! ]);
//!
//! let placement = resolve(&config, "tool", &remotes).unwrap();
//! assert_eq!(placement.primary, PathBuf::from("/src/me/tool"));
//! assert_eq!(placement.aliases, vec![PathBuf::from("/src/acme/tool")]);
//! ```
//!
//! ## Core Concepts
//!
//! - **Remotes (`remote`)**: A remote's first URL yields an `(owner, name)`
//!   identity. HTTPS-style and scp-style URLs are understood.
//! - **Configuration (`config`)**: Destination, stage and quarantine
//!   directories, remote include/exclude filters, and the strategy for
//!   repositories with several remotes.
//! - **Placement (`placement`)**: The pure resolver that turns filtered
//!   remotes into a primary path and optional symlink aliases.
//! - **Orchestration (`organize`)**: Stages, places, links and cleans up one
//!   repository at a time, and walks flat directories of checkouts.
//! - **Collaborators (`filesystem`, `git`, `repository`)**: Directory copy,
//!   symlink creation, and remote enumeration through the `git` command.

pub mod config;
pub mod defaults;
pub mod error;
pub mod filesystem;
pub mod git;
pub mod organize;
pub mod output;
pub mod path;
pub mod placement;
pub mod remote;
pub mod repository;

#[cfg(test)]
mod remote_proptest;
