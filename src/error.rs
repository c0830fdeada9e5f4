//! # Error Handling
//!
//! This module defines the centralized error type for `git-organize`. It uses
//! the `thiserror` library to create an `Error` enum covering every failure
//! the library can report, with messages that carry enough context to act on.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum. Variants fall into three groups:
//!   - Remote identity extraction: `NoUrls`, `InvalidRemoteUrl`,
//!     `MalformedRemotePath`.
//!   - Placement resolution: `NoRemotes`, `NoOriginRemote`,
//!     `InvalidOriginRemote`, `InvalidRemote`, `UnsupportedStrategy`.
//!   - Filesystem and git plumbing: `Copy`, `Filesystem`, `Symlinks`,
//!     `GitCommand`, `Io`.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Errors raised while placing a single repository are wrapped in
//! `Error::Organize`, which records the repository path so the driver can
//! report which checkout failed.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for git-organize operations
#[derive(Error, Debug)]
pub enum Error {
    /// The remote has no URLs configured.
    #[error("remote '{remote}' has no urls")]
    NoUrls { remote: String },

    /// The remote URL is neither URL-style (`scheme://host/...`) nor
    /// scp-style (`user@host:path`), or could not be parsed as a URL.
    #[error("invalid remote url '{url}': {message}")]
    InvalidRemoteUrl { url: String, message: String },

    /// The remote URL does not contain both an owner and a name.
    #[error("malformed remote path in '{url}': {message}")]
    MalformedRemotePath { url: String, message: String },

    /// No remotes were left after filtering.
    #[error("received no remotes")]
    NoRemotes,

    /// None of the remotes is named `origin`.
    #[error("no origin remote found")]
    NoOriginRemote,

    /// The owner and name could not be derived from the origin remote.
    #[error("could not determine owner and name of remote 'origin': {source}")]
    InvalidOriginRemote {
        #[source]
        source: Box<Error>,
    },

    /// The owner and name could not be derived from a non-origin remote
    /// while building symlinks.
    #[error("could not determine owner and name of remote '{remote}': {source}")]
    InvalidRemote {
        remote: String,
        #[source]
        source: Box<Error>,
    },

    /// The remote strategy name is not one of the supported strategies.
    #[error("unsupported remote strategy '{strategy}' (expected one of: \"\", origin, symlink, quarantine)")]
    UnsupportedStrategy { strategy: String },

    /// Placing a repository failed; `repo` is the checkout being organized.
    #[error("could not organize repo '{}': {source}", .repo.display())]
    Organize {
        repo: PathBuf,
        #[source]
        source: Box<Error>,
    },

    /// Recursively copying a directory tree failed.
    #[error("could not copy '{}' to '{}': {source}", .src.display(), .dst.display())]
    Copy {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A filesystem operation other than copying failed.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// One or more alias symlinks could not be created. Every alias is
    /// attempted before this is returned.
    #[error("{}", .errors.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("\n"))]
    Symlinks { errors: Vec<Error> },

    /// An error occurred while executing a git command.
    #[error("Git command failed for {}: {command} - {stderr}", .repo.display())]
    GitCommand {
        command: String,
        repo: PathBuf,
        stderr: String,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
