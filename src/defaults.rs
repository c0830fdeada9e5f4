//! Default values for git-organize configuration.
//!
//! This module provides centralized default values used by both the library
//! `Config` and the CLI flags, ensuring the two never drift apart.

/// Default top-level directory that repositories are organized into.
pub const DESTINATION: &str = ".";

/// Default stage directory, relative to the destination.
pub const STAGE: &str = ".stage";

/// Default quarantine directory, relative to the destination.
pub const QUARANTINE: &str = "quarantine";

/// Name of the remote that decides a repository's primary placement.
pub const ORIGIN_REMOTE: &str = "origin";

/// Default log level for the CLI.
pub const LOG_LEVEL: &str = "info";
