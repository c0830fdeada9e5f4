//! # Placement Resolution
//!
//! Given a repository's (already filtered) remotes, `resolve` computes where
//! the repository belongs under the destination:
//!
//! 1. The `origin` remote is required and decides the primary path,
//!    `destination/owner/name`.
//! 2. With only one remote, that path is the answer whatever the strategy.
//! 3. With several remotes the configured `RemoteStrategy` decides between
//!    ignoring the extra remotes, aliasing them with symlinks, or giving up
//!    and quarantining the repository under its original directory name.
//!
//! Resolution is pure. It reads the configuration and remotes and returns
//! fresh paths; nothing is logged and nothing on disk is touched.

use std::path::{Path, PathBuf};

use crate::config::{Config, RemoteStrategy};
use crate::defaults::ORIGIN_REMOTE;
use crate::error::{Error, Result};
use crate::path::clean_path;
use crate::remote::{RemoteIdentity, Remotes};

/// Where a repository goes, plus any symlinks that should point at it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Directory the repository is copied to
    pub primary: PathBuf,
    /// Symlinks to create, each pointing at `primary`. Only the symlink
    /// strategy produces these; their order follows remote name order.
    pub aliases: Vec<PathBuf>,
}

impl Placement {
    fn primary_only(primary: PathBuf) -> Self {
        Self {
            primary,
            aliases: Vec::new(),
        }
    }
}

fn identity_path(destination: &Path, identity: &RemoteIdentity) -> PathBuf {
    clean_path(&destination.join(&identity.owner).join(&identity.name))
}

/// Resolve the placement of a repository
///
/// `original_name` is the repository's directory name, used only when the
/// repository is quarantined. `remotes` must already be filtered with
/// [`Config::is_remote_allowed`].
pub fn resolve(config: &Config, original_name: &str, remotes: &Remotes) -> Result<Placement> {
    if remotes.is_empty() {
        return Err(Error::NoRemotes);
    }

    let origin = remotes.get(ORIGIN_REMOTE).ok_or(Error::NoOriginRemote)?;
    let identity = origin
        .identity()
        .map_err(|e| Error::InvalidOriginRemote {
            source: Box::new(e),
        })?;

    let fetch_path = identity_path(&config.destination, &identity);
    if remotes.len() == 1 {
        return Ok(Placement::primary_only(fetch_path));
    }

    match config.remote_strategy {
        RemoteStrategy::Origin => Ok(Placement::primary_only(fetch_path)),
        RemoteStrategy::Symlink => {
            let aliases = remotes
                .values()
                .filter(|remote| remote.name != ORIGIN_REMOTE)
                .map(|remote| {
                    remote
                        .identity()
                        .map(|identity| identity_path(&config.destination, &identity))
                        .map_err(|e| Error::InvalidRemote {
                            remote: remote.name.clone(),
                            source: Box::new(e),
                        })
                })
                .collect::<Result<Vec<_>>>()?;

            Ok(Placement {
                primary: fetch_path,
                aliases,
            })
        }
        RemoteStrategy::Default | RemoteStrategy::Quarantine => Ok(Placement::primary_only(
            config.quarantine_path().join(original_name),
        )),
    }
}
