//! # Remote Identity Extraction
//!
//! A repository's placement is derived from the `(owner, name)` pair found in
//! a remote's URL. Two URL shapes are understood:
//!
//! - **URL-style**: `scheme://host/owner/name[.git]`. Anything containing
//!   `http` is treated this way, as is any other string that parses as an
//!   absolute URL with a host (`ssh://`, `git://`). The path is split into
//!   the owner and everything after it, so `https://host/group/sub/repo`
//!   yields `("group", "sub/repo")`. Percent-escapes in the path are decoded
//!   first.
//! - **scp-style**: `user@host:owner/name[.git]`. The first two path segments
//!   after the `:` are the owner and name.
//!
//! Only the first URL of a remote is consulted. Extraction is pure: it never
//! touches the network or the filesystem.

use std::collections::BTreeMap;

use percent_encoding::percent_decode_str;
use url::Url;

use crate::error::{Error, Result};

/// A named git remote and its configured URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remote {
    /// Remote name, unique within a repository
    pub name: String,
    /// URLs in configuration order; only the first is used
    pub urls: Vec<String>,
}

impl Remote {
    /// Create a remote with a single URL
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            urls: vec![url.into()],
        }
    }

    /// Extract the owner and name from this remote's first URL
    pub fn identity(&self) -> Result<RemoteIdentity> {
        let url = self.urls.first().ok_or_else(|| Error::NoUrls {
            remote: self.name.clone(),
        })?;
        RemoteIdentity::from_url(url)
    }
}

/// Remotes keyed by name
///
/// Keys are unique by construction and iterate in sorted order.
pub type Remotes = BTreeMap<String, Remote>;

/// Index remotes by name. A later remote with a duplicate name replaces the
/// earlier one.
pub fn remotes_by_name(remotes: impl IntoIterator<Item = Remote>) -> Remotes {
    remotes
        .into_iter()
        .map(|remote| (remote.name.clone(), remote))
        .collect()
}

/// The URL's path with percent-escapes decoded, so `my%20org` reads as
/// `my org` and an escaped `%2F` splits like any other `/`
fn decoded_path(url: &str, parsed: &Url) -> Result<String> {
    percent_decode_str(parsed.path())
        .decode_utf8()
        .map(|path| path.into_owned())
        .map_err(|e| Error::InvalidRemoteUrl {
            url: url.to_string(),
            message: format!("url path is not valid UTF-8 once decoded: {}", e),
        })
}

/// The `(owner, name)` pair a remote URL points at
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteIdentity {
    pub owner: String,
    pub name: String,
}

impl RemoteIdentity {
    /// Parse the owner and name out of a remote URL
    pub fn from_url(url: &str) -> Result<Self> {
        if url.contains("http") {
            let parsed = Url::parse(url).map_err(|e| Error::InvalidRemoteUrl {
                url: url.to_string(),
                message: format!("could not parse url for remote: {}", e),
            })?;
            return Self::from_url_path(url, &decoded_path(url, &parsed)?);
        }

        if let Ok(parsed) = Url::parse(url) {
            if parsed.has_host() {
                return Self::from_url_path(url, &decoded_path(url, &parsed)?);
            }
        }

        if url.contains('@') {
            return Self::from_scp_path(url);
        }

        Err(Error::InvalidRemoteUrl {
            url: url.to_string(),
            message: "expected 'scheme://host/owner/name' or 'user@host:owner/name'".to_string(),
        })
    }

    fn from_url_path(url: &str, path: &str) -> Result<Self> {
        let components: Vec<&str> = path.splitn(3, '/').collect();
        if components.len() < 3 {
            return Err(Error::MalformedRemotePath {
                url: url.to_string(),
                message: "url did not contain enough path components".to_string(),
            });
        }

        let name = components[2].trim_end_matches('/');
        let name = name.strip_suffix(".git").unwrap_or(name);
        Self::checked(url, components[1], name)
    }

    fn from_scp_path(url: &str) -> Result<Self> {
        let (_, path) = url.split_once(':').ok_or_else(|| Error::MalformedRemotePath {
            url: url.to_string(),
            message: "address did not contain a ':' before the path".to_string(),
        })?;
        let trimmed = path.strip_suffix(".git").unwrap_or(path);

        let components: Vec<&str> = trimmed.split('/').collect();
        if components.len() < 2 {
            return Err(Error::MalformedRemotePath {
                url: url.to_string(),
                message: "address did not contain enough path components".to_string(),
            });
        }

        Self::checked(url, components[0], components[1])
    }

    /// Reject segments that would place the repository outside the
    /// destination or directly in it.
    fn checked(url: &str, owner: &str, name: &str) -> Result<Self> {
        let is_usable = |segment: &str| !matches!(segment, "" | "." | "..");
        let name_is_usable = !name.is_empty() && name.split('/').all(is_usable);

        if !is_usable(owner) || !name_is_usable {
            return Err(Error::MalformedRemotePath {
                url: url.to_string(),
                message: format!("owner '{}' and name '{}' must both be non-empty", owner, name),
            });
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}
