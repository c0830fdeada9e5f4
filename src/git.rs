use std::path::Path;
use std::process::Command;

use crate::error::Error;
use crate::remote::Remote;

const REMOTE_URL_PATTERN: &str = r"^remote\..*\.url$";

/// Whether `path` is the top level of a git checkout
///
/// Checks for a `.git` entry, which is a directory in an ordinary clone and
/// a file in worktrees and submodules.
pub fn is_repository(path: &Path) -> bool {
    path.join(".git").exists()
}

/// List the remotes configured for the repository at `repo`
///
/// Only the repository's own config file is read. Global and system config
/// are ignored, and `--git-dir` stops git from walking up into an enclosing
/// repository when `repo/.git` is not a usable git directory; that case is
/// an error. URLs are returned in configuration order; remotes are ordered
/// by first appearance.
pub fn list_remotes(repo: &Path) -> Result<Vec<Remote>, Error> {
    let output = Command::new("git")
        .arg("--git-dir")
        .arg(repo.join(".git"))
        .args(["config", "--local", "--get-regexp", REMOTE_URL_PATTERN])
        .output()
        .map_err(|e| Error::GitCommand {
            command: "config --local --get-regexp".to_string(),
            repo: repo.to_path_buf(),
            stderr: e.to_string(),
        })?;

    // `git config --get-regexp` exits with 1 when nothing matched
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        if output.status.code() == Some(1) && stderr.trim().is_empty() {
            return Ok(Vec::new());
        }
        return Err(Error::GitCommand {
            command: "config --local --get-regexp".to_string(),
            repo: repo.to_path_buf(),
            stderr: stderr.to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(parse_remote_urls(&stdout))
}

/// Group `remote.<name>.url <url>` lines into remotes
pub fn parse_remote_urls(output: &str) -> Vec<Remote> {
    let mut remotes: Vec<Remote> = Vec::new();

    for line in output.lines() {
        // Format: remote.<name>.url <url>; names may themselves contain dots
        let Some((key, url)) = line.split_once(' ') else {
            continue;
        };
        let Some(name) = key
            .strip_prefix("remote.")
            .and_then(|rest| rest.strip_suffix(".url"))
        else {
            continue;
        };
        let url = url.trim();

        match remotes.iter_mut().find(|r| r.name == name) {
            Some(remote) => remote.urls.push(url.to_string()),
            None => remotes.push(Remote::new(name, url)),
        }
    }

    remotes
}
