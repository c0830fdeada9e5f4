//! Shared test utilities for integration and E2E tests.
//!
//! Tests build a flat directory of real git repositories (`git init` plus
//! `git remote add`) inside a temporary directory, then organize it into a
//! sibling destination directory. `git` must be installed.
//!
//! Every git invocation, including the binary under test, runs with `HOME`
//! pointing into the fixture and system config disabled, so the host's own
//! git configuration never leaks into a test.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_repo("simple", &[("origin", "git@github.com:me/simple.git")]);
//!     fixture.command().arg(fixture.flat()).assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    pub use super::TestFixture;
}

/// Environment that keeps git away from the host's global and system config
fn isolated_git_env(home: &Path) -> [(&'static str, std::ffi::OsString); 3] {
    [
        ("HOME", home.as_os_str().to_os_string()),
        ("XDG_CONFIG_HOME", home.join(".config").into_os_string()),
        ("GIT_CONFIG_NOSYSTEM", "1".into()),
    ]
}

/// A temporary directory holding a `flat/` directory of repositories and a
/// `destination/` directory to organize them into.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a fixture with empty `flat/` and `destination/` directories.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        temp_dir
            .child("flat")
            .create_dir_all()
            .expect("Failed to create flat dir");
        temp_dir
            .child("destination")
            .create_dir_all()
            .expect("Failed to create destination dir");
        temp_dir
            .child("home")
            .create_dir_all()
            .expect("Failed to create home dir");
        Self { temp_dir }
    }

    fn git(&self, repo: &Path, args: &[&str]) {
        let output = Command::new("git")
            .arg("-C")
            .arg(repo)
            .args(args)
            .envs(isolated_git_env(&self.home()))
            .output()
            .expect("Failed to run git; these tests need git installed");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    /// Add a git repository named `name` under `flat/` with the given
    /// `(remote, url)` pairs and a README.
    pub fn with_repo(self, name: &str, remotes: &[(&str, &str)]) -> Self {
        let repo = self.temp_dir.child("flat").child(name);
        repo.create_dir_all().expect("Failed to create repo dir");
        self.git(repo.path(), &["init", "--quiet"]);
        for (remote, url) in remotes {
            self.git(repo.path(), &["remote", "add", remote, url]);
        }
        repo.child("README.md")
            .write_str(&format!("# {}\n", name))
            .expect("Failed to write README");
        self
    }

    /// Add a plain directory under `flat/` that is not a git repository.
    #[allow(dead_code)]
    pub fn with_plain_dir(self, name: &str) -> Self {
        self.temp_dir
            .child("flat")
            .child(name)
            .create_dir_all()
            .expect("Failed to create plain dir");
        self
    }

    /// Write the `.gitconfig` in the fixture's home directory.
    #[allow(dead_code)]
    pub fn with_global_gitconfig(self, content: &str) -> Self {
        self.temp_dir
            .child("home/.gitconfig")
            .write_str(content)
            .expect("Failed to write global gitconfig");
        self
    }

    /// Root of the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The flat directory of repositories.
    pub fn flat(&self) -> PathBuf {
        self.path().join("flat")
    }

    /// The destination directory.
    pub fn destination(&self) -> PathBuf {
        self.path().join("destination")
    }

    /// The `HOME` every git invocation sees.
    pub fn home(&self) -> PathBuf {
        self.path().join("home")
    }

    /// Create a command running in the fixture root with `--destination`
    /// pointing at the fixture's destination.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("git-organize");
        cmd.current_dir(self.path())
            .env_remove("GIT_ORGANIZE_DESTINATION")
            .env_remove("GIT_ORGANIZE_STAGE")
            .env_remove("GIT_ORGANIZE_QUARANTINE")
            .env_remove("GIT_ORGANIZE_REMOTE_STRATEGY")
            .env_remove("GIT_ORGANIZE_LOG")
            .envs(isolated_git_env(&self.home()))
            .arg("--color")
            .arg("never")
            .arg("--destination")
            .arg(self.destination());
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
