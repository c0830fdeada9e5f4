//! Disk operations used to stage and place repositories
//!
//! `copy_dir` is a recursive tree copy. Directories are created, regular
//! files are copied along with their permissions, and symbolic links are
//! recreated pointing at the same target rather than followed. Copying into
//! an existing directory merges into it, overwriting files with the same
//! relative path.

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Recursively copy the tree at `src` to `dst`
pub fn copy_dir(src: &Path, dst: &Path) -> Result<()> {
    let copy_err = |source: io::Error| Error::Copy {
        src: src.to_path_buf(),
        dst: dst.to_path_buf(),
        source,
    };

    for entry in WalkDir::new(src).follow_links(false) {
        let entry = entry.map_err(|e| copy_err(e.into()))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| copy_err(io::Error::new(io::ErrorKind::Other, e)))?;
        let target = dst.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir_all(&target).map_err(copy_err)?;
        } else if file_type.is_symlink() {
            let link_target = fs::read_link(entry.path()).map_err(copy_err)?;
            if fs::symlink_metadata(&target).is_ok() {
                remove_entry(&target).map_err(copy_err)?;
            }
            symlink(&link_target, &target).map_err(copy_err)?;
        } else {
            fs::copy(entry.path(), &target).map_err(copy_err)?;
        }
    }

    Ok(())
}

fn remove_entry(path: &Path) -> io::Result<()> {
    let metadata = fs::symlink_metadata(path)?;
    if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}

/// Create a symbolic link at `link` pointing at `target`, creating the
/// link's parent directories first
pub fn create_symlink(target: &Path, link: &Path) -> Result<()> {
    if let Some(parent) = link.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::Filesystem {
            message: format!(
                "could not create parent directories for symlink '{}': {}",
                link.display(),
                e
            ),
        })?;
    }

    symlink(target, link).map_err(|e| Error::Filesystem {
        message: format!(
            "could not create symlink '{}' -> '{}': {}",
            link.display(),
            target.display(),
            e
        ),
    })
}

/// Remove a directory tree
pub fn remove_dir(path: &Path) -> Result<()> {
    fs::remove_dir_all(path).map_err(|e| Error::Filesystem {
        message: format!("could not remove '{}': {}", path.display(), e),
    })
}
