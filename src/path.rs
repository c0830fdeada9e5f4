//! Path manipulation utilities for git-organize

use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path, like Go's `path.Clean`
///
/// Removes `.` components, resolves `..` against preceding normal
/// components, and collapses repeated separators. The filesystem is never
/// consulted, so symlinks are not resolved. `..` directly under the root is
/// dropped; leading `..` in a relative path is kept. An empty result is `.`.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut out: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            _ => out.push(component),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }

    out.iter().collect()
}

/// Join `relative` onto `base` unless it is already absolute, then clean
///
/// Used for the stage and quarantine directories, which may be given either
/// absolute or relative to the destination.
pub fn resolve_against(base: &Path, relative: &Path) -> PathBuf {
    if relative.is_absolute() {
        relative.to_path_buf()
    } else {
        clean_path(&base.join(relative))
    }
}
