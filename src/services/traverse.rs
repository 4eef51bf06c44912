//! Filesystem primitives used by the walk driver.
//!
//! Symlinks are never followed: every kind check goes through `lstat`
//! semantics, so a link shows up as `EntryKind::Other`.

use crate::models::{EntryKind, WalkEntry};
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Stat `path` without following symlinks and wrap it as an entry.
pub fn stat_entry(path: &Path) -> io::Result<WalkEntry> {
    let metadata = fs::symlink_metadata(path)?;
    let kind = EntryKind::from_file_type(metadata.file_type());
    Ok(WalkEntry::with_size(path.to_path_buf(), kind, metadata.len()))
}

/// Byte length of `path` as reported by `lstat`.
pub fn stat_size(path: &Path) -> io::Result<u64> {
    fs::symlink_metadata(path).map(|metadata| metadata.len())
}

/// List the entries of `dir`, sorted by file name.
///
/// Paths are `dir` joined with each name (see [`join_name`]), so a relative
/// root yields relative paths. Sizes are left unresolved until a filter asks
/// for them.
pub fn read_dir_sorted(dir: &Path) -> io::Result<Vec<WalkEntry>> {
    let mut named = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let kind = EntryKind::from_file_type(entry.file_type()?);
        named.push((entry.file_name(), kind));
    }

    named.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(named
        .into_iter()
        .map(|(name, kind)| WalkEntry::new(join_name(dir, &name), kind))
        .collect())
}

/// Lexically clean a root path.
///
/// Drops `.` components, folds `name/..` pairs and collapses repeated or
/// trailing separators. An empty result becomes `.`.
#[must_use]
pub fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => cleaned.push(".."),
            },
            other => cleaned.push(other.as_os_str()),
        }
    }

    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}

/// Join a directory entry name onto its directory. Under `.` the name stands
/// alone, so a walk of the current directory prints bare relative paths.
#[must_use]
pub fn join_name(dir: &Path, name: &OsStr) -> PathBuf {
    if dir == Path::new(".") {
        PathBuf::from(name)
    } else {
        dir.join(name)
    }
}

/// Render a path for output, using `/` separators on every platform.
#[cfg(windows)]
#[must_use]
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(not(windows))]
#[must_use]
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
