//! Data models for walk entries and run summaries

use serde::{Deserialize, Serialize};
use std::cell::OnceCell;
use std::path::{Path, PathBuf};

/// What a visited path is, as reported by `lstat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Symlinks, sockets, devices and anything else that is neither.
    Other,
}

impl EntryKind {
    #[must_use]
    pub fn from_file_type(file_type: std::fs::FileType) -> Self {
        if file_type.is_file() {
            EntryKind::File
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Other
        }
    }
}

/// One filesystem object yielded by the traversal
#[derive(Debug)]
pub struct WalkEntry {
    path: PathBuf,
    kind: EntryKind,
    size: OnceCell<u64>,
}

impl WalkEntry {
    #[must_use]
    pub fn new(path: PathBuf, kind: EntryKind) -> Self {
        Self {
            path,
            kind,
            size: OnceCell::new(),
        }
    }

    /// Entry with its size already known, skipping the later stat.
    #[must_use]
    pub fn with_size(path: PathBuf, kind: EntryKind, size: u64) -> Self {
        let entry = Self::new(path, kind);
        let _ = entry.size.set(size);
        entry
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    #[must_use]
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Final path component as text, lossily converted.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Byte length of the entry, stat'ed on first use and cached.
    pub fn size(&self) -> std::io::Result<u64> {
        if let Some(size) = self.size.get() {
            return Ok(*size);
        }

        let size = crate::services::traverse::stat_size(&self.path)?;
        log::trace!("Resolved size for {}: {size}", self.path.display());
        Ok(*self.size.get_or_init(|| size))
    }
}

/// Accounting for a completed walk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkSummary {
    pub root: String,
    pub files_visited: u64,
    pub dirs_visited: u64,
    pub matched: u64,
    pub listed: u64,
    pub deleted: u64,
    pub deleted_bytes: u64,
    /// Milliseconds since the Unix epoch.
    pub started_at_ms: u64,
    pub finished_at_ms: u64,
}
