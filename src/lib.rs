//! Directory Walk and Cleanup Library
//!
//! This library walks a directory tree depth-first, selects regular files by
//! extension and minimum size, and lists and/or deletes the matches. The
//! first filesystem or output error aborts the walk.

pub mod cli;
pub mod io;
pub mod models;
pub mod services;

pub use models::{EntryKind, WalkEntry, WalkSummary};

use std::path::{Path, PathBuf};
use std::result;

/// Custom error type for the library
#[derive(Debug)]
pub enum Error {
    /// A directory could not be read or an entry could not be stat'ed.
    Traversal {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Writing a listed path to the output sink failed.
    Sink(std::io::Error),
    /// Removing an eligible file failed.
    Delete {
        path: PathBuf,
        source: std::io::Error,
    },
    InvalidInput(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Traversal { path, source } => {
                write!(f, "Traversal error at {}: {source}", path.display())
            }
            Error::Sink(e) => write!(f, "Output error: {e}"),
            Error::Delete { path, source } => {
                write!(f, "Failed to delete {}: {source}", path.display())
            }
            Error::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Traversal { source, .. } | Error::Delete { source, .. } => Some(source),
            Error::Sink(e) => Some(e),
            Error::InvalidInput(_) => None,
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Filters and actions applied during a walk.
///
/// An empty `extension` and a zero `min_size` disable filtering on that
/// dimension. `list` and `delete` are independent; with both off the walk
/// only visits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkConfig {
    pub extension: String,
    pub min_size: u64,
    pub list: bool,
    pub delete: bool,
}

/// Walk `root`, applying the configured filters and actions
///
/// # Arguments
/// * `root` - Directory (or single file) to walk; cleaned lexically first, so
///   `./logs/` walks as `logs` and `.` yields bare relative paths
/// * `out` - Sink receiving one line per listed path
/// * `config` - Filters and enabled actions
///
/// # Returns
/// A summary of what was visited, listed and deleted. On error nothing is
/// rolled back: lines already written and files already removed stay that way.
pub fn run<P, W>(root: P, out: &mut W, config: &WalkConfig) -> Result<WalkSummary>
where
    P: AsRef<Path>,
    W: std::io::Write + ?Sized,
{
    let root = root.as_ref();

    if root.as_os_str().is_empty() {
        return Err(Error::InvalidInput("root path is empty".to_string()));
    }

    let root = services::traverse::clean_path(root);
    let started_at = std::time::SystemTime::now();
    let mut walker = services::walk::Walker::new(config, out);
    walker.walk(&root)?;
    let finished_at = std::time::SystemTime::now();

    Ok(walker.into_summary(&root, started_at, finished_at))
}
