//! Walk driver: depth-first traversal feeding the filter chain and action plan.
//!
//! The walk is a single pass. Directories are only descended, regular files
//! are tested for eligibility, and every enabled action runs on each match in
//! plan order. The first error from traversal or from an action ends the walk
//! and is returned as-is; earlier output and deletions are not undone.

use super::action::{ActionOutcome, ActionPlan};
use super::filter::FilterChain;
use super::traverse::{normalize_path, read_dir_sorted, stat_entry};
use crate::models::{EntryKind, WalkEntry, WalkSummary};
use crate::{Error, Result, WalkConfig};
use std::io::Write;
use std::path::Path;
use std::time::SystemTime;

#[derive(Debug, Default, Clone, Copy)]
struct Counters {
    files_visited: u64,
    dirs_visited: u64,
    matched: u64,
    listed: u64,
    deleted: u64,
    deleted_bytes: u64,
}

/// Walk state for one run over one root.
pub struct Walker<'a, W: Write + ?Sized> {
    filters: FilterChain,
    plan: ActionPlan,
    out: &'a mut W,
    counters: Counters,
}

fn traversal_error(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
    move |source| Error::Traversal {
        path: path.to_path_buf(),
        source,
    }
}

impl<'a, W: Write + ?Sized> Walker<'a, W> {
    #[must_use]
    pub fn new(config: &WalkConfig, out: &'a mut W) -> Self {
        let filters = FilterChain::from_config(config);
        let plan = ActionPlan::from_config(config);
        if filters.is_empty() {
            log::debug!("No active filters, every regular file matches");
        } else {
            log::debug!("{} active filter(s): {filters:?}", filters.len());
        }
        if plan.is_dry() {
            log::debug!("No actions enabled, visiting only");
        } else {
            log::debug!("Actions in order: {:?}", plan.actions());
        }

        Self {
            filters,
            plan,
            out,
            counters: Counters::default(),
        }
    }

    /// Walk everything under `root`. A file root is visited on its own.
    pub fn walk(&mut self, root: &Path) -> Result<()> {
        let entry = stat_entry(root).map_err(traversal_error(root))?;

        match entry.kind() {
            EntryKind::Directory => {
                self.counters.dirs_visited += 1;
                self.descend(root)
            }
            EntryKind::File => self.visit_file(&entry),
            EntryKind::Other => {
                log::debug!("Root {} is not a file or directory", root.display());
                Ok(())
            }
        }
    }

    fn descend(&mut self, dir: &Path) -> Result<()> {
        let entries = read_dir_sorted(dir).map_err(traversal_error(dir))?;

        for entry in entries {
            match entry.kind() {
                EntryKind::Directory => {
                    self.counters.dirs_visited += 1;
                    self.descend(entry.path())?;
                }
                EntryKind::File => self.visit_file(&entry)?,
                EntryKind::Other => {
                    log::trace!("Skipping non-regular entry {}", entry.path().display());
                }
            }
        }

        Ok(())
    }

    fn visit_file(&mut self, entry: &WalkEntry) -> Result<()> {
        self.counters.files_visited += 1;

        let eligible = self
            .filters
            .is_eligible(entry)
            .map_err(traversal_error(entry.path()))?;
        if !eligible {
            return Ok(());
        }

        self.counters.matched += 1;
        log::debug!("Matched {}", entry.path().display());

        for outcome in self.plan.execute(entry, &mut *self.out)? {
            match outcome {
                ActionOutcome::Listed => self.counters.listed += 1,
                ActionOutcome::Deleted { bytes } => {
                    self.counters.deleted += 1;
                    self.counters.deleted_bytes += bytes;
                }
            }
        }

        Ok(())
    }

    /// Finish the walk and report what it did.
    #[must_use]
    pub fn into_summary(
        self,
        root: &Path,
        started_at: SystemTime,
        finished_at: SystemTime,
    ) -> WalkSummary {
        let c = self.counters;
        WalkSummary {
            root: normalize_path(root),
            files_visited: c.files_visited,
            dirs_visited: c.dirs_visited,
            matched: c.matched,
            listed: c.listed,
            deleted: c.deleted,
            deleted_bytes: c.deleted_bytes,
            started_at_ms: unix_millis(started_at),
            finished_at_ms: unix_millis(finished_at),
        }
    }
}

fn unix_millis(time: SystemTime) -> u64 {
    let millis = time
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    u64::try_from(millis).unwrap_or(u64::MAX)
}
