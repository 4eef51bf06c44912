//! Actions applied to eligible entries.

use super::traverse::normalize_path;
use crate::models::WalkEntry;
use crate::{Error, Result, WalkConfig};
use std::fs;
use std::io::Write;

/// One side effect on an eligible file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Write the path, newline-terminated, to the output sink.
    List,
    /// Remove the file from disk.
    Delete,
}

/// What an action did, for the run summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Listed,
    Deleted { bytes: u64 },
}

impl Action {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::List => "list",
            Action::Delete => "delete",
        }
    }

    /// Run the action on `entry`. Failures are fatal to the walk.
    pub fn apply<W: Write + ?Sized>(&self, entry: &WalkEntry, out: &mut W) -> Result<ActionOutcome> {
        match self {
            Action::List => {
                writeln!(out, "{}", normalize_path(entry.path())).map_err(Error::Sink)?;
                Ok(ActionOutcome::Listed)
            }
            Action::Delete => {
                // Size is taken before removal; a failed stat must not mask the delete error.
                let bytes = entry.size().unwrap_or(0);
                fs::remove_file(entry.path()).map_err(|source| Error::Delete {
                    path: entry.path().to_path_buf(),
                    source,
                })?;
                log::info!("Deleted {} ({bytes} bytes)", entry.path().display());
                Ok(ActionOutcome::Deleted { bytes })
            }
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Enabled actions in their fixed order: list always precedes delete, so a
/// deleted file has been recorded first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionPlan {
    actions: Vec<Action>,
}

impl ActionPlan {
    #[must_use]
    pub fn from_config(config: &WalkConfig) -> Self {
        let mut actions = Vec::with_capacity(2);
        if config.list {
            actions.push(Action::List);
        }
        if config.delete {
            actions.push(Action::Delete);
        }
        Self { actions }
    }

    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// True when no action is enabled and the walk only visits.
    #[must_use]
    pub fn is_dry(&self) -> bool {
        self.actions.is_empty()
    }

    /// Apply every action in order, stopping at the first failure.
    pub fn execute<W: Write + ?Sized>(
        &self,
        entry: &WalkEntry,
        out: &mut W,
    ) -> Result<Vec<ActionOutcome>> {
        self.actions
            .iter()
            .map(|action| action.apply(entry, &mut *out))
            .collect()
    }
}
