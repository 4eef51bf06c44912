//! Entry predicates and their composition.
//!
//! A predicate only exists in a [`FilterChain`] when its dimension is
//! active, so the chain is a plain AND over whatever it holds and an empty
//! chain accepts every regular file.

use crate::WalkConfig;
use crate::models::WalkEntry;
use std::io;

/// True when `extension` is empty or `name` ends with it exactly.
#[must_use]
pub fn extension_matches(name: &str, extension: &str) -> bool {
    extension.is_empty() || name.ends_with(extension)
}

/// True when `min_size` is zero or `size` is strictly greater.
#[must_use]
pub fn exceeds_min_size(size: u64, min_size: u64) -> bool {
    min_size == 0 || size > min_size
}

/// A single filter dimension evaluated against a regular file.
pub trait EntryPredicate {
    /// Short label for logging.
    fn name(&self) -> &'static str;

    /// Test the entry. Errors come from resolving entry metadata.
    fn matches(&self, entry: &WalkEntry) -> io::Result<bool>;
}

/// Case-sensitive suffix match on the file name, e.g. `.log`.
#[derive(Debug, Clone)]
pub struct ExtensionPredicate {
    extension: String,
}

impl ExtensionPredicate {
    /// `None` when `extension` is empty.
    #[must_use]
    pub fn active(extension: &str) -> Option<Self> {
        (!extension.is_empty()).then(|| Self {
            extension: extension.to_string(),
        })
    }
}

impl EntryPredicate for ExtensionPredicate {
    fn name(&self) -> &'static str {
        "extension"
    }

    fn matches(&self, entry: &WalkEntry) -> io::Result<bool> {
        Ok(extension_matches(&entry.file_name(), &self.extension))
    }
}

/// Strictly-greater-than size threshold in bytes.
#[derive(Debug, Clone, Copy)]
pub struct MinSizePredicate {
    min_size: u64,
}

impl MinSizePredicate {
    /// `None` when `min_size` is zero.
    #[must_use]
    pub fn active(min_size: u64) -> Option<Self> {
        (min_size > 0).then_some(Self { min_size })
    }
}

impl EntryPredicate for MinSizePredicate {
    fn name(&self) -> &'static str {
        "min-size"
    }

    fn matches(&self, entry: &WalkEntry) -> io::Result<bool> {
        Ok(exceeds_min_size(entry.size()?, self.min_size))
    }
}

/// The active predicates for one walk.
#[derive(Default)]
pub struct FilterChain {
    predicates: Vec<Box<dyn EntryPredicate>>,
}

impl FilterChain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the chain from the configured dimensions.
    ///
    /// The extension check goes first since it needs no stat.
    #[must_use]
    pub fn from_config(config: &WalkConfig) -> Self {
        let mut chain = Self::new();
        if let Some(predicate) = ExtensionPredicate::active(&config.extension) {
            chain.push(predicate);
        }
        if let Some(predicate) = MinSizePredicate::active(config.min_size) {
            chain.push(predicate);
        }
        chain
    }

    pub fn push<T: EntryPredicate + 'static>(&mut self, predicate: T) {
        self.predicates.push(Box::new(predicate));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Regular file AND every active predicate passes.
    pub fn is_eligible(&self, entry: &WalkEntry) -> io::Result<bool> {
        if !entry.is_file() {
            return Ok(false);
        }

        for predicate in &self.predicates {
            if !predicate.matches(entry)? {
                log::trace!(
                    "{} rejected by {} filter",
                    entry.path().display(),
                    predicate.name()
                );
                return Ok(false);
            }
        }

        Ok(true)
    }
}

impl std::fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.predicates.iter().map(|p| p.name()))
            .finish()
    }
}
