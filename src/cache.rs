//! Explicit, caller-owned caching for loaded locale sets.
//!
//! The loader itself never caches; repeated calls re-read from disk. When a
//! consumer wants to pay the directory scan once (e.g. a long-lived process
//! serving lookups), it owns a [`LocaleCache`] and decides when to
//! invalidate it. There is no process-global state.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::loader::load_locales;
use crate::messages::LocaleSet;

/// A lazily-loaded locale set tied to one directory.
#[derive(Debug)]
pub struct LocaleCache {
    root: PathBuf,
    cached: Option<LocaleSet>,
}

impl LocaleCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cached: None,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_loaded(&self) -> bool {
        self.cached.is_some()
    }

    /// Return the cached set, loading it on first use.
    ///
    /// A failed load leaves the cache empty, so the next call retries.
    pub fn get_or_load(&mut self) -> Result<&LocaleSet> {
        match self.cached {
            Some(ref set) => Ok(set),
            None => {
                let set = load_locales(&self.root)?;
                Ok(self.cached.insert(set))
            }
        }
    }

    /// Drop the cached set and re-read the directory immediately.
    pub fn reload(&mut self) -> Result<&LocaleSet> {
        self.invalidate();
        self.get_or_load()
    }

    /// Drop the cached set; the next `get_or_load` re-reads from disk.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}
