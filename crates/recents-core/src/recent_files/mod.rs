//! Recently opened files tracker.
//!
//! The list lives in a plain text file (one absolute path per line, most
//! recent first) resolved through a [`FileStore`]. It is re-read on every
//! query and rewritten in full on every change; nothing is cached. Only
//! entries that currently exist are returned.
//!
//! Every operation is best-effort: storage failures degrade to an empty list
//! or an unpersisted change and are only logged. Registered listeners are
//! notified after each change.

mod persist;

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::config::RecentsConfig;
use crate::error::InvalidFormatError;
use crate::listeners::{ListenerRegistry, RecentFilesListener};
use crate::store::FileStore;

/// Internal failure while reading or writing the list. Never returned to callers.
#[derive(Debug, thiserror::Error)]
pub(crate) enum RecentFilesError {
    #[error("read recent files list")]
    Read(#[source] std::io::Error),
    #[error("write recent files list")]
    Write(#[source] std::io::Error),
    #[error(transparent)]
    Format(#[from] InvalidFormatError),
}

/// What a mutating call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Nothing happened: the file does not exist or its path cannot be stored.
    Ignored,
    /// The list was written and listeners were notified.
    Persisted,
    /// Writing failed; listeners were still notified.
    Unpersisted,
}

/// Tracker for the most recently used files.
///
/// Construct one per process and share it by reference.
pub struct RecentFiles<S: FileStore> {
    store: S,
    list_path: String,
    max_entries: usize,
    listeners: ListenerRegistry,
    // Serializes read-modify-write so concurrent adds don't drop each other.
    update: Mutex<()>,
}

impl<S: FileStore> RecentFiles<S> {
    pub fn new(store: S, config: &RecentsConfig) -> Self {
        Self {
            store,
            list_path: config.list_path.clone(),
            max_entries: config.max_entries.max(1),
            listeners: ListenerRegistry::new(),
            update: Mutex::new(()),
        }
    }

    /// Tracker with the default list location and capacity.
    pub fn with_defaults(store: S) -> Self {
        Self::new(store, &RecentsConfig::default())
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Existing recent files, most recent first. Empty if there is no history
    /// yet or the list cannot be read.
    ///
    /// Only the first `max_entries` stored lines are considered, even when
    /// some of them name files that no longer exist.
    pub fn recent_files(&self) -> Vec<PathBuf> {
        match self.load() {
            Ok(files) => files,
            Err(e) => {
                tracing::debug!("recent files unavailable: {:#}", anyhow::Error::new(e));
                Vec::new()
            }
        }
    }

    fn load(&self) -> Result<Vec<PathBuf>, RecentFilesError> {
        let Some(path) = self.store.find_file(&self.list_path) else {
            return Ok(Vec::new());
        };
        let content = persist::read_list(&path)?;
        Ok(persist::parse_list(&content, self.max_entries))
    }

    /// Move `path` to the front of the list, store it and notify listeners.
    ///
    /// Files that do not exist are ignored. The path is stored in canonical
    /// absolute form.
    pub fn add_recent_file(&self, path: impl AsRef<Path>) -> AddOutcome {
        let path = path.as_ref();
        let file = match std::fs::canonicalize(path) {
            Ok(p) => p,
            Err(e) => {
                tracing::debug!("not adding {} to recent files: {}", path.display(), e);
                return AddOutcome::Ignored;
            }
        };
        if !persist::is_storable(&file) {
            tracing::debug!(
                "not adding {:?} to recent files: cannot be stored one per line",
                file
            );
            return AddOutcome::Ignored;
        }

        let outcome = {
            let _guard = self.update.lock().unwrap_or_else(|p| p.into_inner());
            let mut files = self.recent_files();
            files.retain(|f| f != &file);
            files.insert(0, file);
            files.truncate(self.max_entries);
            self.save(&files)
        };
        self.listeners.notify_all();
        outcome
    }

    /// Forget every entry and notify listeners.
    pub fn clear(&self) -> AddOutcome {
        let outcome = {
            let _guard = self.update.lock().unwrap_or_else(|p| p.into_inner());
            self.save(&[])
        };
        self.listeners.notify_all();
        outcome
    }

    fn save(&self, files: &[PathBuf]) -> AddOutcome {
        let written = self
            .store
            .create_file(&self.list_path)
            .map_err(RecentFilesError::Write)
            .and_then(|f| persist::write_list(f, files));
        match written {
            Ok(()) => {
                tracing::debug!("stored {} recent file(s)", files.len());
                AddOutcome::Persisted
            }
            Err(e) => {
                tracing::warn!("recent files not saved: {:#}", anyhow::Error::new(e));
                AddOutcome::Unpersisted
            }
        }
    }

    /// Register a listener by weak reference; it is dropped from the registry
    /// once the caller releases its last `Arc`.
    pub fn add_listener(&self, listener: &Arc<dyn RecentFilesListener>) {
        self.listeners.add(listener);
    }

    pub fn remove_all_listeners(&self) {
        self.listeners.clear();
    }
}
