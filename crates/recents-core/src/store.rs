//! Platform file store: resolves logical, relative paths (e.g.
//! `data/recentfiles`) to real files inside an application-scoped location.
//!
//! `DirFileStore` keeps files under a single root directory: the XDG data
//! home (`~/.local/share/recents/...`) by default, or an explicit directory
//! for tests and the `--data-dir` CLI override. Reads and writes always
//! resolve against that same root; system-wide data dirs are never consulted.

use std::fs::File;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::APP_PREFIX;

/// Resolves logical paths to files for reading or writing.
pub trait FileStore {
    /// Find an existing file for `logical`. Never creates anything.
    fn find_file(&self, logical: &str) -> Option<PathBuf>;

    /// Create (or truncate) the file for `logical`, creating parent directories as needed.
    fn create_file(&self, logical: &str) -> io::Result<File>;
}

/// True if `logical` is a non-empty relative path that stays inside the store root.
fn is_contained(logical: &str) -> bool {
    let path = Path::new(logical);
    path.components().next().is_some()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

fn rejected(logical: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("logical path must be relative and stay inside the store: {logical:?}"),
    )
}

/// File store rooted at an explicit directory.
#[derive(Debug, Clone)]
pub struct DirFileStore {
    root: PathBuf,
}

impl DirFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at `~/.local/share/recents`.
    pub fn xdg_default() -> anyhow::Result<Self> {
        Ok(Self::new(xdg_data_root()?))
    }

    fn resolve(&self, logical: &str) -> Option<PathBuf> {
        is_contained(logical).then(|| self.root.join(logical))
    }
}

impl FileStore for DirFileStore {
    fn find_file(&self, logical: &str) -> Option<PathBuf> {
        self.resolve(logical).filter(|p| p.is_file())
    }

    fn create_file(&self, logical: &str) -> io::Result<File> {
        let path = self.resolve(logical).ok_or_else(|| rejected(logical))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        File::create(&path)
    }
}

/// Per-user data directory for the application: `$XDG_DATA_HOME/recents`.
pub fn xdg_data_root() -> anyhow::Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
    Ok(xdg_dirs.get_data_home().join(APP_PREFIX))
}
