//! `recents add <path>` – record a file as recently opened.

use anyhow::Result;
use recents_core::recent_files::{AddOutcome, RecentFiles};
use recents_core::store::FileStore;
use std::path::Path;

pub fn run_add<S: FileStore>(tracker: &RecentFiles<S>, path: &Path) -> Result<()> {
    match tracker.add_recent_file(path) {
        AddOutcome::Persisted => println!("Added {}", path.display()),
        AddOutcome::Unpersisted => println!(
            "Added {} (history could not be saved, see log)",
            path.display()
        ),
        AddOutcome::Ignored => println!("Ignored {}: no such file", path.display()),
    }
    Ok(())
}
