//! `recents clear` – forget all recent files.

use anyhow::Result;
use recents_core::recent_files::{AddOutcome, RecentFiles};
use recents_core::store::FileStore;

pub fn run_clear<S: FileStore>(tracker: &RecentFiles<S>) -> Result<()> {
    match tracker.clear() {
        AddOutcome::Unpersisted => println!("History could not be cleared, see log."),
        _ => println!("History cleared."),
    }
    Ok(())
}
