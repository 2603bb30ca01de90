//! `recents list` – show recent files.

use anyhow::Result;
use recents_core::recent_files::RecentFiles;
use recents_core::store::FileStore;

pub fn run_list<S: FileStore>(tracker: &RecentFiles<S>) -> Result<()> {
    let files = tracker.recent_files();
    if files.is_empty() {
        println!("No recent files.");
    } else {
        for (i, f) in files.iter().enumerate() {
            println!("{:<3} {}", i + 1, f.display());
        }
    }
    Ok(())
}
