//! CLI command handlers, one per file.

mod add;
mod checksum;
mod clear;
mod completions;
mod list;

pub use add::run_add;
pub use checksum::run_checksum;
pub use clear::run_clear;
pub use completions::run_completions;
pub use list::run_list;
