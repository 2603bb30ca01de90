pub mod config;
pub mod logging;

pub mod checksum;
pub mod error;
pub mod listeners;
pub mod recent_files;
pub mod store;

/// Application prefix used for every XDG directory (config, data, state).
pub const APP_PREFIX: &str = "recents";
