//! CLI for the recents file history tracker.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use recents_core::checksum::Algorithm;
use recents_core::config::{self, RecentsConfig};
use recents_core::recent_files::RecentFiles;
use recents_core::store::{DirFileStore, FileStore};
use std::path::PathBuf;

use commands::{run_add, run_checksum, run_clear, run_completions, run_list};

/// Top-level CLI for recents.
#[derive(Debug, Parser)]
#[command(name = "recents")]
#[command(about = "recents: track recently opened files", long_about = None)]
pub struct Cli {
    /// Keep the history under this directory instead of the XDG data dir.
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Digest algorithm accepted by `recents checksum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    Md5,
    Sha256,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Md5 => Algorithm::Md5,
            AlgorithmArg::Sha256 => Algorithm::Sha256,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show recently opened files, most recent first.
    List,

    /// Record a file as recently opened.
    Add {
        /// Path to the file.
        path: PathBuf,
    },

    /// Forget all recent files.
    Clear,

    /// Compute the checksum of a file.
    Checksum {
        /// Path to the file.
        path: PathBuf,
        /// Digest algorithm.
        #[arg(long, value_enum, default_value = "md5")]
        algorithm: AlgorithmArg,
    },

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

/// Dispatch a history command against the given store.
fn dispatch<S: FileStore>(command: CliCommand, tracker: &RecentFiles<S>) -> Result<()> {
    match command {
        CliCommand::List => run_list(tracker),
        CliCommand::Add { path } => run_add(tracker, &path),
        CliCommand::Clear => run_clear(tracker),
        CliCommand::Checksum { path, algorithm } => run_checksum(&path, algorithm.into()),
        CliCommand::Completions { shell } => run_completions(shell),
    }
}

/// Run a parsed command line. The config is only loaded for commands that
/// use the history.
fn run(cli: Cli, load_config: impl FnOnce() -> Result<RecentsConfig>) -> Result<()> {
    match cli.command {
        CliCommand::Checksum { path, algorithm } => run_checksum(&path, algorithm.into()),
        CliCommand::Completions { shell } => run_completions(shell),
        command => {
            let cfg = load_config()?;
            tracing::debug!("loaded config: {:?}", cfg);
            let store = match cli.data_dir {
                Some(dir) => DirFileStore::new(dir),
                None => DirFileStore::xdg_default()?,
            };
            dispatch(command, &RecentFiles::new(store, &cfg))
        }
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        run(Cli::parse(), config::load_or_init)
    }
}

#[cfg(test)]
mod tests;
