//! Argument parsing for every subcommand.

use super::parse;
use crate::cli::{AlgorithmArg, Cli, CliCommand};
use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

#[test]
fn cli_parse_list() {
    let cli = parse(&["recents", "list"]);
    assert!(matches!(cli.command, CliCommand::List));
    assert!(cli.data_dir.is_none());
}

#[test]
fn cli_parse_add() {
    match parse(&["recents", "add", "notes/todo.txt"]).command {
        CliCommand::Add { path } => assert_eq!(path, PathBuf::from("notes/todo.txt")),
        _ => panic!("expected Add"),
    }
}

#[test]
fn cli_parse_add_requires_path() {
    assert!(Cli::try_parse_from(["recents", "add"]).is_err());
}

#[test]
fn cli_parse_clear() {
    assert!(matches!(parse(&["recents", "clear"]).command, CliCommand::Clear));
}

#[test]
fn cli_parse_checksum_defaults_to_md5() {
    match parse(&["recents", "checksum", "file.bin"]).command {
        CliCommand::Checksum { path, algorithm } => {
            assert_eq!(path, PathBuf::from("file.bin"));
            assert_eq!(algorithm, AlgorithmArg::Md5);
        }
        _ => panic!("expected Checksum"),
    }
}

#[test]
fn cli_parse_checksum_sha256() {
    match parse(&["recents", "checksum", "--algorithm", "sha256", "file.bin"]).command {
        CliCommand::Checksum { algorithm, .. } => assert_eq!(algorithm, AlgorithmArg::Sha256),
        _ => panic!("expected Checksum"),
    }
}

#[test]
fn cli_parse_checksum_rejects_unknown_algorithm() {
    assert!(Cli::try_parse_from(["recents", "checksum", "--algorithm", "crc", "f"]).is_err());
}

#[test]
fn cli_parse_completions() {
    match parse(&["recents", "completions", "bash"]).command {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_global_data_dir_after_subcommand() {
    let cli = parse(&["recents", "list", "--data-dir", "/tmp/history"]);
    assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/history")));
}
