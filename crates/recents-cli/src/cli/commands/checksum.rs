//! Checksum command: compute MD5 or SHA-256 of a file.

use anyhow::Result;
use recents_core::checksum::{self, Algorithm};
use std::path::Path;

/// Compute and print the digest of the given file.
pub fn run_checksum(path: &Path, algorithm: Algorithm) -> Result<()> {
    let digest = checksum::digest_path(algorithm, path)?;
    println!("{}  {}", digest, path.display());
    Ok(())
}
