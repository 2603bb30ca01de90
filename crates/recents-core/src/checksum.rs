//! File checksums (MD5, SHA-256) computed on demand.
//!
//! Input is read in fixed-size chunks so memory use stays bounded for large
//! files. Digests are returned as full-width lowercase hex.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

const BUF_SIZE: usize = 64 * 1024;

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    #[default]
    Md5,
    Sha256,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Md5 => "md5",
            Algorithm::Sha256 => "sha256",
        }
    }
}

/// Feed every chunk of `reader` to `update` until EOF.
fn consume_chunks<R: Read>(mut reader: R, mut update: impl FnMut(&[u8])) -> io::Result<()> {
    let mut buf = vec![0u8; BUF_SIZE];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => return Ok(()),
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        update(&buf[..n]);
    }
}

/// Compute the MD5 digest of everything readable from `reader`.
pub fn md5_reader<R: Read>(reader: R) -> io::Result<String> {
    let mut ctx = md5::Context::new();
    consume_chunks(reader, |chunk| ctx.consume(chunk))?;
    Ok(format!("{:x}", ctx.compute()))
}

/// Compute MD5 of a file and return the digest as lowercase hex.
pub fn md5_path(path: &Path) -> Result<String> {
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    md5_reader(f).with_context(|| format!("read {}", path.display()))
}

/// Compute SHA-256 of a file and return the digest as lowercase hex.
pub fn sha256_path(path: &Path) -> Result<String> {
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut hasher = Sha256::new();
    consume_chunks(f, |chunk| hasher.update(chunk))
        .with_context(|| format!("read {}", path.display()))?;
    Ok(hex::encode(hasher.finalize()))
}

/// Compute the digest of a file with the chosen algorithm.
pub fn digest_path(algorithm: Algorithm, path: &Path) -> Result<String> {
    tracing::debug!("computing {} of {}", algorithm.name(), path.display());
    match algorithm {
        Algorithm::Md5 => md5_path(path),
        Algorithm::Sha256 => sha256_path(path),
    }
}
