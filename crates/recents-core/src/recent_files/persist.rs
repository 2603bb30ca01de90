//! Text format of the list: one absolute path per line, `\n` terminated.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::RecentFilesError;
use crate::error::InvalidFormatError;

/// A path can be stored if it is valid Unicode and fits on a single line.
pub(super) fn is_storable(path: &Path) -> bool {
    path.to_str().is_some_and(|s| !s.contains('\n'))
}

pub(super) fn read_list(path: &Path) -> Result<String, RecentFilesError> {
    let bytes = std::fs::read(path).map_err(RecentFilesError::Read)?;
    String::from_utf8(bytes).map_err(|e| {
        InvalidFormatError::with_cause(format!("{} is not UTF-8", path.display()), e).into()
    })
}

/// Existing files among the first `max_entries` lines, in order.
pub(super) fn parse_list(content: &str, max_entries: usize) -> Vec<PathBuf> {
    content
        .split('\n')
        .take(max_entries)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .filter(|p| p.exists())
        .collect()
}

pub(super) fn write_list(file: File, files: &[PathBuf]) -> Result<(), RecentFilesError> {
    write_lines(file, files).map_err(RecentFilesError::Write)
}

fn write_lines(file: File, files: &[PathBuf]) -> io::Result<()> {
    let mut writer = BufWriter::new(file);
    for f in files {
        writer.write_all(f.as_os_str().as_encoded_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.into_inner()?.sync_all()
}
