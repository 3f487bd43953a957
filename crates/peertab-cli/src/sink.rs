//! Output sinks for generated tables.

use std::{
    io::{self, Write as _},
    path::Path,
};

use tempfile::NamedTempFile;

/// Replaces `path` with `contents`.
///
/// The contents go to a uniquely named temporary file in the same directory
/// and are renamed into place, so readers never observe a partially written
/// table and concurrent runs never share a scratch file.
pub(crate) fn write_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    log::debug!("writing {} bytes to {}", contents.len(), tmp.path().display());
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}

/// Writes `contents` to standard output.
pub(crate) fn write_stdout(contents: &[u8]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(contents)?;
    stdout.flush()
}
