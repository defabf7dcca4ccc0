use std::io::Write;
use std::path::Path;

use hf_core::{Error, Result};
use tempfile::NamedTempFile;
use tracing::debug;

/// Replaces `path` with `contents` in one rename.
///
/// The data goes to a temporary file next to the destination first, so a
/// failed run leaves the previous file untouched.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(dir)
        .map_err(|e| Error::Write(format!("Cannot create {}: {}", dir.display(), e)))?;

    let mut tmp = NamedTempFile::new_in(dir)
        .map_err(|e| Error::Write(format!("Cannot create temp file in {}: {}", dir.display(), e)))?;
    tmp.write_all(contents)
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| Error::Write(format!("Cannot write {}: {}", path.display(), e)))?;
    tmp.persist(path)
        .map_err(|e| Error::Write(format!("Cannot replace {}: {}", path.display(), e.error)))?;

    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
