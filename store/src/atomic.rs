//! Crash-safe collection writes.
//!
//! Each collection is rewritten whole: serialize into a temp file in the same
//! directory, fsync, then rename over the target. Where rename cannot replace
//! an existing file (Windows), the old file is moved to `.bak` first and the
//! backup is restored on failure.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Restore `path` from `path.bak` if a previous write stopped between the
/// backup rename and the final persist.
pub(crate) fn recover_bak_file(path: &Path) {
    let backup = path.with_extension("bak");
    if !path.exists() && backup.exists() {
        match fs::rename(&backup, path) {
            Ok(()) => {
                tracing::warn!(
                    path = %path.display(),
                    "Recovered .bak file from interrupted write"
                );
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    "Failed to recover .bak file: {e}"
                );
            }
        }
    }
}

pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;

    if let Err(err) = tmp.persist(path) {
        if !path.exists() {
            return Err(err.error);
        }

        let backup_path = path.with_extension("bak");
        let _ = fs::remove_file(&backup_path);
        fs::rename(path, &backup_path)?;

        if let Err(rename_err) = err.file.persist(path) {
            let _ = fs::rename(&backup_path, path);
            return Err(rename_err.error);
        }
        if let Err(e) = fs::remove_file(&backup_path) {
            tracing::warn!(
                path = %backup_path.display(),
                "Failed to remove .bak after write: {e}"
            );
        }
    }

    Ok(())
}
