//! Backup-protected in-place file replacement
//!
//! The live file is renamed to `<file>.bak`, the new content is written to
//! the original path, and the backup is removed. If the write fails, the
//! partial file is removed and the backup renamed back, so the original path
//! always ends up holding either the old or the new content.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Suffix appended to the live file name while a replacement is in progress
pub const BACKUP_SUFFIX: &str = ".bak";

/// Failure of a protected replacement
#[derive(Error, Debug)]
pub enum ReplaceError {
    /// The live file could not be moved aside; nothing was changed
    #[error("failed to back up {}: {source}", path.display())]
    Backup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing failed and the original was restored
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing failed and the backup could not be moved back
    #[error(
        "failed to write {} ({write}) and failed to restore it from {} ({restore})",
        path.display(),
        backup.display()
    )]
    Restore {
        path: PathBuf,
        backup: PathBuf,
        write: io::Error,
        restore: io::Error,
    },
}

/// Path of the transient backup for `path`
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Replace the content of `path` with `contents`, restoring the original on failure
pub fn replace_file(path: &Path, contents: &str) -> Result<(), ReplaceError> {
    replace_file_with(path, |target| fs::write(target, contents))
}

/// Replace `path` using a caller-supplied writer.
///
/// `write` receives the original path after the live file has been moved to
/// its backup.
pub fn replace_file_with<F>(path: &Path, write: F) -> Result<(), ReplaceError>
where
    F: FnOnce(&Path) -> io::Result<()>,
{
    let backup = backup_path(path);

    fs::rename(path, &backup).map_err(|source| ReplaceError::Backup {
        path: path.to_path_buf(),
        source,
    })?;

    match write(path) {
        Ok(()) => {
            if let Err(err) = fs::remove_file(&backup) {
                tracing::warn!(backup = %backup.display(), "failed to remove backup: {err}");
            }
            Ok(())
        }
        Err(write_err) => {
            if path.exists() {
                if let Err(err) = fs::remove_file(path) {
                    tracing::warn!(path = %path.display(), "failed to remove partial write: {err}");
                }
            }

            match fs::rename(&backup, path) {
                Ok(()) => Err(ReplaceError::Write {
                    path: path.to_path_buf(),
                    source: write_err,
                }),
                Err(restore_err) => {
                    tracing::error!(
                        path = %path.display(),
                        backup = %backup.display(),
                        "original content left in backup: {restore_err}"
                    );
                    Err(ReplaceError::Restore {
                        path: path.to_path_buf(),
                        backup,
                        write: write_err,
                        restore: restore_err,
                    })
                }
            }
        }
    }
}
