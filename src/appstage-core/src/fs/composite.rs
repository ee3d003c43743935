use crate::error::fs::EnsureDirExistsError;
use crate::error::fs::EnsureDirExistsError::PathConflict;
use slog::{debug, trace, Logger};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Makes sure `path` and all of its ancestors exist as directories.
///
/// Existing directories are left untouched, so the call is idempotent. If a
/// non-directory node occupies `path` or any ancestor of it, the call fails
/// with [`EnsureDirExistsError::PathConflict`] before creating anything.
pub fn ensure_dir_exists(log: &Logger, path: &Path) -> Result<(), EnsureDirExistsError> {
    if path.is_dir() {
        trace!(log, "Directory {} already exists.", path.display());
        return Ok(());
    }
    if path.exists() {
        return Err(PathConflict(path.to_path_buf()));
    }

    let mut prefix = PathBuf::new();
    for component in path.components() {
        prefix.push(component);
        if !matches!(component, Component::Normal(_)) {
            // roots, drive prefixes and `.`/`..` are never created
            continue;
        }
        if prefix.is_dir() {
            continue;
        }
        if prefix.exists() {
            return Err(PathConflict(prefix));
        }
        create_dir_accepting_existing(&prefix)?;
        debug!(log, "Created directory {}.", prefix.display());
    }
    Ok(())
}

/// Creates exactly one directory level, accepting a directory that another
/// process created first. Any other occupant of the path is a conflict.
fn create_dir_accepting_existing(path: &Path) -> Result<(), EnsureDirExistsError> {
    match crate::fs::create_dir(path) {
        Ok(()) => Ok(()),
        Err(err) if err.source.kind() == ErrorKind::AlreadyExists => {
            if path.is_dir() {
                Ok(())
            } else {
                Err(PathConflict(path.to_path_buf()))
            }
        }
        Err(err) => Err(err.into()),
    }
}
