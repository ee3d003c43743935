use crate::error::fs::EnsureDirExistsError;
use crate::fs::composite::ensure_dir_exists;
use slog::{debug, Logger};
use std::path::{Path, PathBuf};

/// Name of the directory, under the application base directory, where the
/// application collects its static assets.
pub const STATIC_ASSETS_DIRNAME: &str = "staticfiles";

/// On-disk locations of an application staged on the platform.
#[derive(Clone, Debug)]
pub struct ProjectLayout {
    base_dir: PathBuf,
}

impl ProjectLayout {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Determines the path that serves as the static-asset root.
    pub fn static_assets_dir(&self) -> PathBuf {
        self.base_dir.join(STATIC_ASSETS_DIRNAME)
    }

    /// Makes sure the static-asset root exists, then returns its path so the
    /// caller can record it in the application settings.
    pub fn prepare_static_assets_dir(&self, log: &Logger) -> Result<PathBuf, EnsureDirExistsError> {
        let dir = self.static_assets_dir();
        ensure_dir_exists(log, &dir)?;
        debug!(log, "Static assets will be collected in {}.", dir.display());
        Ok(dir)
    }
}
