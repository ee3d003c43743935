use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("failed to create directory {path}")]
pub struct CreateDirError {
    pub path: PathBuf,
    pub source: std::io::Error,
}

#[derive(Error, Debug)]
pub enum EnsureDirExistsError {
    #[error(transparent)]
    CreateDir(#[from] CreateDirError),

    #[error("a non-directory already occupies '{0}'")]
    PathConflict(PathBuf),
}
