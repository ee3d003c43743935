pub mod composite;

use crate::error::fs::CreateDirError;
use std::path::Path;

/// Creates a single directory. The immediate parent must already exist.
pub fn create_dir(path: &Path) -> Result<(), CreateDirError> {
    std::fs::create_dir(path).map_err(|source| CreateDirError {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn create_dir_is_single_level() {
        let td = TempDir::new().unwrap();

        let err = create_dir(&td.path().join("missing/child")).unwrap_err();

        assert_eq!(err.source.kind(), ErrorKind::NotFound);
        assert!(!td.path().join("missing").exists());
    }

    #[test]
    fn create_dir_reports_an_existing_occupant() {
        let td = TempDir::new().unwrap();
        let target = td.path().join("taken");
        std::fs::create_dir(&target).unwrap();

        let err = create_dir(&target).unwrap_err();

        assert_eq!(err.path, target);
        assert_eq!(err.source.kind(), ErrorKind::AlreadyExists);
    }
}
