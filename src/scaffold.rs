use crate::{
    errors::{FileOperation, IoError},
    vfs::VirtualFS,
};
use colored::Colorize;
use std::path::Path;

/// Applies directory and file creation operations from a [`VirtualFS`] under `destination_root`.
///
/// Nothing is rolled back: when a step fails the error is returned immediately and whatever was
/// already written stays on disk.
pub fn apply_vfs(vfs: &VirtualFS, destination_root: &Path) -> Result<(), IoError> {
    // First create all directories
    for dir in &vfs.directories {
        create_directory(&destination_root.join(dir))?;
    }

    // Then write all files
    for file in &vfs.files {
        write_file(&destination_root.join(file.path), file.content.as_bytes())?;
    }

    Ok(())
}
/// Creates all directories in the specified path if they do not exist.
///
/// An already existing directory is not an error.
///
/// # Errors
///
/// Returns an [`IoError`] if any directory creation fails, including when a component of the
/// path exists as a regular file.
fn create_directory(path: &Path) -> Result<(), IoError> {
    std::fs::create_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.into(), error))?;

    log::debug!("mkdir {}", path.display());

    Ok(())
}
/// Writes a file with the provided contents to the specified path, truncating any existing file.
///
/// # Errors
///
/// Returns an [`IoError`] if writing to the file fails due to I/O issues.
fn write_file(path: &Path, contents: &[u8]) -> Result<(), IoError> {
    std::fs::write(path, contents)
        .map_err(|error| IoError::new(FileOperation::Write, path.into(), error))?;

    log::info!("{} {}", "create".green(), path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::FileSpec;
    use std::fs;

    fn sample() -> VirtualFS {
        VirtualFS::new()
            .with_directory("src/components")
            .with_file(FileSpec::new("index.html", "<div id=\"app\"></div>\n"))
            .with_file(FileSpec::new("src/components/Nav.vue", "<template></template>\n"))
    }

    #[test]
    fn test_apply_writes_files_verbatim() {
        let root = tempfile::tempdir().unwrap();

        apply_vfs(&sample(), root.path()).unwrap();

        assert_eq!(
            fs::read_to_string(root.path().join("index.html")).unwrap(),
            "<div id=\"app\"></div>\n"
        );
        assert!(root.path().join("src/components").is_dir());
    }

    #[test]
    fn test_apply_truncates_longer_existing_file() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("index.html"), "x".repeat(4096)).unwrap();

        apply_vfs(&sample(), root.path()).unwrap();

        assert_eq!(
            fs::read_to_string(root.path().join("index.html")).unwrap(),
            "<div id=\"app\"></div>\n"
        );
    }

    #[test]
    fn test_mkdir_failure_reports_path() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("src"), "not a directory").unwrap();

        let error = apply_vfs(&sample(), root.path()).unwrap_err();

        assert!(matches!(error.operation, FileOperation::Mkdir));
        assert_eq!(error.path, root.path().join("src/components"));
        // directories come first, so no file was written
        assert!(!root.path().join("index.html").exists());
    }

    #[test]
    fn test_write_failure_keeps_earlier_files() {
        let root = tempfile::tempdir().unwrap();
        let vfs = sample().with_file(FileSpec::new("missing/late.txt", "late"));

        let error = apply_vfs(&vfs, root.path()).unwrap_err();

        assert!(matches!(error.operation, FileOperation::Write));
        assert!(root.path().join("index.html").is_file());
        assert!(root.path().join("src/components/Nav.vue").is_file());
    }
}
