use std::{borrow::Cow, path::Path};

/// A file to be written: a path relative to the project root and the exact contents to put there.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSpec {
    pub path: &'static str,
    pub content: Cow<'static, str>,
}
impl FileSpec {
    pub fn new(path: &'static str, content: impl Into<Cow<'static, str>>) -> Self {
        Self {
            path,
            content: content.into(),
        }
    }
}
/// Represents a virtual file system: the directories to create and the files to write, staged
/// in memory before anything touches the disk.
///
/// Directories are created before any file, in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct VirtualFS {
    pub directories: Vec<&'static str>,
    pub files: Vec<FileSpec>,
}
impl VirtualFS {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_directory(mut self, path: &'static str) -> Self {
        self.directories.push(path);
        self
    }

    pub fn with_file(mut self, file: FileSpec) -> Self {
        self.files.push(file);
        self
    }

    pub fn file(&self, path: &str) -> Option<&FileSpec> {
        self.files.iter().find(|file| file.path == path)
    }
    /// Returns the files whose parent directory is neither the root nor created by (an entry of)
    /// the directory set.
    pub fn uncovered_files(&self) -> Vec<&FileSpec> {
        self.files
            .iter()
            .filter(|file| {
                let parent = Path::new(file.path).parent().unwrap_or(Path::new(""));

                if parent.as_os_str().is_empty() {
                    return false;
                }

                !self
                    .directories
                    .iter()
                    .any(|dir| Path::new(dir).starts_with(parent))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_files_are_covered() {
        let vfs = VirtualFS::new().with_file(FileSpec::new("index.html", "<html></html>"));

        assert!(vfs.uncovered_files().is_empty());
    }

    #[test]
    fn test_ancestor_of_directory_is_covered() {
        let vfs = VirtualFS::new()
            .with_directory("src/components")
            .with_file(FileSpec::new("src/main.js", ""))
            .with_file(FileSpec::new("src/components/Nav.vue", ""));

        assert!(vfs.uncovered_files().is_empty());
    }

    #[test]
    fn test_missing_directory_is_reported() {
        let vfs = VirtualFS::new()
            .with_directory("src/components")
            .with_file(FileSpec::new("src/stores/cart.js", ""));

        let uncovered: Vec<&str> = vfs.uncovered_files().iter().map(|f| f.path).collect();

        assert_eq!(uncovered, vec!["src/stores/cart.js"]);
    }
}
