//! File discovery for finding images in a single directory.

use std::path::Path;
use walkdir::WalkDir;

use crate::error::{PipelineError, PipelineResult};
use crate::types::SourceFile;

/// Order in which discovered files are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiscoveryOrder {
    /// Whatever order the filesystem enumerates entries in
    #[default]
    Filesystem,
    /// Sorted by file name, byte-wise and case-sensitive
    FileName,
}

/// Discovers image files directly inside a directory (no recursion).
pub struct FileDiscovery {
    supported_formats: Vec<String>,
    order: DiscoveryOrder,
}

impl FileDiscovery {
    /// Create a discovery over the given extension allow-list.
    ///
    /// Extensions are compared case-insensitively; a leading dot is ignored.
    pub fn new(supported_formats: &[String], order: DiscoveryOrder) -> Self {
        Self {
            supported_formats: supported_formats
                .iter()
                .map(|fmt| fmt.trim_start_matches('.').to_lowercase())
                .collect(),
            order,
        }
    }

    /// List the supported regular files in `dir`.
    ///
    /// Fails with [`PipelineError::DirectoryNotFound`] if `dir` is missing or
    /// not a directory. An existing directory without matches yields an
    /// empty vector.
    pub fn discover(&self, dir: &Path) -> PipelineResult<Vec<SourceFile>> {
        if !dir.is_dir() {
            return Err(PipelineError::DirectoryNotFound(dir.to_path_buf()));
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry in {:?}: {}", dir, e);
                    continue;
                }
            };
            if !entry.file_type().is_file() || !self.is_supported(entry.path()) {
                continue;
            }
            if let Some(file) = SourceFile::from_path(entry.path()) {
                files.push(file);
            }
        }

        if self.order == DiscoveryOrder::FileName {
            files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        }

        tracing::debug!("Discovered {} file(s) in {:?}", files.len(), dir);
        Ok(files)
    }

    /// Check if a file has a supported extension.
    fn is_supported(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext_lower = ext.to_lowercase();
                self.supported_formats.iter().any(|fmt| *fmt == ext_lower)
            })
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formats(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_is_supported() {
        let discovery = FileDiscovery::new(
            &formats(&[".jpg", "jpeg", "PNG", "gif"]),
            DiscoveryOrder::Filesystem,
        );

        assert!(discovery.is_supported(Path::new("test.jpg")));
        assert!(discovery.is_supported(Path::new("test.JPG")));
        assert!(discovery.is_supported(Path::new("test.jpeg")));
        assert!(discovery.is_supported(Path::new("test.png")));
        assert!(discovery.is_supported(Path::new("test.Gif")));
        assert!(!discovery.is_supported(Path::new("test.webp")));
        assert!(!discovery.is_supported(Path::new("test.txt")));
        assert!(!discovery.is_supported(Path::new("jpg")));
    }

    #[test]
    fn test_discover_filters_extensions_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.jpg"), b"x").unwrap();
        std::fs::write(dir.path().join("B.PNG"), b"x").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"x").unwrap();
        std::fs::create_dir(dir.path().join("folder.png")).unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested").join("deep.jpg"), b"x").unwrap();

        let discovery = FileDiscovery::new(
            &formats(&["jpg", "jpeg", "png", "gif"]),
            DiscoveryOrder::FileName,
        );
        let files = discovery.discover(dir.path()).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.file_name.as_str()).collect();

        assert_eq!(names, vec!["B.PNG", "a.jpg"]);
        assert_eq!(files[0].extension, "png");
    }

    #[test]
    fn test_discover_sorts_by_file_name() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["c.webp", "a.png", "b.jpg", "A.jpeg"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }

        let discovery = FileDiscovery::new(
            &formats(&["webp", "jpg", "jpeg", "png"]),
            DiscoveryOrder::FileName,
        );
        let files = discovery.discover(dir.path()).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.file_name.as_str()).collect();

        assert_eq!(names, vec!["A.jpeg", "a.png", "b.jpg", "c.webp"]);
    }

    #[test]
    fn test_discover_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("readme.md"), b"x").unwrap();

        let discovery = FileDiscovery::new(&formats(&["jpg"]), DiscoveryOrder::Filesystem);
        assert!(discovery.discover(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_discover_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let discovery = FileDiscovery::new(&formats(&["jpg"]), DiscoveryOrder::Filesystem);
        let err = discovery.discover(&missing).unwrap_err();
        assert!(matches!(err, PipelineError::DirectoryNotFound(p) if p == missing));
    }

    #[test]
    fn test_discover_file_path_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.jpg");
        std::fs::write(&file, b"x").unwrap();

        let discovery = FileDiscovery::new(&formats(&["jpg"]), DiscoveryOrder::Filesystem);
        assert!(matches!(
            discovery.discover(&file),
            Err(PipelineError::DirectoryNotFound(_))
        ));
    }
}
