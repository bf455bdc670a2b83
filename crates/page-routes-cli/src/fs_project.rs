// File: src/fs_project.rs
// Purpose: Enumerates page files from the application directory on disk

use page_routes::{parse_page_directive, PageProject, ProjectItem};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Page project backed by a directory on disk
///
/// Application-relative paths such as `/Pages/Index.cshtml` resolve against
/// `root`. Files are enumerated sorted by name so discovery order is stable.
#[derive(Debug, Clone)]
pub struct FileSystemProject {
    root: PathBuf,
    extension: String,
}

impl FileSystemProject {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    fn resolve(&self, app_path: &str) -> PathBuf {
        self.root.join(app_path.trim_start_matches('/'))
    }

    fn has_page_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.extension))
    }
}

impl PageProject for FileSystemProject {
    fn enumerate_items(&self, base_path: &str) -> Vec<ProjectItem> {
        let base = base_path.trim_end_matches('/');
        let dir = self.resolve(base);
        if !dir.is_dir() {
            return Vec::new();
        }

        WalkDir::new(&dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|entry| entry.file_type().is_file() && self.has_page_extension(entry.path()))
            .filter_map(|entry| {
                let relative = entry.path().strip_prefix(&dir).ok()?;
                let file_path = relative
                    .components()
                    .map(|component| component.as_os_str().to_string_lossy())
                    .fold(String::new(), |mut path, segment| {
                        path.push('/');
                        path.push_str(&segment);
                        path
                    });
                Some(ProjectItem::new(base, file_path))
            })
            .collect()
    }

    fn page_directive(&self, item: &ProjectItem) -> Option<String> {
        let path = self.resolve(&item.combined_path());
        match fs::read_to_string(&path) {
            Ok(source) => parse_page_directive(&source),
            Err(err) => {
                warn!("Failed to read page {:?}: {}", path, err);
                None
            }
        }
    }
}
