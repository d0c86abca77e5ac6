//! Centralized path management for on-disk storage.

use std::path::{Path, PathBuf};

/// Resolves the directories the document store writes to.
///
/// Layout:
/// ```text
/// base_dir/
/// ├── notes/
/// │   └── <note-uuid>.json
/// └── tasks/
///     └── <task-uuid>.json
/// ```
#[derive(Debug, Clone)]
pub struct SydPaths {
    base_dir: PathBuf,
}

impl SydPaths {
    /// Creates a path resolver rooted at `base_dir`, or at the platform
    /// data directory when `None`.
    pub fn new(base_dir: Option<&Path>) -> Self {
        let base_dir = base_dir.map(Path::to_path_buf).unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("syd-demo")
        });
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn notes_dir(&self) -> PathBuf {
        self.base_dir.join("notes")
    }

    pub fn tasks_dir(&self) -> PathBuf {
        self.base_dir.join("tasks")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_base_dir() {
        let paths = SydPaths::new(Some(Path::new("/tmp/syd-test")));
        assert_eq!(paths.notes_dir(), PathBuf::from("/tmp/syd-test/notes"));
        assert_eq!(paths.tasks_dir(), PathBuf::from("/tmp/syd-test/tasks"));
    }
}
