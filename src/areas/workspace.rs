use crate::REPOSITORY_DIR;
use crate::errors::RepositoryError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 1] = [REPOSITORY_DIR];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Expand a path into the files it names, relative to the workspace root
    ///
    /// A file yields itself; a directory yields every file below it, sorted, skipping
    /// the repository control directory.
    pub fn list_files(&self, root_file_path: &Path) -> anyhow::Result<Vec<PathBuf>> {
        let root_file_path = std::fs::canonicalize(root_file_path)
            .map_err(|e| RepositoryError::io(root_file_path.to_path_buf(), e))?;

        if !root_file_path.starts_with(&self.path) {
            anyhow::bail!(
                "{} is outside the repository at {}",
                root_file_path.display(),
                self.path.display()
            );
        }

        if root_file_path.is_dir() {
            Ok(WalkDir::new(&root_file_path)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|entry| entry.ok())
                .filter_map(|entry| self.check_if_not_ignored_file_path(entry.path()))
                .collect::<Vec<_>>())
        } else {
            Ok(self
                .check_if_not_ignored_file_path(&root_file_path)
                .into_iter()
                .collect())
        }
    }

    fn is_ignored(path: &Path) -> bool {
        path.components().any(|component| {
            if let std::path::Component::Normal(name) = component {
                let name_str = name.to_string_lossy();
                IGNORED_PATHS.contains(&name_str.as_ref())
            } else {
                false
            }
        })
    }

    fn check_if_not_ignored_file_path(&self, path: &Path) -> Option<PathBuf> {
        let relative_path = path.strip_prefix(self.path.as_ref()).ok()?;

        if path.is_file() && !Self::is_ignored(relative_path) {
            Some(relative_path.to_path_buf())
        } else {
            None
        }
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<String> {
        let file_path = self.path.join(file_path);

        let content = std::fs::read_to_string(&file_path)
            .map_err(|e| RepositoryError::io(file_path, e))?;

        Ok(content)
    }
}
