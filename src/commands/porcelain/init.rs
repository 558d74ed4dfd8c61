use crate::areas::repository::Repository;
use crate::errors::RepositoryError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// What `init` found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Initialized,
    AlreadyExists,
}

impl Repository {
    /// Create the objects directory, an empty HEAD and an empty index
    ///
    /// Existing control files are left untouched; if both were already present the
    /// repository is reported as already initialized.
    pub async fn init(&self) -> anyhow::Result<InitOutcome> {
        let objects_path = self.database().objects_path();
        fs::create_dir_all(objects_path)
            .map_err(|e| RepositoryError::io(objects_path.to_path_buf(), e))?;

        let index = self.index();
        let index = index.lock().await;

        let head_created = Self::create_new(&self.refs().head_path(), b"")?;
        let index_created = Self::create_new(index.path(), b"[]")?;

        let outcome = if head_created || index_created {
            writeln!(
                self.writer(),
                "Initialized empty twig repository in {}",
                self.control_path().display()
            )?;
            InitOutcome::Initialized
        } else {
            writeln!(
                self.writer(),
                "Reinitialized existing twig repository in {}",
                self.control_path().display()
            )?;
            InitOutcome::AlreadyExists
        };

        Ok(outcome)
    }

    fn create_new(path: &Path, content: &[u8]) -> anyhow::Result<bool> {
        match fs::OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(mut file) => {
                std::io::Write::write_all(&mut file, content)
                    .map_err(|e| RepositoryError::io(path.to_path_buf(), e))?;
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(RepositoryError::io(path.to_path_buf(), e).into()),
        }
    }
}
