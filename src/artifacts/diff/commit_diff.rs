use crate::areas::database::Database;
use crate::artifacts::diff::lcs::{DiffRun, diff_lines};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileChange {
    /// The commit has no parent, so there is no earlier version to compare with
    FirstCommit,
    /// The parent commit does not list this path
    NewFile,
    /// The parent commit lists this path; runs turn its content into the new one
    Modified { old_oid: ObjectId, runs: Vec<DiffRun> },
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileReport {
    pub path: String,
    pub oid: ObjectId,
    pub content: String,
    pub change: FileChange,
}

/// Compares each file of a commit against the version its parent recorded
///
/// Only the direct parent's file list is consulted: a path absent there is new even if
/// an identical blob appears further back in history.
#[derive(Debug, new)]
pub struct CommitDiff<'d> {
    database: &'d Database,
}

impl CommitDiff<'_> {
    pub fn compare(&self, commit: &Commit) -> anyhow::Result<Vec<FileReport>> {
        let parent = commit
            .parent()
            .map(|parent_oid| self.database.parse_object_as_commit(parent_oid))
            .transpose()?;

        commit
            .files()
            .iter()
            .map(|entry| {
                let content = self.database.parse_object_as_blob(&entry.hash)?.into_content();

                let change = match &parent {
                    None => FileChange::FirstCommit,
                    Some(parent) => match parent.file(&entry.path) {
                        None => FileChange::NewFile,
                        Some(old_entry) => {
                            let old_content = self
                                .database
                                .parse_object_as_blob(&old_entry.hash)?
                                .into_content();

                            FileChange::Modified {
                                old_oid: old_entry.hash.clone(),
                                runs: diff_lines(&old_content, &content),
                            }
                        }
                    },
                };

                Ok(FileReport::new(
                    entry.path.clone(),
                    entry.hash.clone(),
                    content,
                    change,
                ))
            })
            .collect()
    }
}
