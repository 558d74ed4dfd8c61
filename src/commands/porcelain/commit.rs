use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::{Commit, CommitTime};
use crate::artifacts::objects::object_id::ObjectId;
use tracing::{info, warn};

impl Repository {
    /// Snapshot the staged files as a new commit on top of HEAD
    ///
    /// Steps: read HEAD, store the record, move HEAD, clear the index. If moving HEAD
    /// fails the stored record is left orphaned, which is harmless to the object store.
    /// An empty index still produces a commit, with no files.
    pub async fn commit(&self, message: &str) -> anyhow::Result<ObjectId> {
        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        let parent = self.refs().read_head()?;
        let is_root = match parent {
            Some(_) => "",
            None => "(root-commit) ",
        };

        let timestamp = CommitTime::load_from_env()?;
        let message = message.trim().to_string();
        let files = index.entries().cloned().collect::<Vec<_>>();

        let commit = Commit::new(parent, files, timestamp, message);
        let commit_id = self.database().store(commit.clone())?;

        if let Err(e) = self.refs().update_head(&commit_id) {
            warn!(oid = %commit_id, "commit stored but HEAD was not updated");
            return Err(e);
        }

        // now clear the staging area
        index.clear();
        index.write_updates()?;

        info!(oid = %commit_id, files = commit.files().len(), "created commit");
        writeln!(
            self.writer(),
            "[{}{}] {}",
            is_root,
            commit_id.to_short_oid(),
            commit.short_message()
        )?;

        Ok(commit_id)
    }
}
