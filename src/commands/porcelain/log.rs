use crate::CommitDisplayFormat;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use colored::Colorize;

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub oneline: bool,
    pub abbrev_commit: bool,
    pub format: CommitDisplayFormat,
}

impl Repository {
    /// Print history from HEAD, newest first
    ///
    /// Commits are printed as they are walked, so a broken link fails the command after
    /// the intact part of the history has been shown.
    pub fn log(&self, opts: &LogOptions) -> anyhow::Result<usize> {
        let mut shown = 0;

        for entry in self.rev_list()? {
            let (commit_oid, commit) = entry?;

            if shown > 0 && !opts.oneline && opts.format == CommitDisplayFormat::Medium {
                writeln!(self.writer())?;
            }
            self.display_commit(&commit_oid, &commit, opts)?;
            shown += 1;
        }

        Ok(shown)
    }

    pub fn display_commit(
        &self,
        commit_oid: &ObjectId,
        commit: &Commit,
        opts: &LogOptions,
    ) -> anyhow::Result<()> {
        if opts.oneline {
            return self.show_commit_oneline(commit_oid, commit, true);
        }

        match opts.format {
            CommitDisplayFormat::Medium => {
                self.show_commit_medium(commit_oid, commit, opts.abbrev_commit)
            }
            CommitDisplayFormat::OneLine => {
                self.show_commit_oneline(commit_oid, commit, opts.abbrev_commit)
            }
        }
    }

    fn show_commit_medium(
        &self,
        commit_oid: &ObjectId,
        commit: &Commit,
        abbrev_commit: bool,
    ) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{}",
            format!("commit {}", Self::abbrev_commit_id(commit_oid, abbrev_commit)).yellow()
        )?;
        if let Some(parent) = commit.parent() {
            writeln!(
                self.writer(),
                "Parent: {}",
                Self::abbrev_commit_id(parent, abbrev_commit)
            )?;
        }
        writeln!(self.writer(), "Date:   {}", commit.timestamp().readable())?;
        writeln!(self.writer())?;
        for message_line in commit.message().lines() {
            writeln!(self.writer(), "    {}", message_line)?;
        }

        Ok(())
    }

    fn show_commit_oneline(
        &self,
        commit_oid: &ObjectId,
        commit: &Commit,
        abbrev_commit: bool,
    ) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{} {}",
            Self::abbrev_commit_id(commit_oid, abbrev_commit).yellow(),
            commit.short_message()
        )?;

        Ok(())
    }

    fn abbrev_commit_id(commit_oid: &ObjectId, abbrev_commit: bool) -> String {
        if abbrev_commit {
            commit_oid.to_short_oid()
        } else {
            commit_oid.to_string()
        }
    }
}
