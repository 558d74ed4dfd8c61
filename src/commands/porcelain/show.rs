use crate::areas::repository::Repository;
use crate::artifacts::diff::commit_diff::{FileChange, FileReport};
use crate::artifacts::diff::lcs::{ChangeKind, DiffRun};
use crate::artifacts::log::revision::Revision;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::commands::porcelain::log::LogOptions;
use colored::Colorize;

impl Repository {
    /// Resolve a commit and compare each of its files with the parent's version
    pub fn commit_changes(
        &self,
        revision: &str,
    ) -> anyhow::Result<(ObjectId, Commit, Vec<FileReport>)> {
        let commit_oid = Revision::try_parse(revision)?.resolve(self.refs(), self.database())?;
        let commit = self.get_commit(&commit_oid)?;
        let reports = self.database().commit_diff(&commit)?;

        Ok((commit_oid, commit, reports))
    }

    pub fn show(&self, revision: &str) -> anyhow::Result<Vec<FileReport>> {
        let (commit_oid, commit, reports) = self.commit_changes(revision)?;

        self.display_commit(&commit_oid, &commit, &LogOptions::default())?;

        for report in &reports {
            writeln!(self.writer())?;
            self.print_file_report(report)?;
        }

        Ok(reports)
    }

    fn print_file_report(&self, report: &FileReport) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{}",
            format!("diff {}", report.path).bold()
        )?;

        match &report.change {
            FileChange::FirstCommit => {
                writeln!(
                    self.writer(),
                    "{}",
                    format!("first commit {}", report.oid.to_short_oid()).bold()
                )?;
                self.print_diff_run(&Self::whole_file(report))?;
            }
            FileChange::NewFile => {
                writeln!(
                    self.writer(),
                    "{}",
                    format!("new file {}", report.oid.to_short_oid()).bold()
                )?;
                self.print_diff_run(&Self::whole_file(report))?;
            }
            FileChange::Modified { old_oid, runs } => {
                writeln!(
                    self.writer(),
                    "{}",
                    format!(
                        "index {}..{}",
                        old_oid.to_short_oid(),
                        report.oid.to_short_oid()
                    )
                    .bold()
                )?;
                for run in runs {
                    self.print_diff_run(run)?;
                }
            }
        }

        Ok(())
    }

    /// A file with no earlier version is shown as added in full
    fn whole_file(report: &FileReport) -> DiffRun {
        DiffRun::new(ChangeKind::Added, report.content.clone())
    }

    fn print_diff_run(&self, run: &DiffRun) -> anyhow::Result<()> {
        for line in run.lines() {
            let line = format!("{}{}", run.kind.marker(), line.trim_end_matches('\n'));
            let line = match run.kind {
                ChangeKind::Added => line.green(),
                ChangeKind::Removed => line.red(),
                ChangeKind::Unchanged => line.normal(),
            };
            writeln!(self.writer(), "{line}")?;
        }

        Ok(())
    }
}
