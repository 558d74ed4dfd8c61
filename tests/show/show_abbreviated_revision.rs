use crate::common::command::{
    get_head_commit_sha, read_commit, repository_with_two_commits, run_twig_command,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn show_abbreviated_revision(
    repository_with_two_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_with_two_commits.path();
    let second = get_head_commit_sha(dir)?;
    let first = read_commit(dir, &second)?
        .parent()
        .map(|oid| oid.to_string())
        .ok_or("second commit has no parent")?;

    run_twig_command(dir, &["show", &first[..8]])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!("commit {first}\n")))
        .stdout(predicate::str::contains("first commit f572d39"));

    Ok(())
}
