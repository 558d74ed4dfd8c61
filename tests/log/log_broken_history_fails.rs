use crate::common::command::{
    get_head_commit_sha, read_commit, repository_with_two_commits, run_twig_command,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn log_broken_history_fails(
    repository_with_two_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_with_two_commits.path();
    let second = get_head_commit_sha(dir)?;
    let first = read_commit(dir, &second)?
        .parent()
        .map(|oid| oid.to_string())
        .ok_or("second commit has no parent")?;

    std::fs::remove_file(dir.join(".twig/objects").join(&first))?;

    run_twig_command(dir, &["log", "--oneline"])
        .assert()
        .failure()
        .stdout(format!("{} second\n", &second[..7]))
        .stderr(predicate::str::contains(format!("object {first} not found")));

    Ok(())
}
