use crate::common::command::{init_repository_dir, repository_with_two_commits, run_twig_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn show_unknown_full_hash_fails(
    repository_with_two_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_twig_command(
        repository_with_two_commits.path(),
        &["show", "0000000000000000000000000000000000000000"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("not found"));

    Ok(())
}

#[rstest]
fn show_invalid_revision_fails(
    repository_with_two_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_twig_command(repository_with_two_commits.path(), &["show", "main"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid object id: main"));

    Ok(())
}

#[rstest]
fn show_blob_as_commit_fails(
    repository_with_two_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_twig_command(repository_with_two_commits.path(), &["show", "f572d39"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt"));

    Ok(())
}

#[rstest]
fn show_without_commits_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_twig_command(init_repository_dir.path(), &["show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no commits yet"));

    Ok(())
}
