use crate::common::READABLE_COMMIT_DATE;
use crate::common::command::{
    get_head_commit_sha, read_commit, repository_with_two_commits, run_twig_command,
};
use assert_fs::TempDir;
use rstest::rstest;

fn commit_ids(dir: &std::path::Path) -> Result<(String, String), Box<dyn std::error::Error>> {
    let second = get_head_commit_sha(dir)?;
    let first = read_commit(dir, &second)?
        .parent()
        .map(|oid| oid.to_string())
        .ok_or("second commit has no parent")?;

    Ok((first, second))
}

#[rstest]
fn log_multiple_commits_in_medium_format(
    repository_with_two_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_with_two_commits.path();
    let (first, second) = commit_ids(dir)?;

    let expected = format!(
        "commit {second}\n\
         Parent: {first}\n\
         Date:   {READABLE_COMMIT_DATE}\n\
         \n    second\n\
         \n\
         commit {first}\n\
         Date:   {READABLE_COMMIT_DATE}\n\
         \n    first\n"
    );

    run_twig_command(dir, &["log"])
        .assert()
        .success()
        .stdout(expected);

    Ok(())
}

#[rstest]
fn log_multiple_commits_in_oneline_format(
    repository_with_two_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_with_two_commits.path();
    let (first, second) = commit_ids(dir)?;

    run_twig_command(dir, &["log", "--oneline"])
        .assert()
        .success()
        .stdout(format!("{} second\n{} first\n", &second[..7], &first[..7]));

    run_twig_command(dir, &["log", "--format", "one-line"])
        .assert()
        .success()
        .stdout(format!("{second} second\n{first} first\n"));

    Ok(())
}

#[rstest]
fn log_with_abbrev_commit_flag(
    repository_with_two_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_with_two_commits.path();
    let (first, second) = commit_ids(dir)?;

    let expected = format!(
        "commit {}\n\
         Parent: {}\n\
         Date:   {READABLE_COMMIT_DATE}\n\
         \n    second\n\
         \n\
         commit {}\n\
         Date:   {READABLE_COMMIT_DATE}\n\
         \n    first\n",
        &second[..7],
        &first[..7],
        &first[..7]
    );

    run_twig_command(dir, &["log", "--abbrev-commit"])
        .assert()
        .success()
        .stdout(expected);

    Ok(())
}
