use crate::common::READABLE_COMMIT_DATE;
use crate::common::command::{
    get_head_commit_sha, read_commit, repository_with_two_commits, run_twig_command,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use twig::areas::database::Database;

#[rstest]
fn show_modified_and_new_files(
    repository_with_two_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_with_two_commits.path();
    let second = get_head_commit_sha(dir)?;
    let first = read_commit(dir, &second)?
        .parent()
        .map(|oid| oid.to_string())
        .ok_or("second commit has no parent")?;
    let bee = Database::hash(b"bee\n").to_short_oid();

    let expected = format!(
        "commit {second}\n\
         Parent: {first}\n\
         Date:   {READABLE_COMMIT_DATE}\n\
         \n    second\n\
         \n\
         diff a.txt\n\
         index f572d39..58853e8\n \
         hello\n\
         +world\n\
         \n\
         diff b.txt\n\
         new file {bee}\n\
         +bee\n"
    );

    let output = run_twig_command(dir, &["show", &second])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(String::from_utf8(output)?, expected);

    Ok(())
}

#[rstest]
fn show_removed_lines(
    repository_with_two_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_with_two_commits.path();
    std::fs::write(dir.join("a.txt"), "world\n")?;
    run_twig_command(dir, &["add", "a.txt"]).assert().success();
    run_twig_command(dir, &["commit", "-m", "drop hello"])
        .assert()
        .success();

    let output = run_twig_command(dir, &["show", "HEAD"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output)?;

    assert!(output.ends_with("diff a.txt\nindex 58853e8..9591818\n-hello\n world\n"));

    Ok(())
}
