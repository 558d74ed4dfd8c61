use crate::common::READABLE_COMMIT_DATE;
use crate::common::command::{
    get_head_commit_sha, init_repository_dir, run_twig_command, twig_commit,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_first_commit(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "hello\n".to_string()));
    run_twig_command(dir, &["add", "a.txt"]).assert().success();
    twig_commit(dir, "first").assert().success();
    let head = get_head_commit_sha(dir)?;

    let expected = format!(
        "commit {head}\n\
         Date:   {READABLE_COMMIT_DATE}\n\
         \n    first\n\
         \n\
         diff a.txt\n\
         first commit f572d39\n\
         +hello\n"
    );

    run_twig_command(dir, &["show"])
        .assert()
        .success()
        .stdout(expected);

    Ok(())
}

#[rstest]
fn show_first_commit_prints_every_line_of_each_file(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(
        dir.join("notes.txt"),
        "UNIQUE_CONTENT_LINE\nsecond line".to_string(),
    ));
    run_twig_command(dir, &["add", "notes.txt"]).assert().success();
    twig_commit(dir, "notes").assert().success();

    let output = run_twig_command(dir, &["show", "HEAD"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output)?;

    assert!(output.ends_with("+UNIQUE_CONTENT_LINE\n+second line\n"));

    Ok(())
}
