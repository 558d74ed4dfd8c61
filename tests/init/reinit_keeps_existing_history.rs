use crate::common::command::{
    get_head_commit_sha, init_repository_dir, run_twig_command, twig_commit,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn reinit_keeps_existing_history(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "hello\n".to_string()));
    run_twig_command(dir, &["add", "a.txt"]).assert().success();
    twig_commit(dir, "first").assert().success();
    let head_before = get_head_commit_sha(dir)?;

    run_twig_command(dir, &["init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Reinitialized existing twig repository in",
        ));

    assert_eq!(get_head_commit_sha(dir)?, head_before);
    run_twig_command(dir, &["log", "--oneline"])
        .assert()
        .success()
        .stdout(format!("{} first\n", &head_before[..7]));

    Ok(())
}
