use crate::common::command::{init_repository_dir, run_twig_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn add_nonexistent_file_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "hello\n".to_string()));

    run_twig_command(dir, &["add", "a.txt", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.txt"));

    // nothing is staged when one of the paths cannot be read
    init_repository_dir.child(".twig/index").assert("[]");

    Ok(())
}

#[rstest]
fn add_outside_repository_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let outside = TempDir::new()?;
    outside.child("stray.txt").write_str("stray\n")?;

    run_twig_command(
        init_repository_dir.path(),
        &["add", &outside.child("stray.txt").path().display().to_string()],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("outside the repository"));

    init_repository_dir.child(".twig/index").assert("[]");

    Ok(())
}
