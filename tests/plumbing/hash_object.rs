use crate::common::command::{init_repository_dir, run_twig_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::predicate;
use rstest::rstest;

const HELLO_OID: &str = "f572d396fae9206628714fb2ce00f72e94f2258f";

#[rstest]
fn hash_object_without_write_leaves_store_untouched(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "hello\n".to_string()));

    run_twig_command(dir, &["hash-object", "a.txt"])
        .assert()
        .success()
        .stdout(format!("{HELLO_OID}\n"));

    init_repository_dir
        .child(format!(".twig/objects/{HELLO_OID}"))
        .assert(predicate::path::missing());

    Ok(())
}

#[rstest]
fn hash_object_with_write_stores_blob(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "hello\n".to_string()));

    run_twig_command(dir, &["hash-object", "-w", "a.txt"])
        .assert()
        .success()
        .stdout(format!("{HELLO_OID}\n"));

    init_repository_dir
        .child(format!(".twig/objects/{HELLO_OID}"))
        .assert("hello\n");

    Ok(())
}
